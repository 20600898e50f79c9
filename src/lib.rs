pub mod dataset;
pub mod error;
pub mod groupby;
pub mod io;
pub mod pipeline;
pub mod stats;

// Re-export commonly used types
pub use dataset::{Dataset, GroupSummary, Record};
pub use error::{Error, Result};
pub use groupby::GroupBy;
pub use pipeline::DEFAULT_OUTLIER_FACTOR;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
