pub mod csv;

// Re-export commonly used functions
pub use csv::{read_csv, write_summaries};
