pub mod types;

pub use types::{Entry, OutputFormat, WordRecord};
