mod collect;
mod error;
mod extract;
mod http;
mod source;

pub use collect::{CollectReport, Collector};
pub use error::{CollectError, FetchError};
pub use extract::{Extractor, PageEntries};
pub use http::HttpSource;
pub use source::PageSource;
