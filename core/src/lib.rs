pub mod batch;
pub mod document;
pub mod duplicates;
pub mod engine;
pub mod error;
pub mod execution;
pub mod index;
pub mod query;
pub mod ranker;
pub mod request_queue;
pub mod shared;
pub mod tokenizer;

pub use document::{Document, DocumentStatus};
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use execution::Execution;
pub use shared::SharedSearchEngine;

/// Document identifier. Signed so that negative ids can be rejected at the API boundary.
pub type DocId = i32;

/// Upper bound on the number of documents returned by a single search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are considered equal when ranking.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
