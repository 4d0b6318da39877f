use crate::DocId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("negative document id {0}")]
    NegativeId(DocId),
    #[error("document with id {0} already exists")]
    DuplicateId(DocId),
    /// A document, query or stop word contains control characters.
    #[error("word {0:?} contains special symbols")]
    InvalidWord(String),
    #[error("missing word after '-' in query")]
    EmptyMinusWord,
    #[error("too many '-'s in query word {0:?}")]
    DoubleMinus(String),
    #[error("document {0} not found")]
    DocumentNotFound(DocId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
