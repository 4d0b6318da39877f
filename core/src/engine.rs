use crate::document::{Document, DocumentStatus};
use crate::index::InvertedIndex;
use crate::query::{self, Query};
use crate::tokenizer::StopWords;
use crate::{ranker, DocId, Execution, Result, SearchError};
use std::collections::BTreeMap;

/// In-memory TF-IDF search over short documents.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Create an engine from any collection of stop words.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_stop_words(StopWords::new(stop_words)?)
    }

    /// Create an engine from whitespace-separated stop words.
    pub fn with_stop_words_text(text: &str) -> Result<Self> {
        Self::with_stop_words(StopWords::from_text(text)?)
    }

    fn with_stop_words(stop_words: StopWords) -> Result<Self> {
        tracing::debug!(stop_words = stop_words.len(), "created search engine");
        Ok(Self { stop_words, index: InvertedIndex::new() })
    }

    pub fn add_document(&mut self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.index.add_document(id, text, ratings, status, &self.stop_words)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, move |_, s, _| s == status)
    }

    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.search(Execution::Sequential, raw_query, predicate)
    }

    /// Same as [`find_top_documents`](Self::find_top_documents) under the given strategy.
    pub fn find_top_documents_exec(&self, execution: Execution, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status_exec(execution, raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status_exec(
        &self,
        execution: Execution,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.search(execution, raw_query, move |_, s, _| s == status)
    }

    pub fn find_top_documents_with_exec<P>(&self, execution: Execution, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.search(execution, raw_query, predicate)
    }

    fn search<P>(&self, execution: Execution, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = self.parse_query(raw_query)?;
        Ok(ranker::find_top(&self.index, &query, &predicate, execution))
    }

    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        self.match_document_exec(Execution::Sequential, raw_query, id)
    }

    /// Plus words of the query found in document `id`; empty when any minus word is present.
    pub fn match_document_exec(
        &self,
        execution: Execution,
        raw_query: &str,
        id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = self.parse_query(raw_query)?;
        let meta = self.index.meta(id).ok_or(SearchError::DocumentNotFound(id))?;
        let terms = self.index.document_terms(id).ok_or(SearchError::DocumentNotFound(id))?;

        let minus: Vec<&String> = query.minus_words.iter().collect();
        if execution.map(&minus, |word| terms.contains_key(word.as_str())).into_iter().any(|hit| hit) {
            return Ok((Vec::new(), meta.status));
        }
        let plus: Vec<&String> = query.plus_words.iter().collect();
        let matched = execution
            .map(&plus, |word| terms.contains_key(word.as_str()).then(|| (*word).clone()))
            .into_iter()
            .flatten()
            .collect();
        Ok((matched, meta.status))
    }

    pub fn remove_document(&mut self, id: DocId) {
        self.index.remove_document(Execution::Sequential, id);
    }

    pub fn remove_document_exec(&mut self, execution: Execution, id: DocId) {
        self.index.remove_document(execution, id);
    }

    /// Term frequencies of document `id`, empty for unknown ids.
    pub fn word_frequencies(&self, id: DocId) -> BTreeMap<String, f64> {
        self.index.word_frequencies(id)
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    /// Live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ { self.index.document_ids() }

    fn parse_query(&self, raw_query: &str) -> Result<Query> {
        query::parse(raw_query, &self.stop_words)
    }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocId;
    type IntoIter = Box<dyn Iterator<Item = DocId> + 'a>;

    fn into_iter(self) -> Self::IntoIter { Box::new(self.document_ids()) }
}
