use crate::document::{Document, DocumentStatus};
use crate::{DocId, Execution, Result, SearchEngine};
use std::collections::VecDeque;

/// Number of requests kept in the window: one per minute of a day.
pub const MIN_IN_DAY: usize = 1440;

struct QueryResult {
    raw_query: String,
    hits: usize,
}

/// Records recent searches and counts how many of them found nothing.
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<QueryResult>,
    capacity: usize,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self { Self::with_capacity(engine, MIN_IN_DAY) }

    pub fn with_capacity(engine: &'a SearchEngine, capacity: usize) -> Self {
        Self { engine, requests: VecDeque::with_capacity(capacity), capacity: capacity.max(1), no_result_requests: 0 }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.engine.find_top_documents(raw_query)?;
        self.record(raw_query, &result);
        Ok(result)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.add_find_request_exec(Execution::Sequential, raw_query, status)
    }

    pub fn add_find_request_exec(
        &mut self,
        execution: Execution,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let result = self.engine.find_top_documents_by_status_exec(execution, raw_query, status)?;
        self.record(raw_query, &result);
        Ok(result)
    }

    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let result = self.engine.find_top_documents_with(raw_query, predicate)?;
        self.record(raw_query, &result);
        Ok(result)
    }

    /// Zero-result requests currently inside the window.
    pub fn no_result_requests(&self) -> usize { self.no_result_requests }

    pub fn len(&self) -> usize { self.requests.len() }

    pub fn is_empty(&self) -> bool { self.requests.is_empty() }

    /// Queries inside the window, oldest first.
    pub fn recent_queries(&self) -> impl Iterator<Item = &str> + '_ {
        self.requests.iter().map(|r| r.raw_query.as_str())
    }

    fn record(&mut self, raw_query: &str, result: &[Document]) {
        if self.requests.len() == self.capacity {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.hits == 0 {
                    self.no_result_requests -= 1;
                }
            }
        }
        if result.is_empty() {
            self.no_result_requests += 1;
        }
        self.requests.push_back(QueryResult { raw_query: raw_query.to_string(), hits: result.len() });
    }
}
