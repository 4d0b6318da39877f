use crate::{Document, Result, SearchEngine};
use rayon::prelude::*;

/// Run every query against `engine` in parallel, keeping input order.
///
/// If several queries are malformed, the error returned may come from any of them.
pub fn process_queries<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query.as_ref()))
        .collect()
}

/// [`process_queries`] with the per-query results concatenated.
pub fn process_queries_joined<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?.into_iter().flatten().collect())
}
