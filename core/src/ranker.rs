//! TF-IDF scoring and top-K ordering.

use crate::document::{Document, DocumentStatus};
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, Execution, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
use std::collections::{BTreeMap, BTreeSet};

/// Score every document matching the query's plus words and passing `predicate`,
/// then drop documents containing any minus word.
pub fn find_all<P>(index: &InvertedIndex, query: &Query, predicate: &P, execution: Execution) -> BTreeMap<DocId, f64>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    let plus: Vec<&String> = query.plus_words.iter().collect();
    let minus: Vec<&String> = query.minus_words.iter().collect();

    let (partials, excluded) = execution.join(
        || execution.map(&plus, |word| score_word(index, word, predicate)),
        || execution.map(&minus, |word| documents_with(index, word)),
    );

    // Merging in query-word order keeps the floating-point sum identical across strategies.
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for partial in partials {
        for (id, score) in partial {
            *relevance.entry(id).or_insert(0.0) += score;
        }
    }
    for id in excluded.into_iter().flatten() {
        relevance.remove(&id);
    }
    relevance
}

fn score_word<P>(index: &InvertedIndex, word: &str, predicate: &P) -> Vec<(DocId, f64)>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    let Some(postings) = index.postings(word) else {
        return Vec::new();
    };
    let idf = index.inverse_document_frequency(word);
    postings
        .iter()
        .filter_map(|(&id, &tf)| {
            let meta = index.meta(id)?;
            predicate(id, meta.status, meta.rating).then_some((id, tf * idf))
        })
        .collect()
}

fn documents_with(index: &InvertedIndex, word: &str) -> BTreeSet<DocId> {
    index.postings(word).map(|docs| docs.keys().copied().collect()).unwrap_or_default()
}

/// Order by relevance, treating relevances closer than [`RELEVANCE_EPSILON`] as
/// equal and breaking those ties by rating, then keep the best
/// [`MAX_RESULT_DOCUMENT_COUNT`].
pub fn top_documents(mut documents: Vec<Document>) -> Vec<Document> {
    documents.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then(a.id.cmp(&b.id)));

    // A document moves up only past near-equal neighbours with a lower rating,
    // so a gap of at least the epsilon is never crossed.
    for i in 1..documents.len() {
        let mut j = i;
        while j > 0
            && documents[j - 1].relevance - documents[j].relevance < RELEVANCE_EPSILON
            && documents[j - 1].rating < documents[j].rating
        {
            documents.swap(j - 1, j);
            j -= 1;
        }
    }
    documents.truncate(MAX_RESULT_DOCUMENT_COUNT);
    documents
}

pub fn find_top<P>(index: &InvertedIndex, query: &Query, predicate: &P, execution: Execution) -> Vec<Document>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    let documents = find_all(index, query, predicate, execution)
        .into_iter()
        .filter_map(|(id, relevance)| index.meta(id).map(|meta| Document::new(id, relevance, meta.rating)))
        .collect();
    top_documents(documents)
}
