use crate::tokenizer::{is_valid, split, StopWords};
use crate::{Result, SearchError};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
}

fn parse_query_word(text: &str) -> Result<QueryWord<'_>> {
    let (data, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if data.is_empty() {
        return Err(SearchError::EmptyMinusWord);
    }
    if data.starts_with('-') {
        return Err(SearchError::DoubleMinus(text.to_string()));
    }
    if !is_valid(data) {
        return Err(SearchError::InvalidWord(text.to_string()));
    }
    Ok(QueryWord { data, is_minus })
}

/// Parse a raw query into distinct plus and minus words, dropping stop words.
pub fn parse(text: &str, stop_words: &StopWords) -> Result<Query> {
    let mut query = Query::default();
    for word in split(text) {
        let word = parse_query_word(word)?;
        if stop_words.contains(word.data) {
            continue;
        }
        if word.is_minus {
            query.minus_words.insert(word.data.to_string());
        } else {
            query.plus_words.insert(word.data.to_string());
        }
    }
    Ok(query)
}
