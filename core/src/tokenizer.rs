use crate::{Result, SearchError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\S+").expect("valid regex");
    static ref CONTROL: Regex = Regex::new(r"[\x00-\x1F]").expect("valid regex");
}

/// Split text on runs of whitespace.
pub fn split(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// A word is valid when it holds no characters below U+0020.
pub fn is_valid(word: &str) -> bool {
    !CONTROL.is_match(word)
}

/// Collect the distinct non-empty strings of `strings`.
pub fn unique_nonempty<I, S>(strings: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = unique_nonempty(words);
        if let Some(bad) = words.iter().find(|w| !is_valid(w)) {
            return Err(SearchError::InvalidWord(bad.clone()));
        }
        Ok(Self { words })
    }

    /// Build from a whitespace-delimited list, e.g. `"and in on"`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(split(text))
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub(crate) fn len(&self) -> usize { self.words.len() }
}

/// Split `text` and drop stop words, failing on the first invalid word.
pub fn split_no_stop<'a>(text: &'a str, stop_words: &StopWords) -> Result<Vec<&'a str>> {
    let mut words = Vec::new();
    for word in split(text) {
        if !is_valid(word) {
            return Err(SearchError::InvalidWord(word.to_string()));
        }
        if !stop_words.contains(word) {
            words.push(word);
        }
    }
    Ok(words)
}
