//! Search-term derivation: identifier, natural name, meaningful words, and
//! their synonyms, duplicate-free in first-occurrence order.

use crate::natural::natural_name;
use crate::normalize::normalize;
use crate::synonyms::synonyms_for;

/// Tokens shorter than this never become standalone search terms.
const MIN_MEANINGFUL_LEN: usize = 3;

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an"
            | "and"
            | "are"
            | "as"
            | "at"
            | "be"
            | "by"
            | "for"
            | "from"
            | "has"
            | "he"
            | "in"
            | "is"
            | "it"
            | "its"
            | "of"
            | "on"
            | "that"
            | "the"
            | "to"
            | "was"
            | "will"
            | "with"
            | "tbl"
            | "table"
            | "db"
            | "database"
    )
}

/// Normalize text and keep the tokens worth indexing: at least
/// [`MIN_MEANINGFUL_LEN`] characters and not in the stop-word set.
pub fn meaningful_words(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| word.len() >= MIN_MEANINGFUL_LEN && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Derive the full search-term list for one identifier: the identifier
/// itself, its natural name when it differs, every meaningful word of the
/// natural name, and each word's synonyms. Duplicates and empty strings are
/// dropped; first occurrence fixes position.
pub fn search_terms(identifier: &str) -> Vec<String> {
    let mut terms = Vec::new();
    push_term(&mut terms, identifier);
    let natural = natural_name(identifier);
    if natural != identifier {
        push_term(&mut terms, &natural);
    }
    for word in meaningful_words(&natural) {
        push_term(&mut terms, &word);
        for synonym in synonyms_for(&word) {
            push_term(&mut terms, &synonym);
        }
    }
    terms
}

fn push_term(terms: &mut Vec<String>, term: &str) {
    let term = term.trim();
    if term.is_empty() || terms.iter().any(|existing| existing == term) {
        return;
    }
    terms.push(term.to_string());
}
