//! Fixed domain-term synonym table with substring-based lookup.

use std::collections::BTreeSet;

/// Canonical domain terms and their alternates. Lookup is loose on purpose:
/// a key matches when it appears inside the queried word or the word appears
/// inside the key, so `userid` picks up both the `user` and `id` entries.
const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("id", &["identifier", "key", "number"]),
    ("name", &["title", "label", "description"]),
    ("date", &["time", "timestamp", "created", "modified"]),
    ("user", &["person", "customer", "client", "employee"]),
    ("order", &["purchase", "transaction", "sale"]),
    ("product", &["item", "goods", "service"]),
    ("address", &["location", "place"]),
    ("phone", &["telephone", "mobile", "contact"]),
    ("email", &["mail", "contact"]),
    ("price", &["cost", "amount", "value"]),
    ("quantity", &["amount", "count", "number"]),
    ("status", &["state", "condition"]),
    ("type", &["category", "kind", "classification"]),
    ("code", &["identifier", "reference"]),
    ("description", &["details", "notes", "comments"]),
    ("created", &["added", "inserted", "made"]),
    ("updated", &["modified", "changed", "edited"]),
    ("deleted", &["removed", "archived"]),
    ("active", &["enabled", "current", "valid"]),
    ("inactive", &["disabled", "archived", "old"]),
];

/// Collect the synonym set for a word: the word itself (original casing)
/// plus the alternates of every table key matching the lowercased word in
/// either substring direction. Empty or whitespace-only input yields an
/// empty set rather than matching every key.
pub fn synonyms_for(word: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    if word.trim().is_empty() {
        return found;
    }
    found.insert(word.to_string());
    let lowered = word.to_lowercase();
    for (key, alternates) in SYNONYM_TABLE {
        if lowered.contains(key) || key.contains(&lowered) {
            found.extend(alternates.iter().map(|alt| (*alt).to_string()));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_sorted_vec(word: &str) -> Vec<String> {
        synonyms_for(word).into_iter().collect()
    }

    #[test]
    fn exact_key_unions_its_alternates() {
        assert_eq!(as_sorted_vec("order"), ["order", "purchase", "sale", "transaction"]);
    }

    #[test]
    fn compound_word_matches_every_embedded_key() {
        let found = synonyms_for("userid");
        // `user` and `id` both match as substrings.
        assert!(found.contains("person"));
        assert!(found.contains("identifier"));
        assert!(found.contains("userid"));
    }

    #[test]
    fn original_casing_is_preserved() {
        let found = synonyms_for("Email");
        assert!(found.contains("Email"));
        assert!(found.contains("mail"));
        assert!(!found.contains("email"));
    }

    #[test]
    fn unknown_word_returns_only_itself() {
        assert_eq!(as_sorted_vec("customers"), ["customers"]);
    }

    #[test]
    fn empty_word_yields_empty_set() {
        assert!(synonyms_for("").is_empty());
        assert!(synonyms_for("   ").is_empty());
    }
}
