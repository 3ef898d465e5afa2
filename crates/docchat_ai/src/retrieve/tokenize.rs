use std::collections::HashSet;

/// Distinct lower-cased words, split on Unicode `White_Space`.
pub fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Number of distinct query words that also occur in `text`.
pub fn overlap(query_words: &HashSet<String>, text: &str) -> usize {
    if query_words.is_empty() {
        return 0;
    }
    let lowered = text.to_lowercase();
    let text_words: HashSet<&str> = lowered.split_whitespace().collect();
    query_words
        .iter()
        .filter(|w| text_words.contains(w.as_str()))
        .count()
}
