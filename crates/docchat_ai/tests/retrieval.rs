use docchat_ai::retrieve::{rank, rank_chunks, score_chunks};
use docchat_core::domain::Chunk;
use docchat_core::session::SessionStore;
use pretty_assertions::assert_eq;

fn chunk(source: &str, text: &str) -> Chunk {
    Chunk {
        source: source.to_string(),
        text: text.to_string(),
        start_char: 0,
        end_char: text.chars().count(),
    }
}

fn texts(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(|c| c.text.as_str()).collect()
}

#[test]
fn higher_overlap_ranks_first() {
    let chunks = vec![
        chunk("a", "the cat sat"),
        chunk("a", "the cat sat on the mat"),
        chunk("a", "dogs bark loudly"),
    ];
    let got = rank_chunks(&chunks, "cat on mat", 5);
    assert_eq!(texts(&got), vec!["the cat sat on the mat", "the cat sat"]);
}

#[test]
fn ties_keep_insertion_order() {
    let store = SessionStore::new();
    store.add("s", vec![chunk("first.txt", "alpha beta"), chunk("x", "unrelated")]);
    store.add("s", vec![chunk("second.txt", "beta alpha")]);

    let got = rank(&store, "s", "alpha", 5);
    let sources: Vec<&str> = got.iter().map(|c| c.source.as_str()).collect();
    assert_eq!(sources, vec!["first.txt", "second.txt"]);
}

#[test]
fn scoring_uses_distinct_lowercase_words() {
    let chunks = vec![chunk("a", "Rust rust RUST is fast")];
    let scored = score_chunks(&chunks, "rust RUST Rust");
    assert_eq!(scored[0].score, 1);

    let scored = score_chunks(&chunks, "Fast RUST");
    assert_eq!(scored[0].score, 2);
}

#[test]
fn punctuation_is_part_of_the_word() {
    let chunks = vec![chunk("a", "hello, world")];
    assert!(rank_chunks(&chunks, "hello world", 5).len() == 1);
    assert_eq!(score_chunks(&chunks, "hello world")[0].score, 1);
}

#[test]
fn zero_overlap_yields_empty_result() {
    let store = SessionStore::new();
    store.add("s", vec![chunk("a", "apples and pears")]);
    assert!(rank(&store, "s", "quantum chromodynamics", 5).is_empty());
    assert!(rank(&store, "s", "", 5).is_empty());
    assert!(rank(&store, "unknown", "apples", 5).is_empty());
}

#[test]
fn result_is_capped_at_top_k() {
    let chunks: Vec<Chunk> = (0..10).map(|i| chunk("a", &format!("common word {i}"))).collect();
    let got = rank_chunks(&chunks, "common", 5);
    assert_eq!(
        texts(&got),
        vec!["common word 0", "common word 1", "common word 2", "common word 3", "common word 4"]
    );
    assert_eq!(rank_chunks(&chunks, "common", 3).len(), 3);
}

#[test]
fn ranking_is_repeatable() {
    let store = SessionStore::new();
    let chunks: Vec<Chunk> = (0..30)
        .map(|i| chunk(&format!("doc{}", i % 3), &format!("shared term{} term{}", i % 4, i % 7)))
        .collect();
    store.add("s", chunks);

    let first = rank(&store, "s", "shared term1 term3", 5);
    let second = rank(&store, "s", "shared term1 term3", 5);
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}
