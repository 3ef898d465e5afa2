use crate::config::ChunkingConfig;
use crate::domain::Chunk;

/// Split normalized text into overlapping character windows.
///
/// Windows start at `0, stride, 2*stride, ...` while the start lies inside the
/// text, and each covers `window_chars` characters clipped to the end. Clipped
/// windows shorter than `min_chunk_chars` are dropped.
pub fn chunk_text(source: &str, text: &str, policy: &ChunkingConfig) -> Vec<Chunk> {
    if text.is_empty() || policy.window_chars == 0 {
        return Vec::new();
    }

    // Byte offset of every char boundary, plus the end of the string.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let total_chars = boundaries.len() - 1;
    let stride = policy.stride();

    let mut out = Vec::new();
    let mut start = 0usize;
    while start < total_chars {
        let end = start.saturating_add(policy.window_chars).min(total_chars);
        if end - start >= policy.min_chunk_chars {
            out.push(Chunk {
                source: source.to_string(),
                text: text[boundaries[start]..boundaries[end]].to_string(),
                start_char: start,
                end_char: end,
            });
        }
        start = start.saturating_add(stride);
    }
    out
}
