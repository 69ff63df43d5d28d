//! Name similarity scoring
//!
//! Classic Levenshtein edit distance, normalized into a `[0.0, 1.0]` score
//! over trimmed, lower-cased names. Distances are counted on `char`
//! boundaries, so accented and multi-byte names score sanely.

/// Edit distance between two strings (insertions, deletions, substitutions)
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two-row rolling DP over the edit matrix
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, &a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &b_char) in b_chars.iter().enumerate() {
            let substitution_cost = if a_char == b_char { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + substitution_cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Similarity of two item names in `[0.0, 1.0]`.
///
/// Case and surrounding whitespace are ignored. Two blank names are the same
/// name (1.0).
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(&a, &b);
    1.0 - distance as f64 / max_len as f64
}
