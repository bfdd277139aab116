//! Character-aware slicing helpers. Résumé text is arbitrary UTF-8, so every
//! window is measured in chars and cut on char boundaries.

/// Returns the first `n` characters of `s`.
pub fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Byte offset `n` characters before `from` (clamped at 0).
pub fn offset_back(s: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    s[..from]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Byte offset `n` characters after `from` (clamped at the end of `s`).
pub fn offset_forward(s: &str, from: usize, n: usize) -> usize {
    s[from..]
        .char_indices()
        .nth(n)
        .map(|(idx, _)| from + idx)
        .unwrap_or(s.len())
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
