//! UTF-8-safe slicing helpers shared by the truncation pipeline.
//!
//! All offsets handed around the pipeline are counted in Unicode scalar
//! values, never bytes, so a cut can never land inside a multi-byte sequence.

/// Byte index of the `n`-th character boundary in `s`.
///
/// Returns `s.len()` when the string holds fewer than `n` characters. The
/// result is always a valid slice point, even with multi-byte characters
/// like box-drawing symbols or emoji.
///
/// # Examples
/// ```
/// # use html_truncate::text::char_boundary;
/// assert_eq!(&"Hello, World!"[..char_boundary("Hello, World!", 5)], "Hello");
/// assert_eq!(&"🎉🎊🎈"[..char_boundary("🎉🎊🎈", 2)], "🎉🎊");
/// assert_eq!(char_boundary("Hi", 100), 2);
/// ```
#[inline]
pub fn char_boundary(s: &str, n: usize) -> usize {
    match s.char_indices().nth(n) {
        None => s.len(),
        Some((byte_idx, _)) => byte_idx,
    }
}

/// Character offset immediately after the `n`-th word in `s`.
///
/// A word is a maximal run of non-whitespace characters; any run of
/// whitespace is a single separator. Returns the total character count when
/// `s` holds fewer than `n` words, and `0` when `n` is zero.
///
/// # Examples
/// ```
/// # use html_truncate::text::word_end_offset;
/// assert_eq!(word_end_offset("Hello world foo bar", 2), 11);
/// assert_eq!(word_end_offset("  spaced   out  ", 1), 8);
/// assert_eq!(word_end_offset("two words", 5), 9);
/// ```
pub fn word_end_offset(s: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut words = 0usize;
    let mut in_word = false;
    let mut total = 0usize;
    for (offset, ch) in s.chars().enumerate() {
        total = offset + 1;
        if ch.is_whitespace() {
            if in_word && words == n {
                return offset;
            }
            in_word = false;
        } else if !in_word {
            in_word = true;
            words += 1;
        }
    }
    total
}
