use crate::error::{CaseError, InvalidInput, Result};

/// Whitespace, underscore and hyphen separate words without implying case.
pub fn is_delimiter(b: u8) -> bool {
    b == b'_' || b == b'-' || b.is_ascii_whitespace()
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch.is_ascii_whitespace() || ch == '_' || ch == '-'
}

/// Reject anything outside ASCII letters, digits, whitespace, `_` and `-`.
pub fn validate(input: &str) -> Result<()> {
    match input.char_indices().find(|&(_, ch)| !is_allowed(ch)) {
        Some((index, ch)) => Err(InvalidInput::DisallowedChar { ch, index }.into()),
        None => Ok(()),
    }
}

/// Validate `input` and split it into words.
///
/// Words are borrowed slices of `input` with their original casing, so
/// `"HTTPServer"` yields `["HTTP", "Server"]`. Fails with
/// [`CaseError::EmptyResult`] when nothing but delimiters remains.
pub fn tokenize(input: &str) -> Result<Vec<&str>> {
    validate(input)?;
    let words = split_words(input);
    if words.is_empty() {
        return Err(CaseError::EmptyResult);
    }
    tracing::debug!("tokenized {:?} into {} word(s)", input, words.len());
    Ok(words)
}

/// Split on delimiter runs and case boundaries. Does not validate.
pub(crate) fn split_words(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut words = Vec::new();
    let mut start = 0;

    for i in 0..bytes.len() {
        if is_delimiter(bytes[i]) {
            push_word(&mut words, &input[start..i]);
            start = i + 1;
        } else if i > start && is_case_boundary(bytes, i) {
            push_word(&mut words, &input[start..i]);
            start = i;
        }
    }
    push_word(&mut words, &input[start..]);
    words
}

/// True when a new word starts at `bytes[i]`.
///
/// `aB` and `1B` split before `B`; inside an uppercase run the split goes
/// before the last capital when a lowercase letter follows it (`HTTPServer`).
fn is_case_boundary(bytes: &[u8], i: usize) -> bool {
    if i == 0 || !bytes[i].is_ascii_uppercase() {
        return false;
    }
    let prev = bytes[i - 1];
    if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
        return true;
    }
    prev.is_ascii_uppercase() && bytes.get(i + 1).map_or(false, |b| b.is_ascii_lowercase())
}

fn push_word<'a>(words: &mut Vec<&'a str>, word: &'a str) {
    if !word.is_empty() {
        words.push(word);
    }
}
