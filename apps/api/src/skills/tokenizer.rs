//! Tokenizer shared by vocabulary patterns and resume text.
//!
//! A token is either a run of word characters or a single punctuation character.
//! Word characters are alphanumerics, `+` and `#` (so `c++` and `c#` stay whole),
//! and `.` when the next character is alphanumeric (`node.js`, `.net`, but not a
//! sentence-ending period). Everything is lower-cased; whitespace only separates.

/// Splits `text` into lower-cased tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let next_is_alnum = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
        if is_word_char(c) || (c == '.' && next_is_alnum) {
            current.push(c);
            continue;
        }
        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if !c.is_whitespace() {
            tokens.push(c.to_string());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}
