//! Segmentation of English text into words, punctuation runs and whitespace runs.

use crate::unicode::is_word_char;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `value` is the lowercase lookup key, `original` the text as written.
    Word { value: String, original: String },
    Punctuation(String),
    Whitespace(String),
}

impl Token {
    /// The token's text as it appeared in the input.
    pub fn original(&self) -> &str {
        match self {
            Token::Word { original, .. } => original,
            Token::Punctuation(s) | Token::Whitespace(s) => s,
        }
    }
}

/// Split `text` into tokens that cover it without gaps or overlaps.
///
/// A word is a run of alphanumeric characters; an apostrophe stays inside the
/// word only when another alphanumeric character follows it, so "don't" is
/// one word while the quote in "dogs'" is punctuation.
pub fn tokenize_english_text(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let token = if c.is_whitespace() {
            let (run, tail) = rest.split_at(run_len(rest, char::is_whitespace));
            rest = tail;
            Token::Whitespace(run.to_string())
        } else if is_word_char(c) {
            let (run, tail) = rest.split_at(word_len(rest));
            rest = tail;
            Token::Word {
                value: run.to_lowercase(),
                original: run.to_string(),
            }
        } else {
            let (run, tail) = rest.split_at(run_len(rest, |c| {
                !c.is_whitespace() && !is_word_char(c)
            }));
            rest = tail;
            Token::Punctuation(run.to_string())
        };
        tokens.push(token);
    }

    tokens
}

/// Join tokens back together using their original casing.
pub fn reconstruct_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::original).collect()
}

fn run_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| i)
}

fn word_len(text: &str) -> usize {
    let mut chars = text.char_indices().peekable();
    let mut end = 0;
    while let Some((i, c)) = chars.next() {
        if is_word_char(c) {
            end = i + c.len_utf8();
        } else if c == '\'' && chars.peek().is_some_and(|&(_, next)| is_word_char(next)) {
            end = i + 1;
        } else {
            break;
        }
    }
    end
}
