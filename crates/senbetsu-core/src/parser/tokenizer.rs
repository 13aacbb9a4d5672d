//! # Word Tokenizer
//!
//! Splits a chunk of a release name into words. Words are separated by
//! whitespace or underscores; everything else (dots, dashes, brackets)
//! stays inside the word.

/// A word extracted from a chunk with positional information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word, borrowed from the input with its original case.
    pub text: &'a str,
    /// Start byte offset in the input.
    pub start: usize,
    /// End byte offset in the input.
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '_'
}

/// Tokenizer for release-name chunks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a chunk into words.
    ///
    /// # Examples
    /// ```
    /// use senbetsu_core::parser::tokenizer::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().tokenize("Dragon_Ball_Super_-_003v3");
    /// let words: Vec<_> = tokens.iter().map(|t| t.text).collect();
    /// assert_eq!(words, ["Dragon", "Ball", "Super", "-", "003v3"]);
    /// ```
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut current_start = 0;

        for (idx, c) in input.char_indices() {
            if is_delimiter(c) {
                if idx > current_start {
                    tokens.push(Token {
                        text: &input[current_start..idx],
                        start: current_start,
                        end: idx,
                        index: tokens.len(),
                    });
                }
                current_start = idx + c.len_utf8();
            }
        }

        if current_start < input.len() {
            tokens.push(Token {
                text: &input[current_start..],
                start: current_start,
                end: input.len(),
                index: tokens.len(),
            });
        }

        tokens
    }

    /// Iterate over the words of `input` without positional information.
    pub fn words<'a>(&self, input: &'a str) -> impl Iterator<Item = &'a str> + use<'a> {
        input.split(is_delimiter).filter(|w| !w.is_empty())
    }
}
