//! Quote data model and the embedded fallback list.
//!
//! A `Quote` is the payload shown to the user: the quote text itself and the
//! name of its author. Both fields are guaranteed non-empty when built
//! through [`Quote::new`]. This module also embeds the fallback list that
//! masks quote-source failures, so a pool refilled from it is never empty.

use crate::error::QuoteError;
use crate::result::Result;

/// Inspirational quote with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quote text.
    pub content: String,
    /// Name of the person the quote is attributed to.
    pub author: String,
}

impl Quote {
    /// Build a quote, rejecting empty or whitespace-only fields.
    ///
    /// - content: the quote text.
    /// - author: the attribution.
    /// - Returns: the quote, or `QuoteError::InvalidQuote` naming the bad field.
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Result<Self> {
        let content = content.into();
        let author = author.into();
        if content.trim().is_empty() {
            return Err(QuoteError::InvalidQuote("empty content".to_string()));
        }
        if author.trim().is_empty() {
            return Err(QuoteError::InvalidQuote("empty author".to_string()));
        }
        Ok(Quote { content, author })
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\u{201c}{}\u{201d} \u{2014} {}", self.content, self.author)
    }
}

/// The embedded quotes used whenever the remote source is unavailable.
const FALLBACK: [(&str, &str); 10] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "Your time is limited, don't waste it living someone else's life.",
        "Steve Jobs",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    (
        "Everything you've ever wanted is on the other side of fear.",
        "George Addair",
    ),
    (
        "Believe in yourself. You are braver than you think, more talented than you know, and capable of more than you imagine.",
        "Roy T. Bennett",
    ),
    (
        "I learned that courage was not the absence of fear, but the triumph over it.",
        "Nelson Mandela",
    ),
    (
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
    ),
];

/// Build the fallback list as owned quotes.
///
/// The backing array is non-empty, so a pool refilled from this list always
/// has something to draw.
pub fn fallback_quotes() -> Vec<Quote> {
    FALLBACK
        .iter()
        .map(|(content, author)| Quote {
            content: (*content).to_string(),
            author: (*author).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_fields() {
        let quote = Quote::new("stay hungry", "Steve Jobs").unwrap();
        assert_eq!(quote.content, "stay hungry");
        assert_eq!(quote.author, "Steve Jobs");
    }

    #[test]
    fn new_rejects_empty_content() {
        assert!(matches!(
            Quote::new("   ", "someone"),
            Err(QuoteError::InvalidQuote(_))
        ));
    }

    #[test]
    fn new_rejects_empty_author() {
        assert!(matches!(
            Quote::new("words", ""),
            Err(QuoteError::InvalidQuote(_))
        ));
    }

    #[test]
    fn display_renders_text_and_attribution() {
        let quote = Quote::new("stay hungry", "Steve Jobs").unwrap();
        assert_eq!(
            quote.to_string(),
            "\u{201c}stay hungry\u{201d} \u{2014} Steve Jobs"
        );
    }

    #[test]
    fn fallback_list_has_ten_valid_quotes() {
        let quotes = fallback_quotes();
        assert_eq!(quotes.len(), 10);
        for quote in quotes {
            assert!(!quote.content.trim().is_empty());
            assert!(!quote.author.trim().is_empty());
        }
    }
}
