//! Word catalog.
//!
//! An immutable lookup table of [`Word`]s keyed by id. The standard catalog is
//! built once per process and shared by reference; tests and tools may build
//! their own with [`Catalog::from_words`].

use std::collections::HashMap;
use std::sync::LazyLock;

use tereo_foundation::{Card, CardColor, Error, Result, Word, WordType};

use crate::words::standard_words;

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_words(standard_words()));

/// A token produced by [`Catalog::tokenize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A surface form the catalog knows.
    Known(Card),
    /// A word with no catalog entry.
    Unknown(String),
}

/// Read-only word lookup table.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Words in insertion order
    words: Vec<Word>,
    /// Id -> index into `words`
    by_id: HashMap<String, usize>,
    /// Most whitespace-separated words in any surface form
    longest_surface: usize,
}

impl Catalog {
    /// The standard vocabulary, built on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a catalog from a word list.
    ///
    /// When two words share an id the first one wins.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut catalog = Self::default();
        for word in words {
            if catalog.by_id.contains_key(&word.id) {
                continue;
            }
            catalog.longest_surface = catalog
                .longest_surface
                .max(word.maori.split_whitespace().count());
            catalog.by_id.insert(word.id.clone(), catalog.words.len());
            catalog.words.push(word);
        }
        catalog
    }

    /// All words, in catalog order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up a word by id.
    #[must_use]
    pub fn word(&self, id: &str) -> Option<&Word> {
        self.by_id.get(id).map(|&i| &self.words[i])
    }

    /// Looks up a word by id and copies it into a card.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::WordNotFound`](tereo_foundation::ErrorKind::WordNotFound)
    /// if the id is absent.
    pub fn card(&self, id: &str) -> Result<Card> {
        self.word(id)
            .map(Card::from)
            .ok_or_else(|| Error::word_not_found(id))
    }

    /// Like [`card`](Self::card) but degrades to a placeholder card.
    #[must_use]
    pub fn card_or_placeholder(&self, id: &str) -> Card {
        self.word(id)
            .map_or_else(|| Card::placeholder(id), Card::from)
    }

    /// Words of a grammatical type.
    #[must_use]
    pub fn by_type(&self, word_type: WordType) -> Vec<&Word> {
        self.words.iter().filter(|w| w.word_type == word_type).collect()
    }

    /// Words introduced by a curriculum module.
    #[must_use]
    pub fn by_module(&self, module: u8) -> Vec<&Word> {
        self.words.iter().filter(|w| w.module == module).collect()
    }

    /// Words of a display colour.
    #[must_use]
    pub fn by_color(&self, color: CardColor) -> Vec<&Word> {
        self.words.iter().filter(|w| w.color == color).collect()
    }

    /// Finds a word by surface form, exact match first, then ignoring case.
    #[must_use]
    pub fn by_surface(&self, surface: &str) -> Option<&Word> {
        self.words
            .iter()
            .find(|w| w.maori == surface)
            .or_else(|| {
                let lower = surface.to_lowercase();
                self.words.iter().find(|w| w.maori.to_lowercase() == lower)
            })
    }

    /// Splits free text into cards.
    ///
    /// At each position the longest run of words naming a catalog surface
    /// wins, so `Kei te` and `Tāmaki Makaurau` each become one card. Trailing
    /// sentence punctuation is ignored.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let words: Vec<&str> = text
            .split_whitespace()
            .map(|w| w.trim_end_matches(['.', ',', '!', '?']))
            .filter(|w| !w.is_empty())
            .collect();

        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < words.len() {
            let max = self.longest_surface.min(words.len() - pos);
            let found = (1..=max).rev().find_map(|n| {
                let candidate = words[pos..pos + n].join(" ");
                self.by_surface(&candidate).map(|w| (n, w))
            });
            match found {
                Some((n, word)) => {
                    tokens.push(Token::Known(Card::from(word)));
                    pos += n;
                }
                None => {
                    tokens.push(Token::Unknown(words[pos].to_string()));
                    pos += 1;
                }
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tereo_foundation::ErrorKind;

    #[test]
    fn standard_is_shared() {
        let a = Catalog::standard();
        let b = Catalog::standard();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.word("n_whare").map(|w| w.english.as_str()), Some("house"));
        assert!(catalog.word("n_waka").is_none());
        assert!(matches!(
            catalog.card("n_waka").unwrap_err().kind,
            ErrorKind::WordNotFound(_)
        ));
        assert!(catalog.card_or_placeholder("n_waka").is_placeholder());
    }

    #[test]
    fn filters() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.by_type(WordType::Demonstrative).len(), 3);
        assert_eq!(catalog.by_type(WordType::TenseMarker).len(), 3);
        assert_eq!(catalog.by_color(CardColor::Pink).len(), 2);
        assert!(catalog.by_module(1).iter().all(|w| w.module == 1));
    }

    #[test]
    fn first_duplicate_wins() {
        let catalog = Catalog::from_words([
            Word::new("n_a", "a", "first", WordType::Noun, CardColor::Blue, 1),
            Word::new("n_a", "b", "second", WordType::Noun, CardColor::Blue, 1),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.word("n_a").map(|w| w.maori.as_str()), Some("a"));
    }

    #[test]
    fn tokenize_prefers_longest_surface() {
        let catalog = Catalog::standard();
        let tokens = catalog.tokenize("Kei te noho au i Tāmaki Makaurau.");
        let ids: Vec<_> = tokens
            .iter()
            .map(|t| match t {
                Token::Known(c) => c.id.as_str(),
                Token::Unknown(w) => w.as_str(),
            })
            .collect();
        assert_eq!(ids, ["tm_keite", "v_noho", "pr_au", "pl_i", "n_tamaki"]);
    }

    #[test]
    fn tokenize_is_case_sensitive_first() {
        let catalog = Catalog::standard();
        let first = |text: &str| match catalog.tokenize(text).into_iter().next() {
            Some(Token::Known(c)) => c.id,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(first("I"), "tm_i");
        assert_eq!(first("i"), "pl_i");
        assert_eq!(first("ko"), "p_ko");
    }

    #[test]
    fn tokenize_reports_unknown_words() {
        let tokens = Catalog::standard().tokenize("Ko te waka");
        assert_eq!(tokens.last(), Some(&Token::Unknown("waka".to_string())));
    }
}
