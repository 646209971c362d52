//! Cards in play and sentences under construction.

use crate::error::{Error, ErrorKind, Result};
use crate::word::{CardColor, Word, WordType};

/// Per-instance data a card may carry beyond its word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardExtra {
    /// Dealt as a decoy to raise difficulty.
    pub variation: bool,
    /// Stands in for an id the catalog could not resolve.
    pub placeholder: bool,
}

/// A word placed into a hand or a sentence slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Catalog id of the underlying word.
    pub id: String,
    /// Surface form.
    pub maori: String,
    /// English gloss.
    pub english: String,
    /// Grammatical category.
    pub word_type: WordType,
    /// Display category.
    pub color: CardColor,
    /// Per-instance extension.
    pub extra: Option<CardExtra>,
}

impl Card {
    /// Creates a card directly.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        maori: impl Into<String>,
        english: impl Into<String>,
        word_type: WordType,
        color: CardColor,
    ) -> Self {
        Self {
            id: id.into(),
            maori: maori.into(),
            english: english.into(),
            word_type,
            color,
            extra: None,
        }
    }

    /// The card shown for an id the catalog does not know.
    #[must_use]
    pub fn placeholder(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            maori: format!("?{id}"),
            id,
            english: "unknown word".to_string(),
            word_type: WordType::Noun,
            color: CardColor::Gray,
            extra: Some(CardExtra {
                variation: false,
                placeholder: true,
            }),
        }
    }

    /// Marks this card as a decoy.
    #[must_use]
    pub fn into_variation(mut self) -> Self {
        self.extra.get_or_insert_with(CardExtra::default).variation = true;
        self
    }

    /// Whether this card was dealt as a decoy.
    #[must_use]
    pub fn is_variation(&self) -> bool {
        self.extra.as_ref().is_some_and(|e| e.variation)
    }

    /// Whether this card stands in for an unknown id.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.extra.as_ref().is_some_and(|e| e.placeholder)
    }

    /// Whether the card has the given type.
    #[must_use]
    pub fn is(&self, word_type: WordType) -> bool {
        self.word_type == word_type
    }

    /// Whether the card's surface is one of `forms`.
    #[must_use]
    pub fn reads_as(&self, forms: &[&str]) -> bool {
        forms.contains(&self.maori.as_str())
    }
}

impl From<&Word> for Card {
    fn from(word: &Word) -> Self {
        Self::new(
            word.id.clone(),
            word.maori.clone(),
            word.english.clone(),
            word.word_type,
            word.color,
        )
    }
}

/// Joins card surfaces with single spaces.
#[must_use]
pub fn surface(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.maori.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A sentence under construction: fixed slots, some possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceSlots {
    slots: Vec<Option<Card>>,
}

impl SentenceSlots {
    /// Creates `len` empty slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The card in a slot, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Places a card into an empty slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the slot is occupied.
    pub fn place(&mut self, index: usize, card: Card) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| Error::slot_out_of_range(index, len))?;
        if slot.is_some() {
            return Err(Error::new(ErrorKind::SlotOccupied(index)));
        }
        *slot = Some(card);
        Ok(())
    }

    /// Removes the card from a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the slot is empty.
    pub fn take(&mut self, index: usize) -> Result<Card> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or_else(|| Error::slot_out_of_range(index, len))?
            .take()
            .ok_or_else(|| Error::new(ErrorKind::SlotEmpty(index)))
    }

    /// Empties every slot, returning the cards that were placed.
    pub fn clear(&mut self) -> Vec<Card> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    /// Whether every slot holds a card.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The full sentence, if every slot is filled.
    #[must_use]
    pub fn complete(&self) -> Option<Vec<Card>> {
        self.slots.iter().cloned().collect()
    }

    /// The leading run of filled slots, for live hint polling.
    #[must_use]
    pub fn filled(&self) -> Vec<Card> {
        self.slots.iter().map_while(Clone::clone).collect()
    }

    /// Iterates over slots.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Card>> {
        self.slots.iter().map(Option::as_ref)
    }
}
