use crate::core::card::{Card, Suit, Value};
use std::slice::Iter;
use std::vec::IntoIter;

/// The 40 card Spanish deck.
///
/// Cards are kept in a stable order (value, then suit) so that
/// anything enumerated from a deck comes out the same every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    /// Create the full 40 card deck
    ///
    /// ```
    /// use rs_truco::core::Deck;
    ///
    /// assert_eq!(40, Deck::default().len());
    /// ```
    fn default() -> Self {
        let mut cards = Vec::with_capacity(40);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card { value: v, suit: s });
            }
        }
        Self { cards }
    }
}

impl Deck {
    /// A deck holding only the given cards. Duplicates are dropped.
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut deck = Self { cards: Vec::new() };
        for c in cards {
            if !deck.contains(&c) {
                deck.cards.push(c);
            }
        }
        deck
    }
    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }
    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|x| x == c) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }
    /// Every card of this deck that is not in `excluded`.
    pub fn excluding<'a>(&self, excluded: impl IntoIterator<Item = &'a Card>) -> Deck {
        let mut d = self.clone();
        for c in excluded {
            d.remove(c);
        }
        d
    }
    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;

    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}
