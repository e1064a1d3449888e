//! This is the core module. It exports the card model
//! shared by everything else: cards, hands, the deck and
//! ways to enumerate them.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over three card hands
/// and every order they can be played in.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the 40 card Spanish deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

mod error;
pub use self::error::RSTrucoError;
