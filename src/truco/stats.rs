use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument};

use super::hand_strength;
use crate::core::{Deck, Hand, MAX_ENVIDO, RSTrucoError};
use crate::table::TableError;

/// Strength numbers for a single three card hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandStat {
    /// Cards sorted strongest truco card first.
    pub hand: Hand,
    /// Brute force truco strength in `[0, 1]`.
    pub truco_score: f64,
    pub envido: u8,
    /// Mean of the normalised envido and the truco score.
    pub combined: f64,
}

impl HandStat {
    pub fn new(mut hand: Hand, deck: &Deck) -> Result<Self, RSTrucoError> {
        hand.sort_for_truco();
        let truco_score = hand_strength(&hand, deck)?;
        let envido = hand.envido();
        let combined = (f64::from(envido) / f64::from(MAX_ENVIDO) + truco_score) / 2.0;
        Ok(Self {
            hand,
            truco_score,
            envido,
            combined,
        })
    }
}

/// The on-disk shape of a [`HandStat`].
#[derive(Debug, Serialize)]
struct HandStatRecord {
    hand: String,
    truco_score: String,
    envido: u8,
    combined: String,
}

impl From<&HandStat> for HandStatRecord {
    fn from(stat: &HandStat) -> Self {
        Self {
            hand: stat.hand.to_string(),
            truco_score: format!("{:.6}", stat.truco_score),
            envido: stat.envido,
            combined: format!("{:.6}", stat.combined),
        }
    }
}

/// Evaluate every three card hand the deck can deal.
///
/// Hands are evaluated in parallel. The result is sorted by truco
/// score, strongest first; equal scores keep deal order.
#[instrument(level = "info", skip(deck), fields(cards = deck.len()))]
pub fn generate_hand_stats(deck: &Deck) -> Result<Vec<HandStat>, RSTrucoError> {
    let start = Instant::now();
    let hands: Vec<Hand> = deck.hands(3).map(Hand::from).collect();
    info!(hands = hands.len(), "evaluating hands");

    let mut stats = hands
        .into_par_iter()
        .map(|hand| HandStat::new(hand, deck))
        .collect::<Result<Vec<_>, _>>()?;
    stats.sort_by(|a, b| b.truco_score.total_cmp(&a.truco_score));

    info!(elapsed = ?start.elapsed(), "evaluated hands");
    Ok(stats)
}

/// Write stats as a table with the header
/// `hand,truco_score,envido,combined`.
pub fn write_hand_stats_to<W: Write>(writer: W, stats: &[HandStat]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_writer(writer);
    for stat in stats {
        writer.serialize(HandStatRecord::from(stat))?;
    }
    // No rows means serialize never wrote the header.
    if stats.is_empty() {
        writer.write_record(["hand", "truco_score", "envido", "combined"])?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write stats to it.
#[instrument(level = "info", skip(path, stats), fields(path = %path.display(), rows = stats.len()))]
pub fn write_hand_stats(path: &Path, stats: &[HandStat]) -> Result<(), TableError> {
    let file = File::create(path)?;
    write_hand_stats_to(file, stats)?;
    info!("wrote hand stats");
    Ok(())
}
