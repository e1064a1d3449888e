//! Truco specific evaluation: who wins when two hands are played,
//! how strong a hand is against the rest of the deck, and the table
//! of every hand's strength that the chart reads.

mod strength;
pub use strength::{hand_strength, truco_beats};

mod stats;
pub use stats::{HandStat, generate_hand_stats, write_hand_stats, write_hand_stats_to};
