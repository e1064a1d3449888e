//! rs_truco is a library for truco hand tables.
//!
//! It models the forty card Spanish deck, scores every three card hand
//! for truco and envido, writes those scores to a table and draws a
//! table back as a line chart.

/// Cards, hands and decks. Nothing in core knows about scoring.
pub mod core;
/// Truco and envido scoring over the Spanish deck.
pub mod truco;
/// Reading hand tables and projecting them onto chart series.
pub mod table;
/// Line charts of projected tables.
pub mod chart;
/// Gluing the table and the chart together.
pub mod pipeline;

pub use pipeline::{ChartConfig, DEFAULT_INPUT_PATH, PipelineError, run};
