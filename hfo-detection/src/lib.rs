//! # HFO Detection
//!
//! Detects high frequency oscillations in sampled electrophysiological signals.
//! * Segments the signal into overlapping windows.
//! * Scores each window with a feature transform, line length by default.
//! * Flags windows whose score reaches an adaptive threshold of the mean plus a multiple of the standard deviation.
//! * Merges runs of flagged windows into events, reported as sample index intervals.
//!
//! The transforms used to score windows, and a Stockwell time-frequency transform, are exposed in [detection::transforms].
pub mod detection;
pub mod error;
pub mod method;
pub mod parameters;
pub mod processing;
