//! Provides iterators to split a signal into windows and to convert feature values into events.
pub mod event;
pub mod segment;

pub use event::{EventFilter, EventIter};
pub use segment::{SegmentIterable, Segments};
