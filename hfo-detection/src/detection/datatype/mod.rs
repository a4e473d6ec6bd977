//! Provides the data types shared by the transforms, the threshold calculator and the detectors.
mod event;
mod signal;

pub use event::{Event, EventList, EventRecord, FIELDS};
pub use signal::Signal;

/// The floating point type used for samples and derived feature values.
pub type Real = f64;
