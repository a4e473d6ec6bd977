//! Signal transforms, windowing, thresholding and the detectors built on them.
pub mod datatype;
pub mod detectors;
pub mod iterators;
pub mod line_length_detector;
pub mod threshold;
pub mod transforms;
pub mod window;

pub use datatype::{Event, EventList, EventRecord, FIELDS, Real, Signal};
pub use detectors::{Detector, ThresholdCrossingDetector};
pub use iterators::{EventFilter, SegmentIterable};
pub use line_length_detector::detect_hfo_ll;
pub use threshold::{Threshold, th_std};
pub use window::WindowSchedule;
