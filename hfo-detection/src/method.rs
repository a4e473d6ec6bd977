//! Gives detection algorithms a uniform interface: a name, a version, the schema of the records they
//! output, and a callable with its configuration already bound.
use crate::{
    detection::{EventList, EventRecord, FIELDS, Real, Signal, detect_hfo_ll},
    error::DetectionError,
    parameters::{LineLengthParameters, Mode},
};

/// Implement for detection algorithms with bound parameters.
pub trait Method {
    /// Identifier of the algorithm.
    fn name(&self) -> &'static str;

    fn version(&self) -> &'static str;

    /// Names and element types of the fields of the output records.
    fn fields(&self) -> &'static [(&'static str, &'static str)] {
        &FIELDS
    }

    /// Runs the algorithm on the given samples.
    fn run(&self, samples: &[Real]) -> Result<EventList, DetectionError>;

    /// Runs the algorithm and converts the events into output records.
    fn run_records(&self, samples: &[Real]) -> Result<Vec<EventRecord>, DetectionError> {
        self.run(samples)?
            .into_iter()
            .map(EventRecord::try_from)
            .collect()
    }
}

/// The line length detector bound to a sampling frequency and a set of parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLengthDetector {
    fs: Real,
    parameters: LineLengthParameters,
}

impl LineLengthDetector {
    pub const ALGORITHM: &'static str = "LINELENGTH_DETECTOR";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(fs: Real, parameters: LineLengthParameters) -> Self {
        Self { fs, parameters }
    }

    pub fn fs(&self) -> Real {
        self.fs
    }

    pub fn parameters(&self) -> &LineLengthParameters {
        &self.parameters
    }
}

impl Method for LineLengthDetector {
    fn name(&self) -> &'static str {
        Self::ALGORITHM
    }

    fn version(&self) -> &'static str {
        Self::VERSION
    }

    fn run(&self, samples: &[Real]) -> Result<EventList, DetectionError> {
        let signal = Signal::new(samples, self.fs)?;
        detect_hfo_ll(&signal, &self.parameters)
    }
}

/// Binds the detector selected by the mode to the sampling frequency.
pub fn bind_method(fs: Real, mode: &Mode) -> Box<dyn Method + Send + Sync> {
    match mode {
        Mode::LineLength(parameters) => Box::new(LineLengthDetector::new(fs, parameters.clone())),
    }
}
