//! Error and warning types surfaced by a simulation run.

use thiserror::Error;

/// Fatal configuration errors. A simulation that returns one of these never
/// allocates a trajectory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("timestep {value} is below the minimum of 5e-5; smaller steps accumulate rounding drift that the termination flush cannot absorb")]
    InvalidTimestep { value: f64 },

    #[error("outputTimes must be strictly ascending")]
    NonAscendingOutputTimes,

    #[error("endTime ({end}) must be greater than the first input sample time ({start})")]
    EndTimeNotAfterStart { start: f64, end: f64 },

    #[error("input signal must contain at least one (time, Ca) sample")]
    EmptyInputSignal,

    #[error("simulation cancelled by caller")]
    Cancelled,
}

/// Non-fatal diagnostics raised while merging user overrides into a model's
/// defaults. The run proceeds using the default value for the offending key.
#[derive(Debug, Clone, PartialEq)]
pub enum SimWarning {
    UnknownVolumeKey(String),
    UnknownInitialConcentration(String),
    UnknownParameter(String),
}

impl std::fmt::Display for SimWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimWarning::UnknownVolumeKey(k) => {
                write!(f, "unknown volume key '{k}', default value kept")
            }
            SimWarning::UnknownInitialConcentration(k) => {
                write!(f, "unknown initial-concentration key '{k}', default value kept")
            }
            SimWarning::UnknownParameter(k) => {
                write!(f, "unknown parameter key '{k}', default value kept")
            }
        }
    }
}
