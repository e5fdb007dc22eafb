use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for invalid simulation configurations, checked once before any
/// integration work begins
pub enum ConfigurationError {
    /// Timestep must be greater than zero
    NonPositiveTimestep,
    /// Simulation window must end after it starts
    EmptyTimeWindow,
    /// Stimulus pulse must not end before it starts
    PulseEndsBeforeStart,
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            ConfigurationError::NonPositiveTimestep => "Timestep must be greater than zero",
            ConfigurationError::EmptyTimeWindow => "Simulation window must end after it starts",
            ConfigurationError::PulseEndsBeforeStart => "Stimulus pulse must not end before it starts",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}
