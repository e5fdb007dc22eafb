//! Construction of the externally applied stimulus current waveform from a
//! list of rectangular pulses, along with optional gaussian parameters for
//! perturbing the injected current.

use ndarray::{Array1, Zip};
use crate::distribution::limited_distr;
use crate::error::ConfigurationError;


/// A rectangular current injection over a time interval
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    /// Time the injection starts (ms)
    pub start: f32,
    /// Time the injection stops (ms)
    pub end: f32,
    /// Injected current while active (uA/cm^2)
    pub amplitude: f32,
}

impl Pulse {
    /// Checks that the pulse stops at or after it starts
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.end < self.start {
            return Err(ConfigurationError::PulseEndsBeforeStart);
        }

        Ok(())
    }
}

/// Builds the stimulus waveform over the given time axis with one value per
/// time sample, each pulse in list order first sets every sample at or after
/// its start to its amplitude and then zeroes every sample at or after its
/// end, so later pulses overwrite the tails of earlier ones and pulses lying
/// outside the axis affect no samples
pub fn stimulus_waveform(times: &Array1<f32>, pulses: &[Pulse]) -> Array1<f32> {
    let mut stimulus = Array1::zeros(times.len());

    for pulse in pulses {
        Zip::from(&mut stimulus)
            .and(times)
            .for_each(|sample, &t| {
                if t >= pulse.start {
                    *sample = pulse.amplitude;
                }
                if t >= pulse.end {
                    *sample = 0.;
                }
            });
    }

    stimulus
}

/// A set of parameters to use in generating gaussian noise
#[derive(Debug, Clone)]
pub struct GaussianParameters {
    /// Mean of distribution
    pub mean: f32,
    /// Standard deviation of distribution
    pub std: f32,
    /// Maximum cutoff value
    pub max: f32,
    /// Minimum cutoff value
    pub min: f32,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        GaussianParameters {
            mean: 1.0,
            std: 0.0,
            max: 2.0,
            min: 0.0,
        }
    }
}

impl GaussianParameters {
    /// Generates a normally distributed factor clamped between the minimum
    /// and maximum cutoffs to scale an injected current with
    pub fn get_random_factor(&self) -> f32 {
        limited_distr(self.mean, self.std, self.min, self.max)
    }
}
