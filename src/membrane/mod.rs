//! The Hodgkin Huxley membrane model and the fixed step machinery that
//! drives it: the coupled membrane state, the explicit Euler step, and the
//! simulator that integrates a whole time window into voltage and stimulus
//! series for an external consumer.
//!
//! The integration has a strict data dependency from one step to the next,
//! so a single run is sequential, independent runs own disjoint state and
//! can execute in parallel through [`run_batch`].

use ndarray::Array1;
use rayon::prelude::*;
use crate::error::ConfigurationError;

pub mod gating;
pub mod ion_channels;
pub mod stimulus;

use gating::{alpha_h, alpha_m, alpha_n, beta_h, beta_m, beta_n, gate_change, steady_state};
use ion_channels::{LeakChannel, MembraneCurrent, PotassiumChannel, SodiumChannel};
use stimulus::{stimulus_waveform, GaussianParameters, Pulse};


/// The four coupled quantities the integration evolves, discarded after a
/// run, the gating variables conceptually lie in `[0, 1]` but are not
/// clamped there
#[derive(Debug, Clone, Copy)]
pub struct MembraneState {
    /// Displacement of the membrane potential from rest (mV)
    pub v: f32,
    /// Potassium activation gate open fraction
    pub n: f32,
    /// Sodium activation gate open fraction
    pub m: f32,
    /// Sodium inactivation gate open fraction
    pub h: f32,
}

/// Biophysical constants of the membrane patch, fixed and shared read only
/// for the whole run, defaults are the classical squid axon values
#[derive(Debug, Clone)]
pub struct HodgkinHuxleyMembrane {
    /// Membrane capacitance (uF/cm^2)
    pub c_m: f32,
    /// Absolute resting potential the voltages are measured against (mV)
    pub e_rest: f32,
    /// Sodium channel
    pub na_channel: SodiumChannel,
    /// Potassium channel
    pub k_channel: PotassiumChannel,
    /// Leak channel
    pub leak_channel: LeakChannel,
}

impl Default for HodgkinHuxleyMembrane {
    fn default() -> Self {
        HodgkinHuxleyMembrane {
            c_m: 1.,
            e_rest: 0.,
            na_channel: SodiumChannel::default(),
            k_channel: PotassiumChannel::default(),
            leak_channel: LeakChannel::default(),
        }
    }
}

impl HodgkinHuxleyMembrane {
    /// Returns the state of the membrane at rest, each gate sits at the
    /// steady state of its transition rates evaluated at zero voltage
    /// displacement
    pub fn resting_state(&self) -> MembraneState {
        MembraneState {
            v: 0.,
            n: steady_state(alpha_n(0.), beta_n(0.)),
            m: steady_state(alpha_m(0.), beta_m(0.)),
            h: steady_state(alpha_h(0.), beta_h(0.)),
        }
    }

    /// Total ionic current across the membrane for the given state (uA/cm^2)
    pub fn ionic_current(&self, state: &MembraneState) -> f32 {
        let channels: [&dyn MembraneCurrent; 3] = [
            &self.na_channel,
            &self.k_channel,
            &self.leak_channel,
        ];

        channels.iter()
            .map(|channel| channel.current(state, self.e_rest))
            .sum()
    }

    /// Advances the state by one explicit Euler step of size `dt` under the
    /// given applied current, every derivative is evaluated at the state
    /// passed in so the four quantities update simultaneously
    pub fn step(&self, state: &MembraneState, applied_current: f32, dt: f32) -> MembraneState {
        let MembraneState { v, n, m, h } = *state;

        let dv = (applied_current - self.ionic_current(state)) / self.c_m;

        MembraneState {
            v: v + dt * dv,
            n: n + dt * gate_change(alpha_n(v), beta_n(v), n),
            m: m + dt * gate_change(alpha_m(v), beta_m(v), m),
            h: h + dt * gate_change(alpha_h(v), beta_h(v), h),
        }
    }
}

/// A half open simulation window `[start, stop)` sampled at a fixed timestep
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    /// Start of the window (ms)
    pub start: f32,
    /// End of the window, exclusive (ms)
    pub stop: f32,
    /// Timestep (ms)
    pub dt: f32,
}

impl TimeWindow {
    /// Checks that the window spans a positive duration with a positive
    /// timestep
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.dt > 0.) {
            return Err(ConfigurationError::NonPositiveTimestep);
        }

        if !(self.stop > self.start) {
            return Err(ConfigurationError::EmptyTimeWindow);
        }

        Ok(())
    }

    /// Evenly spaced time samples over `[start, stop)` with spacing `dt`
    pub fn axis(&self) -> Array1<f32> {
        Array1::range(self.start, self.stop, self.dt)
    }
}

/// One fixed scenario: the time window to simulate, the stimulus pulses
/// applied over it, and the membrane the stimulus drives
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulated time window
    pub window: TimeWindow,
    /// Stimulus pulses, applied in list order when building the waveform
    pub pulses: Vec<Pulse>,
    /// Membrane constants
    pub membrane: HodgkinHuxleyMembrane,
    /// Optional noise scaling the injected current each step, the recorded
    /// stimulus waveform stays unperturbed
    pub input_noise: Option<GaussianParameters>,
}

/// The completed, immutable result of a run, all series are indexed
/// identically to the time axis
#[derive(Debug, Clone)]
pub struct SimulationRecord {
    /// Time samples (ms)
    pub times: Array1<f32>,
    /// Stimulus current at each time sample (uA/cm^2)
    pub stimulus: Array1<f32>,
    /// Membrane voltage at each time sample (mV)
    pub voltages: Array1<f32>,
}

impl Simulation {
    /// Creates a simulation after checking the window and every pulse, an
    /// invalid configuration fails here rather than midway through a run
    pub fn new(
        window: TimeWindow,
        pulses: Vec<Pulse>,
        membrane: HodgkinHuxleyMembrane,
    ) -> Result<Self, ConfigurationError> {
        window.validate()?;

        for pulse in &pulses {
            pulse.validate()?;
        }

        Ok(Simulation {
            window,
            pulses,
            membrane,
            input_noise: None,
        })
    }

    /// Integrates the membrane over the whole window and returns the
    /// completed voltage and stimulus series, the first voltage sample is
    /// the resting value and every following sample is produced from its
    /// predecessor by one Euler step
    ///
    /// Forward Euler is only conditionally stable, an overly large timestep
    /// makes the trace grow without bound rather than fail
    pub fn run(&self) -> SimulationRecord {
        let times = self.window.axis();
        let stimulus = stimulus_waveform(&times, &self.pulses);

        let mut voltages = Array1::zeros(times.len());
        let mut state = self.membrane.resting_state();

        voltages[0] = state.v;

        for i in 0..times.len().saturating_sub(1) {
            let injected = match &self.input_noise {
                Some(noise) => stimulus[i] * noise.get_random_factor(),
                None => stimulus[i],
            };

            state = self.membrane.step(&state, injected, self.window.dt);
            voltages[i + 1] = state.v;
        }

        SimulationRecord {
            times,
            stimulus,
            voltages,
        }
    }
}

/// Runs every simulation to completion in parallel and returns the records
/// in input order, each run owns disjoint state so parameter sweeps scale
/// across threads
pub fn run_batch(simulations: &[Simulation]) -> Vec<SimulationRecord> {
    simulations.par_iter()
        .map(|simulation| simulation.run())
        .collect()
}

/// Returns the indices at which the voltage trace peaks above the given
/// threshold, a peak is a sample at least as large as its predecessor and
/// strictly larger than its successor
pub fn find_action_potentials(voltages: &Array1<f32>, threshold: f32) -> Vec<usize> {
    (1..voltages.len().saturating_sub(1))
        .filter(|&i| {
            voltages[i] > threshold
                && voltages[i] >= voltages[i - 1]
                && voltages[i] > voltages[i + 1]
        })
        .collect()
}
