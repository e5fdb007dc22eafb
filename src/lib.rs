//! # Excitable Membrane
//!
//! `excitable_membrane` is a package for simulating the electrical
//! excitability of a nerve membrane with the Hodgkin Huxley conductance
//! based model. The membrane voltage and the three ion channel gating
//! variables form a coupled system of ordinary differential equations that
//! is integrated forward in time with a fixed step explicit Euler method
//! while an externally applied stimulus current drives the membrane.
//! A completed run hands back the full voltage trace together with the
//! stimulus waveform that produced it so an external consumer can plot or
//! analyze the two series.
//!
//! Voltages throughout the package are displacements from the resting
//! potential in mV, so a membrane at rest sits at `0.`.
//!
//! ## Example Code
//!
//! ### Simulating an action potential
//!
//! ```rust
//! use excitable_membrane::error::ConfigurationError;
//! use excitable_membrane::membrane::{
//!     find_action_potentials, HodgkinHuxleyMembrane, Simulation, TimeWindow,
//! };
//! use excitable_membrane::membrane::stimulus::Pulse;
//!
//! # fn main() -> Result<(), ConfigurationError> {
//! // 10 uA/cm^2 step current injected from 20 ms onwards
//! let simulation = Simulation::new(
//!     TimeWindow { start: 0., stop: 100., dt: 0.001 },
//!     vec![Pulse { start: 20., end: 100., amplitude: 10. }],
//!     HodgkinHuxleyMembrane::default(),
//! )?;
//!
//! let record = simulation.run();
//!
//! assert_eq!(record.voltages.len(), record.times.len());
//! assert_eq!(record.stimulus.len(), record.times.len());
//!
//! // the stimulus is strong enough to fire the membrane
//! let peaks = find_action_potentials(&record.voltages, 60.);
//! assert!(!peaks.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### Stepping the membrane by hand
//!
//! ```rust
//! use excitable_membrane::membrane::HodgkinHuxleyMembrane;
//!
//! let membrane = HodgkinHuxleyMembrane::default();
//!
//! // gating variables start at the steady state of their rates at rest
//! let mut state = membrane.resting_state();
//!
//! for _ in 0..10000 {
//!     state = membrane.step(&state, 10., 0.01);
//! }
//!
//! assert!(state.v.is_finite());
//! ```
//!
//! ### Sweeping stimulus amplitudes in parallel
//!
//! ```rust
//! use excitable_membrane::error::ConfigurationError;
//! use excitable_membrane::membrane::{
//!     run_batch, HodgkinHuxleyMembrane, Simulation, TimeWindow,
//! };
//! use excitable_membrane::membrane::stimulus::Pulse;
//!
//! # fn main() -> Result<(), ConfigurationError> {
//! let simulations: Result<Vec<Simulation>, ConfigurationError> = [2.5, 5., 10.]
//!     .iter()
//!     .map(|&amplitude| {
//!         Simulation::new(
//!             TimeWindow { start: 0., stop: 50., dt: 0.01 },
//!             vec![Pulse { start: 10., end: 50., amplitude }],
//!             HodgkinHuxleyMembrane::default(),
//!         )
//!     })
//!     .collect();
//!
//! // each run owns disjoint state so the batch executes in parallel
//! let records = run_batch(&simulations?);
//!
//! assert_eq!(records.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod distribution;
pub mod error;
pub mod membrane;
