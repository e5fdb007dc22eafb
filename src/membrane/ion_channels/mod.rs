//! Ionic conductances of the nerve membrane, each channel pairs a maximal
//! conductance with a reversal potential and computes the current it carries
//! from a snapshot of the membrane state.

use super::MembraneState;


/// Computes the current carried by an ionic conductance from a snapshot of
/// the membrane state, `e_rest` is the absolute resting potential the
/// voltage displacements are measured against
pub trait MembraneCurrent {
    /// Returns the current through the channel (uA/cm^2)
    fn current(&self, state: &MembraneState, e_rest: f32) -> f32;
}

/// Voltage gated sodium channel, conductance scales with `m^3 * h`
#[derive(Debug, Clone, Copy)]
pub struct SodiumChannel {
    /// Maximal conductance (mS/cm^2)
    pub g_na: f32,
    /// Reversal potential (mV)
    pub e_na: f32,
}

impl Default for SodiumChannel {
    fn default() -> Self {
        SodiumChannel {
            g_na: 120.,
            e_na: 120.,
        }
    }
}

impl MembraneCurrent for SodiumChannel {
    fn current(&self, state: &MembraneState, e_rest: f32) -> f32 {
        state.m.powi(3) * state.h * self.g_na * (state.v - (self.e_na - e_rest))
    }
}

/// Voltage gated potassium channel, conductance scales with `n^4`
#[derive(Debug, Clone, Copy)]
pub struct PotassiumChannel {
    /// Maximal conductance (mS/cm^2)
    pub g_k: f32,
    /// Reversal potential (mV)
    pub e_k: f32,
}

impl Default for PotassiumChannel {
    fn default() -> Self {
        PotassiumChannel {
            g_k: 36.,
            e_k: -12.,
        }
    }
}

impl MembraneCurrent for PotassiumChannel {
    fn current(&self, state: &MembraneState, e_rest: f32) -> f32 {
        self.g_k * state.n.powi(4) * (state.v - (self.e_k - e_rest))
    }
}

/// Leak channel with a voltage independent conductance
#[derive(Debug, Clone, Copy)]
pub struct LeakChannel {
    /// Conductance (mS/cm^2)
    pub g_l: f32,
    /// Reversal potential (mV)
    pub e_l: f32,
}

impl Default for LeakChannel {
    fn default() -> Self {
        LeakChannel {
            g_l: 0.3,
            e_l: 10.6,
        }
    }
}

impl MembraneCurrent for LeakChannel {
    fn current(&self, state: &MembraneState, e_rest: f32) -> f32 {
        self.g_l * (state.v - (self.e_l - e_rest))
    }
}
