use crate::constants::{OSC_DEFAULT_AMPLITUDE, OSC_DEFAULT_FREQUENCY};
use std::f32::consts::TAU;

/// Construction parameters for an [`Oscillator`]. Unset, zero or non-finite
/// fields fall back to the defaults (phase 0, offset 0, frequency 0.001,
/// amplitude 1).
#[derive(Clone, Copy, Debug, Default)]
pub struct OscillatorParams {
    pub phase: Option<f32>,
    pub offset: Option<f32>,
    pub frequency: Option<f32>,
    pub amplitude: Option<f32>,
}

/// Phase accumulator producing `offset + amplitude * sin(phase)`.
#[derive(Clone, Debug)]
pub struct Oscillator {
    phase: f32,
    offset: f32,
    frequency: f32,
    amplitude: f32,
    value: f32,
}

#[inline]
fn or_default(v: Option<f32>, default: f32) -> f32 {
    match v {
        Some(x) if x.is_finite() && x != 0.0 => x,
        _ => default,
    }
}

impl Oscillator {
    pub fn new(params: OscillatorParams) -> Self {
        Self {
            phase: or_default(params.phase, 0.0),
            offset: or_default(params.offset, 0.0),
            frequency: or_default(params.frequency, OSC_DEFAULT_FREQUENCY),
            amplitude: or_default(params.amplitude, OSC_DEFAULT_AMPLITUDE),
            value: 0.0,
        }
    }

    /// Step the phase by one frequency increment and return the new value.
    /// The phase is kept in `[0, TAU)` so small increments never round away.
    pub fn advance(&mut self) -> f32 {
        self.phase = (self.phase + self.frequency).rem_euclid(TAU);
        self.value = self.offset + self.amplitude * self.phase.sin();
        self.value
    }

    /// Last value returned by [`advance`](Self::advance); 0 before the first step.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(OscillatorParams::default())
    }
}
