//! This module defines a minimal storage for generated events, sufficient for
//! moving them from one reference frame to another

use crate::{
    momentum::{Momentum, E, X, Y, Z},
    numeric::Float,
};
use std::fmt::Display;

/// Access to the per-particle energies and longitudinal momenta of an event
///
/// This is the interface through which frame boosts modify events. Both
/// slices must have one entry per particle.
///
pub trait LongitudinalMomenta {
    /// Mutable views on the particle energies and longitudinal momenta
    fn energy_and_pz_mut(&mut self) -> (&mut [Float], &mut [Float]);
}

/// Storage for generated event data
///
/// Encapsulates per-particle arrays of 4-momentum coordinates, in the layout
/// that event generators usually hand out.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    px: Vec<Float>,
    py: Vec<Float>,
    pz: Vec<Float>,
    en: Vec<Float>,
}
//
impl Event {
    /// Build an event from the 4-momenta of its particles
    pub fn from_momenta(momenta: impl IntoIterator<Item = Momentum>) -> Self {
        let mut event = Self::default();
        for p in momenta {
            event.push(p);
        }
        event
    }

    /// Add a particle to the event
    pub fn push(&mut self, p: Momentum) {
        self.px.push(p[X]);
        self.py.push(p[Y]);
        self.pz.push(p[Z]);
        self.en.push(p[E]);
    }

    /// Number of particles in the event
    pub fn len(&self) -> usize {
        self.en.len()
    }

    /// Truth that the event holds no particle
    pub fn is_empty(&self) -> bool {
        self.en.is_empty()
    }

    /// Extract the 4-momentum of a single particle
    pub fn momentum(&self, par: usize) -> Momentum {
        Momentum::new(self.px[par], self.py[par], self.pz[par], self.en[par])
    }

    /// Iterate over the particle 4-momenta
    pub fn momenta(&self) -> impl Iterator<Item = Momentum> + '_ {
        (0..self.len()).map(|par| self.momentum(par))
    }

    /// Particle energies
    pub fn en(&self) -> &[Float] {
        &self.en
    }

    /// Particle longitudinal momenta
    pub fn pz(&self) -> &[Float] {
        &self.pz
    }

    /// Invariant mass squared of a single particle
    pub fn invariant_mass2(&self, par: usize) -> Float {
        crate::momentum::mass2(&self.momentum(par))
    }
}

impl LongitudinalMomenta for Event {
    fn energy_and_pz_mut(&mut self) -> (&mut [Float], &mut [Float]) {
        (&mut self.en, &mut self.pz)
    }
}

impl Display for Event {
    /// Dump the 4-momenta of all particles, one coordinate per row
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (coord, values) in [&self.px, &self.py, &self.pz, &self.en].iter().enumerate() {
            write!(fmt, "{}\t", coord)?;
            for value in values.iter() {
                write!(fmt, "{}\t", value)?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
