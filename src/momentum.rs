//! This module implements some domain-specific 4-momentum handling logic:
//! the 4-momentum type itself, two-body relativistic conversions between
//! lab-frame and center-of-mass quantities, and longitudinal boosts.

use crate::numeric::Float;
use nalgebra::SVector;
use prefix_num_ops::real::*;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Relativistic 4-momentum
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Build the on-shell 4-momentum of a particle of mass `mass` moving along the
/// collision axis with longitudinal momentum `pz`
pub fn on_axis(pz: Float, mass: Float) -> Momentum {
    Momentum::new(0., 0., pz, momentum2energy(pz, mass))
}

/// Invariant mass squared of a 4-momentum
pub fn mass2(p: &Momentum) -> Float {
    p[E] * p[E] - p.fixed_rows::<3>(X).norm_squared()
}

// ### TWO-BODY KINEMATICS ###

/// Momentum of a particle of mass `mass` and total energy `energy`
///
/// This computes `sqrt(e² - m²)` in a cancellation-friendly way. More
/// generally it is the "other leg" of any Minkowski norm, which is also how
/// the center-of-mass energy is obtained from a summed 4-momentum.
///
pub fn energy2momentum(energy: Float, mass: Float) -> Float {
    sqrt((energy + mass) * (energy - mass))
}

/// Total energy of a particle of mass `mass` and momentum `momentum`
pub fn momentum2energy(momentum: Float, mass: Float) -> Float {
    sqrt(momentum * momentum + mass * mass)
}

/// Center-of-mass energy of a projectile of lab energy `elab` and mass `m1`
/// hitting a target of mass `m2` at rest
pub fn elab2ecm(elab: Float, m1: Float, m2: Float) -> Float {
    sqrt(m1 * m1 + m2 * m2 + 2. * elab * m2)
}

/// Lab-frame projectile energy corresponding to a center-of-mass energy `ecm`,
/// for a projectile of mass `m1` and a target of mass `m2` at rest
pub fn ecm2elab(ecm: Float, m1: Float, m2: Float) -> Float {
    (ecm * ecm - m1 * m1 - m2 * m2) / (2. * m2)
}

/// Modulus of the momentum of either particle in the center-of-mass frame
pub fn cm_momentum(ecm: Float, m1: Float, m2: Float) -> Float {
    let s = ecm * ecm;
    sqrt((s - (m1 + m2).powi(2)) * (s - (m1 - m2).powi(2))) / (2. * ecm)
}

// ### BOOSTS ###

/// Apply a Lorentz boost along the collision axis to arrays of particle
/// energies and longitudinal momenta, in place
///
/// The boost is parametrized by `gamma` and `betagamma`, whose sign selects
/// the direction of the boost.
///
pub fn boost_longitudinal(gamma: Float, betagamma: Float, en: &mut [Float], pz: &mut [Float]) {
    assert_eq!(
        en.len(),
        pz.len(),
        "Energy and longitudinal momentum arrays must have the same length"
    );
    for (e, z) in en.iter_mut().zip(pz.iter_mut()) {
        let (e0, z0) = (*e, *z);
        *e = gamma * e0 + betagamma * z0;
        *z = betagamma * e0 + gamma * z0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::PROTON_MASS;
    use approx::assert_relative_eq;

    #[test]
    fn energy_momentum_conversions_are_inverse() {
        let p = 123.4;
        let e = momentum2energy(p, PROTON_MASS);
        assert_relative_eq!(energy2momentum(e, PROTON_MASS), p, max_relative = 1e-12);
    }

    #[test]
    fn ecm_elab_conversions_are_inverse() {
        let (m1, m2) = (0.13957039, PROTON_MASS);
        let elab = 1e4;
        let ecm = elab2ecm(elab, m1, m2);
        assert_relative_eq!(ecm2elab(ecm, m1, m2), elab, max_relative = 1e-12);
    }

    #[test]
    fn cm_momentum_at_threshold_vanishes() {
        let ecm = 2. * PROTON_MASS;
        assert_eq!(cm_momentum(ecm, PROTON_MASS, PROTON_MASS), 0.);
    }

    #[test]
    fn on_axis_momenta_are_on_shell() {
        let p = on_axis(-42., PROTON_MASS);
        assert_eq!(p[Z], -42.);
        assert_relative_eq!(mass2(&p), PROTON_MASS * PROTON_MASS, max_relative = 1e-9);
    }

    #[test]
    fn boost_preserves_invariant_mass() {
        let mut en = [10., 5., 1.];
        let mut pz = [9.9, -4., 0.];
        let m2_before: Vec<_> = en.iter().zip(&pz).map(|(e, z)| e * e - z * z).collect();
        let (gamma, betagamma): (Float, Float) = (3., Float::sqrt(8.));
        boost_longitudinal(gamma, betagamma, &mut en, &mut pz);
        for ((e, z), m2) in en.iter().zip(&pz).zip(m2_before) {
            assert_relative_eq!(e * e - z * z, m2, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    #[should_panic]
    fn boost_rejects_mismatched_arrays() {
        boost_longitudinal(1., 0., &mut [1., 2.], &mut [0.]);
    }
}
