//! Collision kinematics: relativistic two-body kinematics for event generators
//!
//!
//! # Introduction (for the physicist)
//!
//! Monte Carlo event generators describe a collision of a projectile onto a
//! target in different ways. Some want the center-of-mass energy √s, others the
//! projectile energy or momentum in the rest frame of the target, and they do
//! not all produce their events in the same reference frame.
//!
//! This crate accepts whichever description is most convenient, derives all
//! the equivalent quantities (√s, lab-frame total energy, kinetic energy and
//! momentum, beam 4-momenta), and moves generated events between the
//! center-of-mass and fixed-target frames.
//!
//! Nuclei are handled per nucleon: for a lead projectile, "ecm" is the
//! nucleon-nucleon center-of-mass energy and "plab" the momentum per nucleon.
//!
//!
//! # Introduction (for the computer guy)
//!
//! Everything is closed-form arithmetic. An [`EventKinematics`] is built once
//! through a validating builder, after which it is immutable and may be freely
//! shared between threads. The only mutation that this crate performs is the
//! in-place boost of caller-owned event arrays.
//!
//! ```
//! use collision_kinematics::{center_of_mass, units::TEV, EventFrame};
//!
//! let kin = center_of_mass(13.6 * TEV, "p", "p").unwrap();
//! assert_eq!(kin.frame(), EventFrame::CenterOfMass);
//! assert!(kin.elab() > 9e7);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod energy;
pub mod error;
pub mod event;
pub mod frame;
pub mod kinematics;
pub mod momentum;
pub mod numeric;
pub mod particle;
pub mod units;

pub use crate::{
    config::CollisionCard,
    energy::FixedTargetEnergy,
    error::{KinematicsError, Result},
    event::{Event, LongitudinalMomenta},
    frame::EventFrame,
    kinematics::{center_of_mass, fixed_target, EventKinematics, KinematicsBuilder},
    momentum::Momentum,
    numeric::Float,
    particle::{CompositeTarget, Nucleus, ParticleInput, PdgId, Species},
};
