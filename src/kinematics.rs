//! Collision kinematics and conversions between reference frames
//!
//! There are different ways to specify a particle collision. For instance,
//! the projectile and target momenta can be given in the target rest frame,
//! the so-called "laboratory" or fixed-target frame, or in the nucleon-nucleon
//! center-of-mass frame where both momenta have the same modulus but opposite
//! directions. Each event generator expects its inputs in one frame or the
//! other. [`EventKinematics`] lets the user pick whichever specification is
//! most convenient, derives all the other quantities, and can later move
//! generated events to the frame that the user asked for.
//!
//! For nuclei, every quantity is given per nucleon.

use crate::{
    energy::FixedTargetEnergy,
    error::{KinematicsError, Result},
    event::LongitudinalMomenta,
    frame::EventFrame,
    momentum::{self, Momentum, E, Z},
    numeric::{Float, DEFAULT_MAX_RELATIVE},
    particle::{ParticleInput, Species},
};
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use tracing::{debug, trace};

/// Fully resolved kinematics of a two-body collision
#[derive(Debug, Clone, PartialEq)]
pub struct EventKinematics {
    /// Frame in which the user wants events to be expressed
    frame: EventFrame,

    /// Projectile
    particle1: Species,

    /// Target
    particle2: Species,

    /// Center-of-mass energy (nucleon-nucleon for nuclei)
    ecm: Float,

    /// Projectile momentum in the fixed-target frame
    plab: Float,

    /// Projectile total energy in the fixed-target frame
    elab: Float,

    /// Projectile kinetic energy in the fixed-target frame
    ekin: Float,

    /// Projectile and target 4-momenta in the chosen frame
    beams: [Momentum; 2],

    /// Lorentz factor of the center-of-mass frame in the fixed-target frame
    gamma_cm: Float,

    /// Matching beta * gamma
    betagamma_cm: Float,
}
//
impl EventKinematics {
    /// Start specifying a collision of `particle1` onto `particle2`
    pub fn builder(
        particle1: impl Into<ParticleInput>,
        particle2: impl Into<ParticleInput>,
    ) -> KinematicsBuilder {
        KinematicsBuilder::new(particle1, particle2)
    }

    /// Reference frame of the kinematics
    pub fn frame(&self) -> EventFrame {
        self.frame
    }

    /// Projectile
    pub fn particle1(&self) -> &Species {
        &self.particle1
    }

    /// Target
    pub fn particle2(&self) -> &Species {
        &self.particle2
    }

    /// Center-of-mass energy (GeV)
    pub fn ecm(&self) -> Float {
        self.ecm
    }

    /// Projectile momentum in the fixed-target frame (GeV)
    pub fn plab(&self) -> Float {
        self.plab
    }

    /// Projectile total energy in the fixed-target frame (GeV)
    pub fn elab(&self) -> Float {
        self.elab
    }

    /// Projectile kinetic energy in the fixed-target frame (GeV)
    pub fn ekin(&self) -> Float {
        self.ekin
    }

    /// Projectile and target 4-momenta, in this kinematics' frame
    pub fn beams(&self) -> &[Momentum; 2] {
        &self.beams
    }

    /// Lorentz factor relating the center-of-mass and fixed-target frames
    pub fn gamma_cm(&self) -> Float {
        self.gamma_cm
    }

    /// Beta * gamma relating the center-of-mass and fixed-target frames
    pub fn betagamma_cm(&self) -> Float {
        self.betagamma_cm
    }

    /// Move an event from the frame it was generated in to the frame of these
    /// kinematics
    ///
    /// Only boosts between the center-of-mass and fixed-target frames are
    /// supported, apart from the trivial identity boost.
    ///
    pub fn apply_boost<Ev>(&self, event: &mut Ev, generator_frame: EventFrame) -> Result<()>
    where
        Ev: LongitudinalMomenta + ?Sized,
    {
        let (en, pz) = event.energy_and_pz_mut();
        self.apply_boost_arrays(en, pz, generator_frame)
    }

    /// Version of [`apply_boost()`](Self::apply_boost) which operates on raw
    /// energy and longitudinal momentum arrays
    pub fn apply_boost_arrays(
        &self,
        en: &mut [Float],
        pz: &mut [Float],
        generator_frame: EventFrame,
    ) -> Result<()> {
        if generator_frame == self.frame {
            return Ok(());
        }
        let betagamma = match (generator_frame, self.frame) {
            (EventFrame::FixedTarget, EventFrame::CenterOfMass) => -self.betagamma_cm,
            (EventFrame::CenterOfMass, EventFrame::FixedTarget) => self.betagamma_cm,
            (from, to) => return Err(KinematicsError::UnsupportedBoost { from, to }),
        };
        trace!(
            from = %generator_frame,
            to = %self.frame,
            gamma = self.gamma_cm,
            betagamma,
            num_particles = en.len(),
            "boosting event"
        );
        momentum::boost_longitudinal(self.gamma_cm, betagamma, en, pz);
        Ok(())
    }
}

impl fmt::Display for EventKinematics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} + {} in the {}", self.particle1, self.particle2, self.frame)?;
        writeln!(f, "ECM  : {} GeV", self.ecm)?;
        writeln!(f, "PLAB : {} GeV", self.plab)?;
        writeln!(f, "ELAB : {} GeV", self.elab)?;
        writeln!(f, "EKIN : {} GeV", self.ekin)?;
        for (name, beam) in ["BEAM1", "BEAM2"].iter().zip(&self.beams) {
            writeln!(f, "{name}: pz = {} GeV, E = {} GeV", beam[Z], beam[E])?;
        }
        write!(
            f,
            "BOOST: gamma = {}, betagamma = {}",
            self.gamma_cm, self.betagamma_cm
        )
    }
}

impl AbsDiffEq for EventKinematics {
    type Epsilon = Float;

    fn default_epsilon() -> Float {
        Float::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Float) -> bool {
        self.frame == other.frame
            && self.particle1 == other.particle1
            && self.particle2 == other.particle2
            && self.ecm.abs_diff_eq(&other.ecm, epsilon)
            && self.plab.abs_diff_eq(&other.plab, epsilon)
            && self.elab.abs_diff_eq(&other.elab, epsilon)
            && self.ekin.abs_diff_eq(&other.ekin, epsilon)
            && self.gamma_cm.abs_diff_eq(&other.gamma_cm, epsilon)
            && self.betagamma_cm.abs_diff_eq(&other.betagamma_cm, epsilon)
            && self
                .beams
                .iter()
                .zip(&other.beams)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for EventKinematics {
    fn default_max_relative() -> Float {
        DEFAULT_MAX_RELATIVE
    }

    fn relative_eq(&self, other: &Self, epsilon: Float, max_relative: Float) -> bool {
        let close = |a: Float, b: Float| a.relative_eq(&b, epsilon, max_relative);
        self.frame == other.frame
            && self.particle1 == other.particle1
            && self.particle2 == other.particle2
            && close(self.ecm, other.ecm)
            && close(self.plab, other.plab)
            && close(self.elab, other.elab)
            && close(self.ekin, other.ekin)
            && close(self.gamma_cm, other.gamma_cm)
            && close(self.betagamma_cm, other.betagamma_cm)
            && self
                .beams
                .iter()
                .zip(&other.beams)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Collision specification, checked and resolved by [`build()`](Self::build)
///
/// Exactly one of the `ecm`, `plab`, `elab`, `ekin` and `beam` inputs must be
/// set. The reference frame defaults to the one in which that input was given.
///
#[derive(Debug, Clone)]
pub struct KinematicsBuilder {
    particle1: ParticleInput,
    particle2: ParticleInput,
    ecm: Option<Float>,
    plab: Option<Float>,
    elab: Option<Float>,
    ekin: Option<Float>,
    beam: Option<(Float, Float)>,
    frame: Option<EventFrame>,
}
//
impl KinematicsBuilder {
    /// Start from a projectile and a target, with no energy specified yet
    pub fn new(particle1: impl Into<ParticleInput>, particle2: impl Into<ParticleInput>) -> Self {
        Self {
            particle1: particle1.into(),
            particle2: particle2.into(),
            ecm: None,
            plab: None,
            elab: None,
            ekin: None,
            beam: None,
            frame: None,
        }
    }

    /// Center-of-mass energy (nucleon-nucleon for nuclei)
    pub fn ecm(mut self, ecm: Float) -> Self {
        self.ecm = Some(ecm);
        self
    }

    /// Projectile momentum in the fixed-target frame (per nucleon)
    pub fn plab(mut self, plab: Float) -> Self {
        self.plab = Some(plab);
        self
    }

    /// Projectile total energy in the fixed-target frame (per nucleon)
    pub fn elab(mut self, elab: Float) -> Self {
        self.elab = Some(elab);
        self
    }

    /// Projectile kinetic energy in the fixed-target frame (per nucleon)
    pub fn ekin(mut self, ekin: Float) -> Self {
        self.ekin = Some(ekin);
        self
    }

    /// Longitudinal momenta of the projectile and the target (per nucleon)
    pub fn beam(mut self, p1: Float, p2: Float) -> Self {
        self.beam = Some((p1, p2));
        self
    }

    /// Reference frame, overriding the default for the chosen input
    pub fn frame(mut self, frame: EventFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Lab-frame energy, in whichever form it was tagged with
    pub fn fixed_target_energy(self, energy: FixedTargetEnergy) -> Self {
        match energy {
            FixedTargetEnergy::TotalEnergy(elab) => self.elab(elab),
            FixedTargetEnergy::KinEnergy(ekin) => self.ekin(ekin),
            FixedTargetEnergy::Momentum(plab) => self.plab(plab),
        }
    }

    /// Check the specification and derive the complete kinematics
    pub fn build(self) -> Result<EventKinematics> {
        // Catch input errors
        let num_inputs = [self.ecm, self.plab, self.elab, self.ekin]
            .iter()
            .filter(|x| x.is_some())
            .count()
            + usize::from(self.beam.is_some());
        if num_inputs != 1 {
            return Err(KinematicsError::invalid(format!(
                "exactly one of ecm/plab/elab/ekin/beam must be provided, got {num_inputs}"
            )));
        }
        let given = [self.ecm, self.plab, self.elab, self.ekin]
            .into_iter()
            .flatten()
            .chain(self.beam.into_iter().flat_map(|(p1, p2)| [p1, p2]));
        for value in given {
            if !value.is_finite() {
                return Err(KinematicsError::invalid(format!(
                    "collision inputs must be finite, got {value}"
                )));
            }
        }

        let particle1 = Species::resolve(self.particle1)?;
        let particle2 = Species::resolve(self.particle2)?;
        if particle1.is_composite() {
            return Err(KinematicsError::invalid(
                "only the second particle can be a composite target",
            ));
        }
        let m1 = Self::mass(&particle1)?;
        let m2 = Self::mass(&particle2)?;

        let mut beams = [Momentum::zeros(), Momentum::zeros()];
        let (default_frame, ecm, elab) = if let Some(ecm) = self.ecm {
            (EventFrame::CenterOfMass, ecm, momentum::ecm2elab(ecm, m1, m2))
        } else if let Some((p1, p2)) = self.beam {
            if particle2.is_composite() {
                return Err(KinematicsError::invalid(
                    "beam momenta cannot be used with a composite target",
                ));
            }
            beams = [momentum::on_axis(p1, m1), momentum::on_axis(p2, m2)];
            let total = beams[0] + beams[1];
            // Transverse momenta are always zero, so the invariant mass of the
            // system only involves E and pz
            let ecm = momentum::energy2momentum(total[E], total[Z]);
            (EventFrame::Generic, ecm, momentum::ecm2elab(ecm, m1, m2))
        } else {
            let elab = match (self.elab, self.ekin, self.plab) {
                (Some(elab), _, _) => {
                    if elab <= m1 {
                        return Err(KinematicsError::invalid(format!(
                            "projectile energy {elab} GeV must exceed projectile mass {m1} GeV"
                        )));
                    }
                    elab
                }
                (_, Some(ekin), _) => ekin + m1,
                (_, _, Some(plab)) => momentum::momentum2energy(plab, m1),
                _ => unreachable!("exactly one input was checked to be present"),
            };
            (EventFrame::FixedTarget, momentum::elab2ecm(elab, m1, m2), elab)
        };
        let ekin = elab - m1;
        let plab = match self.plab {
            Some(plab) => plab,
            None => momentum::energy2momentum(elab, m1),
        };
        let frame = self.frame.unwrap_or(default_frame);

        if ![ecm, elab, plab].iter().all(|x| x.is_finite()) || ecm <= 0. {
            return Err(KinematicsError::invalid(format!(
                "unphysical collision of {particle1} on {particle2}: \
                 ecm = {ecm}, elab = {elab}, plab = {plab}"
            )));
        }

        // Beam 4-momenta, unless they were given explicitly
        let beam_pz = match frame {
            EventFrame::CenterOfMass => {
                let pcm = momentum::cm_momentum(ecm, m1, m2);
                Some([pcm, -pcm])
            }
            EventFrame::FixedTarget => Some([plab, 0.]),
            EventFrame::Generic => None,
        };
        if let Some([pz1, pz2]) = beam_pz {
            beams = [momentum::on_axis(pz1, m1), momentum::on_axis(pz2, m2)];
        }

        let gamma_cm = (elab + m2) / ecm;
        let betagamma_cm = plab / ecm;

        debug!(
            %particle1,
            %particle2,
            %frame,
            ecm,
            elab,
            ekin,
            plab,
            gamma_cm,
            betagamma_cm,
            "resolved collision kinematics"
        );

        Ok(EventKinematics {
            frame,
            particle1,
            particle2,
            ecm,
            plab,
            elab,
            ekin,
            beams,
            gamma_cm,
            betagamma_cm,
        })
    }

    fn mass(species: &Species) -> Result<Float> {
        species
            .mass()
            .ok_or_else(|| KinematicsError::invalid(format!("mass of {species} is unknown")))
    }
}

/// Kinematics specified by a center-of-mass energy, in the center-of-mass frame
pub fn center_of_mass(
    ecm: Float,
    particle1: impl Into<ParticleInput>,
    particle2: impl Into<ParticleInput>,
) -> Result<EventKinematics> {
    EventKinematics::builder(particle1, particle2)
        .ecm(ecm)
        .build()
}

/// Kinematics specified by a lab-frame projectile energy, in the fixed-target
/// frame
///
/// Bare numbers are understood as total energies. Use the variants of
/// [`FixedTargetEnergy`] to give a kinetic energy or a momentum instead.
///
pub fn fixed_target(
    energy: impl Into<FixedTargetEnergy>,
    particle1: impl Into<ParticleInput>,
    particle2: impl Into<ParticleInput>,
) -> Result<EventKinematics> {
    EventKinematics::builder(particle1, particle2)
        .fixed_target_energy(energy.into())
        .build()
}
