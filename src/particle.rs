//! Minimal particle and nucleus resolver
//!
//! Kinematics only need to know the mass of the colliding species, and whether
//! a species is a genuine multi-nucleon nucleus (in which case per-nucleon
//! kinematics apply). This module provides just enough of a particle database
//! for that: PDG identifiers, nuclei, composite targets, and a small table of
//! common particles.

use crate::{
    error::{KinematicsError, Result},
    numeric::Float,
    units::{NEUTRON_MASS, NUCLEON_MASS, PROTON_MASS},
};
use std::fmt;

/// Particle identifier, following the Particle Data Group numbering scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PdgId(pub i32);
//
impl PdgId {
    /// Proton
    pub const PROTON: Self = Self(2212);
    /// Neutron
    pub const NEUTRON: Self = Self(2112);
    /// Photon
    pub const PHOTON: Self = Self(22);
    /// Electron
    pub const ELECTRON: Self = Self(11);
    /// Negative muon
    pub const MUON: Self = Self(13);
    /// Positive pion
    pub const PI_PLUS: Self = Self(211);
    /// Neutral pion
    pub const PI_ZERO: Self = Self(111);
    /// Positive kaon
    pub const K_PLUS: Self = Self(321);

    /// Offset of nuclear codes, which read 10LZZZAAAI
    const NUCLEUS_OFFSET: i32 = 1_000_000_000;

    /// Truth that this identifier uses the nuclear code scheme
    pub fn is_nucleus(self) -> bool {
        (Self::NUCLEUS_OFFSET..2 * Self::NUCLEUS_OFFSET).contains(&self.0)
    }

    /// Decode the mass number and charge of a nuclear code
    pub fn nucleus(self) -> Option<(u32, u32)> {
        self.is_nucleus().then(|| {
            let code = self.0 as u32;
            ((code / 10) % 1000, (code / 10_000) % 1000)
        })
    }

    /// Mass of a point particle, if it is known (GeV)
    ///
    /// Antiparticles share the mass of their particle.
    ///
    pub fn mass(self) -> Option<Float> {
        let mass = match self.0.abs() {
            2212 => PROTON_MASS,
            2112 => NEUTRON_MASS,
            11 => 0.000_510_998_95,
            13 => 0.105_658_375_5,
            15 => 1.776_86,
            12 | 14 | 16 | 22 => 0.,
            111 => 0.134_976_8,
            211 => 0.139_570_39,
            130 | 310 | 311 => 0.497_611,
            321 => 0.493_677,
            3122 => 1.115_683,
            3222 => 1.189_37,
            3112 => 1.197_449,
            3312 => 1.321_71,
            3334 => 1.672_45,
            411 => 1.869_66,
            421 => 1.864_84,
            _ => return None,
        };
        Some(mass)
    }
}

impl fmt::Display for PdgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match PARTICLE_NAMES.iter().find(|(_, id)| *id == *self) {
            Some((name, _)) => f.write_str(name),
            None => write!(f, "PDG {}", self.0),
        }
    }
}

/// Names of the point particles that the resolver knows about. The first name
/// listed for a given identifier is the one used for display.
const PARTICLE_NAMES: &[(&str, PdgId)] = &[
    ("p", PdgId::PROTON),
    ("proton", PdgId::PROTON),
    ("p~", PdgId(-2212)),
    ("pbar", PdgId(-2212)),
    ("antiproton", PdgId(-2212)),
    ("n", PdgId::NEUTRON),
    ("neutron", PdgId::NEUTRON),
    ("n~", PdgId(-2112)),
    ("nbar", PdgId(-2112)),
    ("gamma", PdgId::PHOTON),
    ("photon", PdgId::PHOTON),
    ("e-", PdgId::ELECTRON),
    ("electron", PdgId::ELECTRON),
    ("e+", PdgId(-11)),
    ("positron", PdgId(-11)),
    ("mu-", PdgId::MUON),
    ("mu+", PdgId(-13)),
    ("nu_e", PdgId(12)),
    ("nu_mu", PdgId(14)),
    ("nu_tau", PdgId(16)),
    ("pi+", PdgId::PI_PLUS),
    ("pi-", PdgId(-211)),
    ("pi0", PdgId::PI_ZERO),
    ("K+", PdgId::K_PLUS),
    ("K-", PdgId(-321)),
    ("K0L", PdgId(130)),
    ("K0S", PdgId(310)),
    ("Lambda", PdgId(3122)),
    ("Lambda~", PdgId(-3122)),
    ("Sigma+", PdgId(3222)),
    ("Sigma-", PdgId(3112)),
    ("Xi-", PdgId(3312)),
    ("Omega-", PdgId(3334)),
    ("D+", PdgId(411)),
    ("D0", PdgId(421)),
];

/// Element symbols with the mass number of their most common isotope, for
/// name-based nucleus resolution
const ELEMENTS: &[(&str, u32, u32)] = &[
    ("H", 1, 1),
    ("d", 2, 1),
    ("He", 4, 2),
    ("Li", 7, 3),
    ("Be", 9, 4),
    ("B", 11, 5),
    ("C", 12, 6),
    ("N", 14, 7),
    ("O", 16, 8),
    ("Ne", 20, 10),
    ("Na", 23, 11),
    ("Mg", 24, 12),
    ("Al", 27, 13),
    ("Si", 28, 14),
    ("Ar", 40, 18),
    ("Ca", 40, 20),
    ("Fe", 56, 26),
    ("Cu", 63, 29),
    ("Kr", 84, 36),
    ("Ag", 108, 47),
    ("Xe", 129, 54),
    ("W", 184, 74),
    ("Au", 197, 79),
    ("Pb", 208, 82),
    ("U", 238, 92),
];

/// Atomic nucleus, described by its mass number A and charge Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nucleus {
    a: u32,
    z: u32,
}
//
impl Nucleus {
    /// Describe a nucleus, checking that it makes sense
    pub fn new(a: u32, z: u32) -> Result<Self> {
        if a == 0 || a > 999 || z > a || (z == 0 && a > 1) {
            return Err(KinematicsError::invalid(format!(
                "(A={a}, Z={z}) is not a valid nucleus"
            )));
        }
        Ok(Self { a, z })
    }

    /// Mass number A
    pub fn mass_number(&self) -> u32 {
        self.a
    }

    /// Charge Z
    pub fn charge(&self) -> u32 {
        self.z
    }

    /// Truth that this nucleus holds more than one nucleon
    pub fn is_real_nucleus(&self) -> bool {
        self.a > 1
    }

    /// PDG identifier (single nucleons use their hadron codes)
    pub fn pdg_id(&self) -> PdgId {
        match (self.a, self.z) {
            (1, 1) => PdgId::PROTON,
            (1, 0) => PdgId::NEUTRON,
            (a, z) => PdgId(PdgId::NUCLEUS_OFFSET + (z * 10_000 + a * 10) as i32),
        }
    }

    /// Resolve element names like "O", "Pb" or "Pb208"
    fn from_name(name: &str) -> Option<Result<Self>> {
        let digits_at = name.find(|c: char| c.is_ascii_digit()).unwrap_or(name.len());
        let (symbol, mass_number) = name.split_at(digits_at);
        let &(_, default_a, z) = ELEMENTS.iter().find(|(sym, _, _)| *sym == symbol)?;
        let a = if mass_number.is_empty() {
            default_a
        } else {
            mass_number.parse().ok()?
        };
        Some(Self::new(a, z))
    }
}

impl fmt::Display for Nucleus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ELEMENTS.iter().find(|(_, _, z)| *z == self.z) {
            Some((symbol, _, _)) => write!(f, "{}{}", symbol, self.a),
            None => write!(f, "(A={}, Z={})", self.a, self.z),
        }
    }
}

/// Target made of a mixture of nuclei, such as air
///
/// Fractions are normalized so that they sum up to one.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeTarget {
    label: String,
    components: Vec<(Nucleus, Float)>,
}
//
impl CompositeTarget {
    /// Build a composite target from nuclei and their relative abundances
    pub fn new(
        label: impl Into<String>,
        components: impl IntoIterator<Item = (Nucleus, Float)>,
    ) -> Result<Self> {
        let label = label.into();
        let mut components = components.into_iter().collect::<Vec<_>>();
        if components.is_empty() {
            return Err(KinematicsError::invalid(format!(
                "composite target {label:?} has no components"
            )));
        }
        if let Some((nucleus, fraction)) = components
            .iter()
            .find(|(_, fraction)| !(fraction.is_finite() && *fraction > 0.))
        {
            return Err(KinematicsError::invalid(format!(
                "fraction {fraction} of {nucleus} in composite target {label:?} must be positive"
            )));
        }
        let total: Float = components.iter().map(|(_, fraction)| fraction).sum();
        for (_, fraction) in &mut components {
            *fraction /= total;
        }
        Ok(Self { label, components })
    }

    /// Human-readable name of the target
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Nuclei making up the target, with their normalized fractions
    pub fn components(&self) -> &[(Nucleus, Float)] {
        &self.components
    }

    /// Largest mass number among the components
    pub fn max_mass_number(&self) -> u32 {
        self.components
            .iter()
            .map(|(nucleus, _)| nucleus.mass_number())
            .max()
            .unwrap_or_default()
    }

    /// Largest charge among the components
    pub fn max_charge(&self) -> u32 {
        self.components
            .iter()
            .map(|(nucleus, _)| nucleus.charge())
            .max()
            .unwrap_or_default()
    }

    /// Abundance-weighted mass number
    pub fn average_mass_number(&self) -> Float {
        self.components
            .iter()
            .map(|(nucleus, fraction)| nucleus.mass_number() as Float * fraction)
            .sum()
    }
}

impl fmt::Display for CompositeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.label)?;
        for (idx, (nucleus, fraction)) in self.components.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{nucleus}: {fraction:.4}")?;
        }
        write!(f, "]")
    }
}

/// Colliding species, as seen by the kinematics
#[derive(Debug, Clone, PartialEq)]
pub enum Species {
    /// Point particle (single nucleons included)
    Particle(PdgId),

    /// Nucleus with more than one nucleon
    Nucleus(Nucleus),

    /// Mixture of nuclei (only valid as a target)
    Composite(CompositeTarget),
}
//
impl Species {
    /// Turn raw user input into a species
    pub fn resolve(input: impl Into<ParticleInput>) -> Result<Self> {
        match input.into() {
            ParticleInput::Name(name) => Self::from_name(&name),
            ParticleInput::Id(id) => Self::from_pdg_id(id),
            ParticleInput::Nucleus(a, z) => Ok(Self::from_nucleus(Nucleus::new(a, z)?)),
            ParticleInput::Composite(target) => Ok(Self::Composite(target)),
            ParticleInput::Resolved(species) => match species {
                Self::Particle(id) => Self::from_pdg_id(id),
                Self::Nucleus(nucleus) => Ok(Self::from_nucleus(nucleus)),
                Self::Composite(_) => Ok(species),
            },
        }
    }

    fn from_nucleus(nucleus: Nucleus) -> Self {
        if nucleus.is_real_nucleus() {
            Self::Nucleus(nucleus)
        } else {
            Self::Particle(nucleus.pdg_id())
        }
    }

    fn from_pdg_id(id: PdgId) -> Result<Self> {
        if let Some((a, z)) = id.nucleus() {
            return Ok(Self::from_nucleus(Nucleus::new(a, z)?));
        }
        match id.mass() {
            Some(_) => Ok(Self::Particle(id)),
            None => Err(KinematicsError::invalid(format!(
                "unknown particle with PDG ID {}",
                id.0
            ))),
        }
    }

    fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        if let Some((_, id)) = PARTICLE_NAMES.iter().find(|(known, _)| *known == name) {
            return Ok(Self::Particle(*id));
        }
        if let Some(nucleus) = Nucleus::from_name(name) {
            return Ok(Self::from_nucleus(nucleus?));
        }
        if let Ok(id) = name.parse::<i32>() {
            return Self::from_pdg_id(PdgId(id));
        }
        Err(KinematicsError::invalid(format!(
            "unknown particle name {name:?}"
        )))
    }

    /// Truth that this species stands for nuclei with several nucleons, for
    /// which per-nucleon kinematics are used
    pub fn is_real_nucleus(&self) -> bool {
        !matches!(self, Self::Particle(_))
    }

    /// Truth that this species is a composite target
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Mass entering the kinematics (GeV)
    ///
    /// For nuclei and composite targets, this is the nucleon mass. Unknown
    /// point particles have no mass.
    ///
    pub fn mass(&self) -> Option<Float> {
        match self {
            Self::Particle(id) => id.mass(),
            Self::Nucleus(_) | Self::Composite(_) => Some(NUCLEON_MASS),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Particle(id) => fmt::Display::fmt(id, f),
            Self::Nucleus(nucleus) => fmt::Display::fmt(nucleus, f),
            Self::Composite(target) => fmt::Display::fmt(target, f),
        }
    }
}

/// Raw description of a colliding particle, before resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleInput {
    /// Particle or element name, e.g. "p", "pi+", "O16", or a PDG ID as text
    Name(String),

    /// PDG identifier, nuclear codes included
    Id(PdgId),

    /// Mass number A and charge Z of a nucleus
    Nucleus(u32, u32),

    /// Mixture of nuclei
    Composite(CompositeTarget),

    /// Species which was resolved before
    Resolved(Species),
}

impl From<&str> for ParticleInput {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ParticleInput {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i32> for ParticleInput {
    fn from(id: i32) -> Self {
        Self::Id(PdgId(id))
    }
}

impl From<PdgId> for ParticleInput {
    fn from(id: PdgId) -> Self {
        Self::Id(id)
    }
}

impl From<(u32, u32)> for ParticleInput {
    fn from((a, z): (u32, u32)) -> Self {
        Self::Nucleus(a, z)
    }
}

impl From<Nucleus> for ParticleInput {
    fn from(nucleus: Nucleus) -> Self {
        Self::Nucleus(nucleus.a, nucleus.z)
    }
}

impl From<CompositeTarget> for ParticleInput {
    fn from(target: CompositeTarget) -> Self {
        Self::Composite(target)
    }
}

impl From<Species> for ParticleInput {
    fn from(species: Species) -> Self {
        Self::Resolved(species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn air() -> CompositeTarget {
        CompositeTarget::new(
            "air",
            [
                (Nucleus::new(14, 7).unwrap(), 0.78),
                (Nucleus::new(16, 8).unwrap(), 0.21),
                (Nucleus::new(40, 18).unwrap(), 0.01),
            ],
        )
        .unwrap()
    }

    #[test]
    fn single_nucleons_are_point_particles() {
        assert_eq!(Species::resolve((1, 1)), Ok(Species::Particle(PdgId::PROTON)));
        assert_eq!(Species::resolve((1, 0)), Ok(Species::Particle(PdgId::NEUTRON)));
        assert_eq!(
            Species::resolve(1_000_010_010),
            Ok(Species::Particle(PdgId::PROTON))
        );
        assert!(!Species::resolve("p").unwrap().is_real_nucleus());
    }

    #[test]
    fn resolved_single_nucleons_keep_their_own_mass() {
        let proton = Species::Nucleus(Nucleus::new(1, 1).unwrap());
        assert_eq!(
            Species::resolve(proton),
            Ok(Species::Particle(PdgId::PROTON))
        );
        let neutron = Species::resolve(Species::Nucleus(Nucleus::new(1, 0).unwrap())).unwrap();
        assert_eq!(neutron.mass(), Some(NEUTRON_MASS));
        let lead = Species::Nucleus(Nucleus::new(208, 82).unwrap());
        assert_eq!(Species::resolve(lead.clone()), Ok(lead));
    }

    #[test]
    fn nuclei_resolve_from_all_inputs() {
        let lead = Species::Nucleus(Nucleus::new(208, 82).unwrap());
        assert_eq!(Species::resolve((208, 82)), Ok(lead.clone()));
        assert_eq!(Species::resolve(1_000_822_080), Ok(lead.clone()));
        assert_eq!(Species::resolve("Pb"), Ok(lead.clone()));
        assert_eq!(Species::resolve("Pb208"), Ok(lead.clone()));
        assert!(lead.is_real_nucleus());
        assert_eq!(lead.mass(), Some(NUCLEON_MASS));
    }

    #[test]
    fn nuclear_codes_round_trip() {
        let oxygen = Nucleus::new(16, 8).unwrap();
        assert_eq!(oxygen.pdg_id(), PdgId(1_000_080_160));
        assert_eq!(oxygen.pdg_id().nucleus(), Some((16, 8)));
        assert!(!PdgId::PROTON.is_nucleus());
    }

    #[test]
    fn invalid_particles_are_rejected() {
        assert!(Species::resolve((0, 0)).is_err());
        assert!(Species::resolve((4, 5)).is_err());
        assert!(Species::resolve((2, 0)).is_err());
        assert!(Species::resolve(9_999_999).is_err());
        assert!(Species::resolve("graviton").is_err());
    }

    #[test]
    fn particle_names() {
        assert_eq!(Species::resolve("pi-"), Ok(Species::Particle(PdgId(-211))));
        assert_eq!(Species::resolve("2212"), Ok(Species::Particle(PdgId::PROTON)));
        assert_eq!(PdgId(-2212).mass(), Some(PROTON_MASS));
        assert_eq!(PdgId::PROTON.to_string(), "p");
        assert_eq!(Nucleus::new(16, 8).unwrap().to_string(), "O16");
    }

    #[test]
    fn composite_fractions_are_normalized() {
        let target = CompositeTarget::new(
            "mix",
            [
                (Nucleus::new(14, 7).unwrap(), 3.),
                (Nucleus::new(16, 8).unwrap(), 1.),
            ],
        )
        .unwrap();
        let fractions: Vec<_> = target.components().iter().map(|(_, f)| *f).collect();
        assert_eq!(fractions, vec![0.75, 0.25]);
        assert_eq!(target.average_mass_number(), 14.5);
    }

    #[test]
    fn composite_properties() {
        let air = air();
        assert_eq!(air.label(), "air");
        assert_eq!(air.max_mass_number(), 40);
        assert_eq!(air.max_charge(), 18);
        let species = Species::resolve(air.clone()).unwrap();
        assert!(species.is_composite());
        assert!(species.is_real_nucleus());
        assert_eq!(species.mass(), Some(NUCLEON_MASS));
        assert_eq!(species, Species::Composite(air));
    }

    #[test]
    fn invalid_composites_are_rejected() {
        assert!(CompositeTarget::new("empty", []).is_err());
        let oxygen = Nucleus::new(16, 8).unwrap();
        assert!(CompositeTarget::new("neg", [(oxygen, -1.)]).is_err());
        assert!(CompositeTarget::new("nan", [(oxygen, Float::NAN)]).is_err());
    }
}
