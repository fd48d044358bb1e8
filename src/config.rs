//! Mechanism for describing a collision in a plain-text "collision card"
//!
//! A collision card holds one item per line, as a key followed by one or more
//! values. Blank lines are ignored and `#` starts a comment. For example:
//!
//! ```text
//! particle1  p
//! particle2  (14,7)*0.78 (16,8)*0.21 (40,18)*0.01   # air
//! plab       100 TeV
//! frame      cms
//! ```
//!
//! Energies may carry a unit suffix (MeV, GeV, TeV, PeV, EeV) and default to
//! GeV. A `particle2` item with several `(A,Z)*fraction` values describes a
//! composite target.

use crate::{
    frame::EventFrame,
    kinematics::EventKinematics,
    numeric::Float,
    particle::{CompositeTarget, Nucleus, ParticleInput},
    units,
};

use eyre::{bail, ensure, eyre, Result, WrapErr};

use std::str::FromStr;

/// Parsed collision card
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionCard {
    /// Projectile
    pub particle1: ParticleInput,

    /// Target
    pub particle2: ParticleInput,

    /// Center-of-mass energy (GeV)
    pub ecm: Option<Float>,

    /// Lab-frame projectile momentum (GeV)
    pub plab: Option<Float>,

    /// Lab-frame projectile total energy (GeV)
    pub elab: Option<Float>,

    /// Lab-frame projectile kinetic energy (GeV)
    pub ekin: Option<Float>,

    /// Longitudinal beam momenta (GeV)
    pub beam: Option<(Float, Float)>,

    /// Requested reference frame
    pub frame: Option<EventFrame>,
}
//
impl CollisionCard {
    /// Resolve the collision described by this card
    pub fn to_kinematics(&self) -> Result<EventKinematics> {
        let mut builder =
            EventKinematics::builder(self.particle1.clone(), self.particle2.clone());
        if let Some(ecm) = self.ecm {
            builder = builder.ecm(ecm);
        }
        if let Some(plab) = self.plab {
            builder = builder.plab(plab);
        }
        if let Some(elab) = self.elab {
            builder = builder.elab(elab);
        }
        if let Some(ekin) = self.ekin {
            builder = builder.ekin(ekin);
        }
        if let Some((p1, p2)) = self.beam {
            builder = builder.beam(p1, p2);
        }
        if let Some(frame) = self.frame {
            builder = builder.frame(frame);
        }
        builder
            .build()
            .wrap_err("Collision card does not describe a valid collision")
    }
}

impl FromStr for CollisionCard {
    type Err = eyre::Report;

    fn from_str(card: &str) -> Result<Self> {
        let mut particle1 = None;
        let mut particle2 = None;
        let mut ecm = None;
        let mut plab = None;
        let mut elab = None;
        let mut ekin = None;
        let mut beam = None;
        let mut frame = None;

        for (line_idx, line) in card.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default();
            let mut words = line.split_whitespace();
            let Some(key) = words.next() else {
                continue;
            };
            let item = ConfigItem::new(key, words.collect());
            let line_no = line_idx + 1;
            match key {
                "particle1" => item.parse_particle().and_then(|v| set(&mut particle1, key, v)),
                "particle2" => item.parse_particle().and_then(|v| set(&mut particle2, key, v)),
                "ecm" => item.parse_energy().and_then(|v| set(&mut ecm, key, v)),
                "plab" => item.parse_energy().and_then(|v| set(&mut plab, key, v)),
                "elab" => item.parse_energy().and_then(|v| set(&mut elab, key, v)),
                "ekin" => item.parse_energy().and_then(|v| set(&mut ekin, key, v)),
                "beam" => item.parse_beam().and_then(|v| set(&mut beam, key, v)),
                "frame" => item.parse_frame().and_then(|v| set(&mut frame, key, v)),
                _ => Err(eyre!("Unknown configuration item {:?}", key)),
            }
            .wrap_err_with(|| format!("Invalid collision card line {line_no}"))?;
        }

        Ok(Self {
            particle1: particle1.ok_or_else(|| eyre!("Missing configuration of particle1"))?,
            particle2: particle2.ok_or_else(|| eyre!("Missing configuration of particle2"))?,
            ecm,
            plab,
            elab,
            ekin,
            beam,
            frame,
        })
    }
}

/// Fill a collision card slot, which may only be set once
fn set<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<()> {
    ensure!(slot.is_none(), "Duplicate configuration of {}", key);
    *slot = Some(value);
    Ok(())
}

/// Values from the collision card, tagged with the key which they were given
/// for, for error reporting purposes.
struct ConfigItem<'data> {
    name: &'data str,
    values: Vec<&'data str>,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a key and the values that follow it
    fn new(name: &'data str, values: Vec<&'data str>) -> Self {
        Self { name, values }
    }

    /// Parse an energy with an optional unit, e.g. "13.6 TeV" or "13.6TeV"
    fn parse_energy(&self) -> Result<Float> {
        let (value, unit) = match self.values.as_slice() {
            [value, unit] => (*value, *unit),
            [text] => {
                let value = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
                (value, &text[value.len()..])
            }
            _ => bail!("{} expects a single energy, got {:?}", self.name, self.values),
        };
        let value = value
            .parse::<Float>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))?;
        let unit = if unit.is_empty() {
            units::GEV
        } else {
            units::parse_unit(unit)
                .ok_or_else(|| eyre!("Unknown energy unit {:?} for {}", unit, self.name))?
        };
        Ok(value * unit)
    }

    /// Parse two beam momenta, sharing an optional trailing unit
    fn parse_beam(&self) -> Result<(Float, Float)> {
        let (unit, momenta) = match self.values.as_slice() {
            [p1, p2] => (units::GEV, [p1, p2]),
            [p1, p2, unit] => (
                units::parse_unit(unit)
                    .ok_or_else(|| eyre!("Unknown energy unit {:?} for beam", unit))?,
                [p1, p2],
            ),
            _ => bail!("beam expects two momenta, got {:?}", self.values),
        };
        let [p1, p2] = momenta.map(|p| {
            p.parse::<Float>()
                .wrap_err("Could not parse configuration of beam")
        });
        Ok((p1? * unit, p2? * unit))
    }

    /// Parse a reference frame name
    fn parse_frame(&self) -> Result<EventFrame> {
        match self.values.as_slice() {
            [frame] => Ok(frame.parse()?),
            _ => bail!("frame expects a single value, got {:?}", self.values),
        }
    }

    /// Parse a particle name, PDG ID, "(A,Z)" nucleus, or a composite target
    /// made of several "(A,Z)*fraction" components
    fn parse_particle(&self) -> Result<ParticleInput> {
        match self.values.as_slice() {
            [] => bail!("Missing value for {}", self.name),
            [single] if !single.contains('*') => Ok(match parse_nucleus(single)? {
                Some((a, z)) => ParticleInput::Nucleus(a, z),
                None => ParticleInput::from(*single),
            }),
            components => {
                let components = components
                    .iter()
                    .map(|component| {
                        let (nucleus, fraction) = component.split_once('*').ok_or_else(|| {
                            eyre!("Composite target component {component:?} lacks a fraction")
                        })?;
                        let (a, z) = parse_nucleus(nucleus)?.ok_or_else(|| {
                            eyre!("Composite target component {nucleus:?} is not an (A,Z) pair")
                        })?;
                        let fraction = fraction.parse::<Float>().wrap_err_with(|| {
                            format!("Could not parse fraction of {nucleus}")
                        })?;
                        Ok((Nucleus::new(a, z)?, fraction))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ParticleInput::Composite(CompositeTarget::new(
                    "composite",
                    components,
                )?))
            }
        }
    }
}

/// Parse "(A,Z)", returning None if the text does not look like a nucleus
fn parse_nucleus(text: &str) -> Result<Option<(u32, u32)>> {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return Ok(None);
    };
    let (a, z) = inner
        .split_once(',')
        .ok_or_else(|| eyre!("Nucleus {text:?} should read (A,Z)"))?;
    let a = a.trim().parse().wrap_err_with(|| format!("Bad mass number in {text:?}"))?;
    let z = z.trim().parse().wrap_err_with(|| format!("Bad charge in {text:?}"))?;
    Ok(Some((a, z)))
}
