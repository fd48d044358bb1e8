//! Tagged lab-frame energies, which disambiguate what a bare number passed to
//! [`fixed_target()`](crate::kinematics::fixed_target) stands for

use crate::{
    error::{KinematicsError, Result},
    numeric::Float,
};
use std::str::FromStr;

/// Lab-frame projectile energy specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixedTargetEnergy {
    /// Total projectile energy (GeV)
    TotalEnergy(Float),

    /// Kinetic projectile energy (GeV)
    KinEnergy(Float),

    /// Projectile momentum (GeV)
    Momentum(Float),
}
//
impl FixedTargetEnergy {
    /// Underlying number, whatever it stands for
    pub fn value(self) -> Float {
        match self {
            Self::TotalEnergy(x) | Self::KinEnergy(x) | Self::Momentum(x) => x,
        }
    }
}

/// Bare numbers are total energies
impl From<Float> for FixedTargetEnergy {
    fn from(energy: Float) -> Self {
        Self::TotalEnergy(energy)
    }
}

/// Parse "elab=X", "ekin=X", "plab=X" or a bare number
impl FromStr for FixedTargetEnergy {
    type Err = KinematicsError;

    fn from_str(s: &str) -> Result<Self> {
        let (tag, value) = match s.split_once('=') {
            Some((tag, value)) => (Some(tag.trim()), value.trim()),
            None => (None, s.trim()),
        };
        let value = value.parse::<Float>().map_err(|_| {
            KinematicsError::invalid(format!("{s:?} is not a fixed-target energy"))
        })?;
        match tag {
            None | Some("elab") => Ok(Self::TotalEnergy(value)),
            Some("ekin") => Ok(Self::KinEnergy(value)),
            Some("plab") => Ok(Self::Momentum(value)),
            Some(other) => Err(KinematicsError::invalid(format!(
                "{other:?} is neither of elab, ekin, plab"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers_are_total_energies() {
        assert_eq!(
            FixedTargetEnergy::from(100.),
            FixedTargetEnergy::TotalEnergy(100.)
        );
        assert_eq!("100".parse(), Ok(FixedTargetEnergy::TotalEnergy(100.)));
    }

    #[test]
    fn tagged_strings() {
        assert_eq!("ekin=5".parse(), Ok(FixedTargetEnergy::KinEnergy(5.)));
        assert_eq!("plab = 7.5".parse(), Ok(FixedTargetEnergy::Momentum(7.5)));
        assert_eq!("elab=1e3".parse(), Ok(FixedTargetEnergy::TotalEnergy(1e3)));
        assert_eq!(FixedTargetEnergy::KinEnergy(3.).value(), 3.);
    }

    #[test]
    fn unrecognized_forms_are_rejected() {
        for input in ["ecm=100", "ten", "plab=", ""] {
            let res = input.parse::<FixedTargetEnergy>();
            assert!(
                matches!(res, Err(KinematicsError::InvalidSpecification(_))),
                "{input:?} was accepted"
            );
        }
    }
}
