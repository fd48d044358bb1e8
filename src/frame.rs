//! Reference frames in which collision events can be specified or generated

use std::{fmt, str::FromStr};

/// Reference frame of a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFrame {
    /// Frame where the total 3-momentum of the colliding nucleons vanishes
    CenterOfMass,

    /// Frame where the target is at rest ("laboratory" frame)
    FixedTarget,

    /// Arbitrary frame given by explicit beam momenta
    Generic,
}

impl fmt::Display for EventFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CenterOfMass => "center-of-mass frame",
            Self::FixedTarget => "fixed-target frame",
            Self::Generic => "generic frame",
        })
    }
}

/// Error returned when parsing an unknown frame name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event frame {0:?}")]
pub struct ParseEventFrameError(String);

impl FromStr for EventFrame {
    type Err = ParseEventFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cms" | "cm" | "center-of-mass" | "center_of_mass" => Ok(Self::CenterOfMass),
            "lab" | "fixed-target" | "fixed_target" => Ok(Self::FixedTarget),
            "generic" => Ok(Self::Generic),
            _ => Err(ParseEventFrameError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_names() {
        assert_eq!("CMS".parse(), Ok(EventFrame::CenterOfMass));
        assert_eq!("fixed_target".parse(), Ok(EventFrame::FixedTarget));
        assert_eq!("lab".parse(), Ok(EventFrame::FixedTarget));
        assert_eq!("generic".parse(), Ok(EventFrame::Generic));
        assert!("breit".parse::<EventFrame>().is_err());
    }
}
