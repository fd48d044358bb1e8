//! Energy units and reference masses
//!
//! All energies, momenta and masses handled by this crate are expressed in
//! GeV. Multiply by one of the unit constants to convert, e.g. `13.6 * TEV`.

use crate::numeric::Float;

/// One MeV, in GeV
pub const MEV: Float = 1e-3;

/// One GeV
pub const GEV: Float = 1.;

/// One TeV, in GeV
pub const TEV: Float = 1e3;

/// One PeV, in GeV
pub const PEV: Float = 1e6;

/// One EeV, in GeV
pub const EEV: Float = 1e9;

/// Proton mass (GeV)
pub const PROTON_MASS: Float = 0.938_272_088_16;

/// Neutron mass (GeV)
pub const NEUTRON_MASS: Float = 0.939_565_420_52;

/// Nucleon mass used for per-nucleon kinematics of nuclei (GeV)
pub const NUCLEON_MASS: Float = 0.5 * (PROTON_MASS + NEUTRON_MASS);

/// Parse an energy unit suffix, as found in collision cards
pub fn parse_unit(unit: &str) -> Option<Float> {
    match unit.to_lowercase().as_str() {
        "mev" => Some(MEV),
        "gev" => Some(GEV),
        "tev" => Some(TEV),
        "pev" => Some(PEV),
        "eev" => Some(EEV),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleon_mass_lies_between_proton_and_neutron() {
        assert!(PROTON_MASS < NUCLEON_MASS && NUCLEON_MASS < NEUTRON_MASS);
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(parse_unit("TeV"), Some(TEV));
        assert_eq!(parse_unit("mev"), Some(MEV));
        assert_eq!(parse_unit("keV"), None);
    }
}
