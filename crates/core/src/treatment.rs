//! The fixed treatment catalogue.
//!
//! Thirteen skin conditions, each with an immutable base price. The catalogue
//! is compiled in and recreated identically every run; it is never persisted.
//! The textual identifiers are embedded in the records file, so both the
//! spelling and the declaration order (which drives the menu numbering) are
//! part of the on-disk and console contracts.

use std::fmt;
use std::str::FromStr;

use crate::error::ClinicError;

/// A treatable skin condition with a fixed base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treatment {
    Acne,
    Psoriasis,
    Eczema,
    Rosacea,
    Melasma,
    Vitiligo,
    Dermatitis,
    /// Identifier is truncated in the on-disk format; kept verbatim.
    Hyperpigmentatio,
    Urticaria,
    Warts,
    FungalInfection,
    AllergicReactions,
    SkinCancer,
}

impl Treatment {
    /// Every treatment in catalogue order. Position + 1 is the menu number.
    pub const ALL: [Treatment; 13] = [
        Treatment::Acne,
        Treatment::Psoriasis,
        Treatment::Eczema,
        Treatment::Rosacea,
        Treatment::Melasma,
        Treatment::Vitiligo,
        Treatment::Dermatitis,
        Treatment::Hyperpigmentatio,
        Treatment::Urticaria,
        Treatment::Warts,
        Treatment::FungalInfection,
        Treatment::AllergicReactions,
        Treatment::SkinCancer,
    ];

    /// Returns the fixed base price for this treatment.
    pub fn price(&self) -> f64 {
        match self {
            Treatment::Acne => 2500.0,
            Treatment::Psoriasis => 1500.0,
            Treatment::Eczema => 1950.0,
            Treatment::Rosacea => 1500.0,
            Treatment::Melasma => 2550.0,
            Treatment::Vitiligo => 1500.0,
            Treatment::Dermatitis => 1200.0,
            Treatment::Hyperpigmentatio => 2500.0,
            Treatment::Urticaria => 1100.0,
            Treatment::Warts => 3500.0,
            Treatment::FungalInfection => 3450.0,
            Treatment::AllergicReactions => 2000.0,
            Treatment::SkinCancer => 20000.0,
        }
    }

    /// Returns the textual identifier written to the records file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Treatment::Acne => "ACNE",
            Treatment::Psoriasis => "PSORIASIS",
            Treatment::Eczema => "ECZEMA",
            Treatment::Rosacea => "ROSACEA",
            Treatment::Melasma => "MELASMA",
            Treatment::Vitiligo => "VITILIGO",
            Treatment::Dermatitis => "DERMATITIS",
            Treatment::Hyperpigmentatio => "HYPERPIGMENTATIO",
            Treatment::Urticaria => "URTICARIA",
            Treatment::Warts => "WARTS",
            Treatment::FungalInfection => "FUNGAL_INFECTION",
            Treatment::AllergicReactions => "ALLERGIC_REACTIONS",
            Treatment::SkinCancer => "SKIN_CANCER",
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Treatment {
    type Err = ClinicError;

    /// Parses a textual identifier from the records file.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::UnknownTreatment` when the identifier is not in
    /// the catalogue. Identifiers are matched exactly; the catalogue is a
    /// closed set, so anything else in a persisted row is a data error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Treatment::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| ClinicError::UnknownTreatment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_thirteen_treatments_in_menu_order() {
        assert_eq!(Treatment::ALL.len(), 13);
        assert_eq!(Treatment::ALL[0], Treatment::Acne);
        assert_eq!(Treatment::ALL[7], Treatment::Hyperpigmentatio);
        assert_eq!(Treatment::ALL[12], Treatment::SkinCancer);
    }

    #[test]
    fn prices_match_the_catalogue() {
        assert_eq!(Treatment::Acne.price(), 2500.0);
        assert_eq!(Treatment::Dermatitis.price(), 1200.0);
        assert_eq!(Treatment::Urticaria.price(), 1100.0);
        assert_eq!(Treatment::Warts.price(), 3500.0);
        assert_eq!(Treatment::SkinCancer.price(), 20000.0);
    }

    #[test]
    fn wire_identifiers_parse_back_to_the_same_treatment() {
        for treatment in Treatment::ALL {
            let parsed: Treatment = treatment.as_str().parse().expect("catalogue identifier");
            assert_eq!(parsed, treatment);
        }
    }

    #[test]
    fn truncated_identifier_is_the_contract() {
        assert_eq!(Treatment::Hyperpigmentatio.as_str(), "HYPERPIGMENTATIO");
        assert!("HYPERPIGMENTATIO".parse::<Treatment>().is_ok());
        assert!(matches!(
            "HYPERPIGMENTATION".parse::<Treatment>(),
            Err(ClinicError::UnknownTreatment(_))
        ));
    }

    #[test]
    fn unknown_identifier_is_a_distinct_error_kind() {
        let err = "LASER_PEEL".parse::<Treatment>().expect_err("not in catalogue");
        match err {
            ClinicError::UnknownTreatment(name) => assert_eq!(name, "LASER_PEEL"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
