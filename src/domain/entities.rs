use serde::{Deserialize, Serialize};

/// Structural damage severity as assessed on the claim, ordered worst first.
///
/// The variant is the selection key; its multiplier is looked up when the
/// estimate runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageSeverity {
    SevereStructural,
    Major,
    #[default]
    Moderate,
    Minor,
    NoStructural,
}

impl DamageSeverity {
    /// Every severity level, worst first. Matches dropdown order.
    pub const ALL: [DamageSeverity; 5] = [
        DamageSeverity::SevereStructural,
        DamageSeverity::Major,
        DamageSeverity::Moderate,
        DamageSeverity::Minor,
        DamageSeverity::NoStructural,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DamageSeverity::SevereStructural => "Severe Structural Damage",
            DamageSeverity::Major => "Major Damage (Frame/Airbag)",
            DamageSeverity::Moderate => "Moderate Damage",
            DamageSeverity::Minor => "Minor Damage",
            DamageSeverity::NoStructural => "No Structural Damage",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DamageSeverity::SevereStructural => {
                "Frame or unibody compromised; vehicle needed major structural repair."
            }
            DamageSeverity::Major => {
                "Frame involvement or airbag deployment with significant panel work."
            }
            DamageSeverity::Moderate => "Repaired body and panel damage without frame involvement.",
            DamageSeverity::Minor => "Cosmetic repairs only; no structural components touched.",
            DamageSeverity::NoStructural => "Disclosed accident with no structural repair at all.",
        }
    }

    /// Damage modifier applied against the 10% cap, in [0, 1].
    pub fn multiplier(&self) -> f64 {
        match self {
            DamageSeverity::SevereStructural => 1.0,
            DamageSeverity::Major => 0.75,
            DamageSeverity::Moderate => 0.5,
            DamageSeverity::Minor => 0.25,
            DamageSeverity::NoStructural => 0.0,
        }
    }

    /// Stable identifier for form `<select>` values.
    pub fn key(&self) -> &'static str {
        match self {
            DamageSeverity::SevereStructural => "severe",
            DamageSeverity::Major => "major",
            DamageSeverity::Moderate => "moderate",
            DamageSeverity::Minor => "minor",
            DamageSeverity::NoStructural => "none",
        }
    }

    pub fn from_key(key: &str) -> Option<DamageSeverity> {
        DamageSeverity::ALL
            .into_iter()
            .find(|severity| severity.key() == key)
    }
}

/// One row of the fixed mileage discount table. Bands are inclusive on both
/// ends; the last band is open-ended via `f64::INFINITY`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MileageBand {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub multiplier: f64,
}

impl MileageBand {
    pub fn contains(&self, mileage: f64) -> bool {
        mileage >= self.min && mileage <= self.max
    }
}

/// Inputs to a single estimate. Built fresh by the UI for every calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuationInput {
    pub pre_accident_value: f64,
    pub severity: DamageSeverity,
    pub mileage: f64,
}

/// The four pre-rounding terms behind an estimate, kept for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuationBreakdown {
    pub base_value: f64,
    pub ten_percent_cap: f64,
    pub damage_multiplier: f64,
    pub mileage_multiplier: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuationResult {
    /// Final estimate in whole dollars.
    pub diminished_value: u64,
    pub breakdown: ValuationBreakdown,
}

/// Vehicle identification captured on step 1. Display context only; the
/// formula never reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleDetails {
    pub year: String,
    pub make: String,
    pub model: String,
}

impl VehicleDetails {
    pub fn is_complete(&self) -> bool {
        !self.year.trim().is_empty()
            && !self.make.trim().is_empty()
            && !self.model.trim().is_empty()
    }

    pub fn display_name(&self) -> String {
        [&self.year, &self.make, &self.model]
            .iter()
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_multipliers_match_the_17c_table() {
        let expected = [1.0, 0.75, 0.5, 0.25, 0.0];
        for (severity, multiplier) in DamageSeverity::ALL.iter().zip(expected) {
            assert_eq!(severity.multiplier(), multiplier, "{}", severity.label());
        }
    }

    #[test]
    fn severity_keys_round_trip() {
        for severity in DamageSeverity::ALL {
            assert_eq!(DamageSeverity::from_key(severity.key()), Some(severity));
        }
        assert_eq!(DamageSeverity::from_key("totaled"), None);
    }

    #[test]
    fn default_severity_is_moderate() {
        assert_eq!(DamageSeverity::default(), DamageSeverity::Moderate);
    }

    #[test]
    fn vehicle_details_completeness_ignores_whitespace() {
        let mut vehicle = VehicleDetails {
            year: "2020".to_string(),
            make: "Toyota".to_string(),
            model: "   ".to_string(),
        };
        assert!(!vehicle.is_complete());
        vehicle.model = "Camry".to_string();
        assert!(vehicle.is_complete());
        assert_eq!(vehicle.display_name(), "2020 Toyota Camry");
    }
}
