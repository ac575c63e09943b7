//! The 17c diminished-value formula.
//!
//! Everything here is a pure function over the entity types: 10% of the
//! pre-accident value, discounted by a damage multiplier and a mileage
//! multiplier, rounded to whole dollars. The string-input boundary
//! (`evaluate_form`) is the only fallible surface.

use thiserror::Error;

use super::entities::{
    DamageSeverity, MileageBand, ValuationBreakdown, ValuationInput, ValuationResult,
};

/// Fixed mileage discount table. Exactly one band matches any non-negative
/// mileage; anything outside every band (negative, NaN) falls back to 0.0.
pub const MILEAGE_BANDS: [MileageBand; 6] = [
    MileageBand {
        label: "0 - 19,999 miles",
        min: 0.0,
        max: 19_999.0,
        multiplier: 1.0,
    },
    MileageBand {
        label: "20,000 - 39,999 miles",
        min: 20_000.0,
        max: 39_999.0,
        multiplier: 0.8,
    },
    MileageBand {
        label: "40,000 - 59,999 miles",
        min: 40_000.0,
        max: 59_999.0,
        multiplier: 0.6,
    },
    MileageBand {
        label: "60,000 - 79,999 miles",
        min: 60_000.0,
        max: 79_999.0,
        multiplier: 0.4,
    },
    MileageBand {
        label: "80,000 - 99,999 miles",
        min: 80_000.0,
        max: 99_999.0,
        multiplier: 0.2,
    },
    MileageBand {
        label: "100,000+ miles",
        min: 100_000.0,
        max: f64::INFINITY,
        multiplier: 0.0,
    },
];

/// Returns the first band containing `mileage`, if any.
pub fn mileage_band(mileage: f64) -> Option<&'static MileageBand> {
    MILEAGE_BANDS.iter().find(|band| band.contains(mileage))
}

/// Returns the multiplier of the first band containing `mileage`, 0.0 when
/// none does.
pub fn mileage_multiplier(mileage: f64) -> f64 {
    mileage_band(mileage)
        .map(|band| band.multiplier)
        .unwrap_or(0.0)
}

/// Runs the 17c formula over already-parsed inputs. Deterministic and
/// infallible: out-of-range mileage discounts to zero instead of erroring.
pub fn estimate(input: &ValuationInput) -> ValuationResult {
    let ten_percent_cap = input.pre_accident_value * 0.10;
    let damage_multiplier = input.severity.multiplier();
    let mileage_multiplier = mileage_multiplier(input.mileage);
    let raw = ten_percent_cap * damage_multiplier * mileage_multiplier;

    ValuationResult {
        // Ties round away from zero, same as the whole-dollar figures
        // adjusters quote.
        diminished_value: raw.round() as u64,
        breakdown: ValuationBreakdown {
            base_value: input.pre_accident_value,
            ten_percent_cap,
            damage_multiplier,
            mileage_multiplier,
        },
    }
}

/// Which form field failed numeric parsing. Missing and malformed are the
/// same condition at this boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Pre-accident value must be a number.")]
    PreAccidentValue,
    #[error("Mileage must be a number.")]
    Mileage,
}

/// String-input entry point for the form layer. Declines to produce a result
/// when either numeric field fails to parse; the severity comes from the
/// closed enum and needs no validation.
pub fn evaluate_form(
    pre_accident_value: &str,
    severity: DamageSeverity,
    mileage: &str,
) -> Result<ValuationResult, InputError> {
    let base = parse_amount(pre_accident_value).ok_or(InputError::PreAccidentValue)?;
    let miles = parse_amount(mileage).ok_or(InputError::Mileage)?;

    Ok(estimate(&ValuationInput {
        pre_accident_value: base,
        severity,
        mileage: miles,
    }))
}

/// Lenient numeric field parser: tolerates surrounding whitespace, a leading
/// dollar sign, and comma group separators, then requires the rest to be a
/// finite number. "NaN" and "inf" count as unparseable.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DamageSeverity;

    #[test]
    fn every_band_multiplier_comes_from_the_table() {
        for mileage in [0.0, 500.0, 19_999.0, 35_000.0, 50_000.0, 75_000.0, 99_999.0, 250_000.0] {
            let multiplier = mileage_multiplier(mileage);
            assert!(
                MILEAGE_BANDS.iter().any(|band| band.multiplier == multiplier),
                "unexpected multiplier {multiplier} for {mileage}"
            );
            assert_eq!(
                MILEAGE_BANDS
                    .iter()
                    .filter(|band| band.contains(mileage))
                    .count(),
                1,
                "bands must not overlap at {mileage}"
            );
        }
    }

    #[test]
    fn band_boundaries_are_exact() {
        assert_eq!(mileage_multiplier(19_999.0), 1.0);
        assert_eq!(mileage_multiplier(20_000.0), 0.8);
        assert_eq!(mileage_multiplier(39_999.0), 0.8);
        assert_eq!(mileage_multiplier(40_000.0), 0.6);
        assert_eq!(mileage_multiplier(59_999.0), 0.6);
        assert_eq!(mileage_multiplier(60_000.0), 0.4);
        assert_eq!(mileage_multiplier(79_999.0), 0.4);
        assert_eq!(mileage_multiplier(80_000.0), 0.2);
        assert_eq!(mileage_multiplier(99_999.0), 0.2);
        assert_eq!(mileage_multiplier(100_000.0), 0.0);
    }

    #[test]
    fn negative_mileage_falls_back_to_zero() {
        assert_eq!(mileage_multiplier(-1.0), 0.0);
        assert_eq!(mileage_multiplier(f64::NAN), 0.0);
    }

    #[test]
    fn worked_example_from_the_adjuster_table() {
        // $25,000 car, moderate damage, 45k miles: 2500 * 0.5 * 0.6 = 750.
        let result = estimate(&ValuationInput {
            pre_accident_value: 25_000.0,
            severity: DamageSeverity::Moderate,
            mileage: 45_000.0,
        });
        assert_eq!(result.diminished_value, 750);
        assert_eq!(result.breakdown.base_value, 25_000.0);
        assert_eq!(result.breakdown.ten_percent_cap, 2_500.0);
        assert_eq!(result.breakdown.damage_multiplier, 0.5);
        assert_eq!(result.breakdown.mileage_multiplier, 0.6);
    }

    #[test]
    fn no_structural_damage_zeroes_the_estimate() {
        for mileage in [0.0, 45_000.0, 200_000.0] {
            let result = estimate(&ValuationInput {
                pre_accident_value: 80_000.0,
                severity: DamageSeverity::NoStructural,
                mileage,
            });
            assert_eq!(result.diminished_value, 0);
        }
    }

    #[test]
    fn high_mileage_zeroes_the_estimate() {
        let result = estimate(&ValuationInput {
            pre_accident_value: 90_000.0,
            severity: DamageSeverity::SevereStructural,
            mileage: 100_000.0,
        });
        assert_eq!(result.diminished_value, 0);
        assert_eq!(result.breakdown.mileage_multiplier, 0.0);
    }

    #[test]
    fn half_dollars_round_away_from_zero() {
        // 10,010 * 0.10 * 0.75 = 750.75 -> cap keeps cents, final rounds.
        let result = estimate(&ValuationInput {
            pre_accident_value: 10_010.0,
            severity: DamageSeverity::Major,
            mileage: 10_000.0,
        });
        assert_eq!(result.diminished_value, 751);

        // 15,010 * 0.10 * 0.5 = 750.5 exactly.
        let tie = estimate(&ValuationInput {
            pre_accident_value: 15_010.0,
            severity: DamageSeverity::Moderate,
            mileage: 5_000.0,
        });
        assert_eq!(tie.breakdown.ten_percent_cap, 1_501.0);
        assert_eq!(tie.diminished_value, 751);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let input = ValuationInput {
            pre_accident_value: 31_450.0,
            severity: DamageSeverity::Minor,
            mileage: 62_300.0,
        };
        assert_eq!(estimate(&input), estimate(&input));
    }

    #[test]
    fn form_evaluation_accepts_formatted_numbers() {
        let result = evaluate_form("$25,000", DamageSeverity::Moderate, " 45000 ")
            .expect("formatted input should parse");
        assert_eq!(result.diminished_value, 750);
    }

    #[test]
    fn form_evaluation_tags_the_failing_field() {
        assert_eq!(
            evaluate_form("", DamageSeverity::Moderate, "45000"),
            Err(InputError::PreAccidentValue)
        );
        assert_eq!(
            evaluate_form("25000", DamageSeverity::Moderate, "lots"),
            Err(InputError::Mileage)
        );
        // A literal NaN must be rejected, never surfaced in a breakdown.
        assert_eq!(
            evaluate_form("NaN", DamageSeverity::Moderate, "45000"),
            Err(InputError::PreAccidentValue)
        );
    }

    #[test]
    fn parse_amount_requires_the_whole_field_to_be_numeric() {
        assert_eq!(parse_amount("25000"), Some(25_000.0));
        assert_eq!(parse_amount("$1,234.5"), Some(1_234.5));
        assert_eq!(parse_amount("25000 miles"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("   "), None);
    }
}
