use serde::{Deserialize, Serialize};

use super::entities::{DamageSeverity, ValuationResult, VehicleDetails};
use super::valuation::{evaluate_form, InputError};

/// Wizard position, mirrored by the progress bar and header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Vehicle,
    Damage,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Vehicle, WizardStep::Damage, WizardStep::Results];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Vehicle => 0,
            WizardStep::Damage => 1,
            WizardStep::Results => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Vehicle => "Vehicle Details",
            WizardStep::Damage => "Damage Assessment",
            WizardStep::Results => "Results",
        }
    }
}

/// Behavior toggles kept across restarts. Calculations themselves are never
/// persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    /// Recompute the estimate on every keystroke once inputs are complete,
    /// instead of waiting for an explicit Calculate.
    #[serde(default)]
    pub live_estimate: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub vehicle: VehicleDetails,
    /// Raw form text; parsed only when an estimate runs.
    pub base_value_input: String,
    pub severity: DamageSeverity,
    pub mileage_input: String,
    /// Most recent successful estimate. A failed recalculation leaves the
    /// previous result in place.
    pub result: Option<ValuationResult>,
    pub settings: EstimatorSettings,
}

impl AppState {
    /// Step 1 gate: all vehicle fields plus a base value entered. Presence
    /// only; numeric validity is checked when the estimate runs.
    pub fn vehicle_step_complete(&self) -> bool {
        self.vehicle.is_complete() && !self.base_value_input.trim().is_empty()
    }

    /// Step 2 gate: mileage entered.
    pub fn damage_step_complete(&self) -> bool {
        !self.mileage_input.trim().is_empty()
    }

    /// Runs the formula over the current form fields and stores the result.
    pub fn recalculate(&mut self) -> Result<ValuationResult, InputError> {
        let result = evaluate_form(&self.base_value_input, self.severity, &self.mileage_input)?;
        self.result = Some(result);
        Ok(result)
    }

    /// Clears the form for the next vehicle, keeping settings.
    pub fn reset_form(&mut self) {
        self.vehicle = VehicleDetails::default();
        self.base_value_input.clear();
        self.severity = DamageSeverity::default();
        self.mileage_input.clear();
        self.result = None;
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.settings = persisted.settings;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            settings: self.settings,
        }
    }
}

/// The serialized subset of [`AppState`] written to disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub settings: EstimatorSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DamageSeverity;

    fn filled_state() -> AppState {
        AppState {
            vehicle: VehicleDetails {
                year: "2020".to_string(),
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
            },
            base_value_input: "25000".to_string(),
            severity: DamageSeverity::Moderate,
            mileage_input: "45000".to_string(),
            ..AppState::default()
        }
    }

    #[test]
    fn step_gates_track_field_presence() {
        let mut state = AppState::default();
        assert!(!state.vehicle_step_complete());
        assert!(!state.damage_step_complete());

        state = filled_state();
        assert!(state.vehicle_step_complete());
        assert!(state.damage_step_complete());

        state.base_value_input = "  ".to_string();
        assert!(!state.vehicle_step_complete());
    }

    #[test]
    fn recalculate_stores_the_result() {
        let mut state = filled_state();
        let result = state.recalculate().expect("complete form should evaluate");
        assert_eq!(result.diminished_value, 750);
        assert_eq!(state.result, Some(result));
    }

    #[test]
    fn failed_recalculate_keeps_the_previous_result() {
        let mut state = filled_state();
        state.recalculate().expect("complete form should evaluate");
        let previous = state.result;

        state.mileage_input = "unknown".to_string();
        assert!(state.recalculate().is_err());
        assert_eq!(state.result, previous);
    }

    #[test]
    fn reset_clears_the_form_but_not_settings() {
        let mut state = filled_state();
        state.settings.live_estimate = true;
        state.recalculate().expect("complete form should evaluate");

        state.reset_form();
        assert_eq!(state.vehicle, VehicleDetails::default());
        assert!(state.base_value_input.is_empty());
        assert_eq!(state.severity, DamageSeverity::Moderate);
        assert!(state.result.is_none());
        assert!(state.settings.live_estimate);
    }

    #[test]
    fn persisted_state_round_trips_settings_only() {
        let mut state = filled_state();
        state.settings.live_estimate = true;
        let json = serde_json::to_string(&state.to_persisted()).expect("serializable");
        assert!(!json.contains("25000"), "inputs must not be persisted");

        let mut restored = AppState::default();
        restored.apply_persisted(serde_json::from_str(&json).expect("deserializable"));
        assert!(restored.settings.live_estimate);
        assert!(restored.base_value_input.is_empty());
    }
}
