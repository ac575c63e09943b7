//! Domain logic for diminished-value estimation lives here.

pub mod app_state;
pub mod entities;
pub mod valuation;

#[allow(unused_imports)]
pub use app_state::{AppState, EstimatorSettings, PersistedState, WizardStep};
#[allow(unused_imports)]
pub use entities::{
    DamageSeverity, MileageBand, ValuationBreakdown, ValuationInput, ValuationResult,
    VehicleDetails,
};
#[allow(unused_imports)]
pub use valuation::{
    estimate, evaluate_form, mileage_band, mileage_multiplier, parse_amount, InputError,
    MILEAGE_BANDS,
};
