pub mod breakdown_table;
pub mod kpi_card;
pub mod severity_badge;
pub mod step_progress;
pub mod toast;

pub use breakdown_table::BreakdownTable;
pub use kpi_card::KpiCard;
pub use severity_badge::SeverityBadge;
pub use step_progress::StepProgress;
