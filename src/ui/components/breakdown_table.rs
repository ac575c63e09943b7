use dioxus::prelude::*;

use crate::domain::ValuationResult;
use crate::ui::theme;
use crate::util::format_usd;

struct BreakdownRow {
    term: &'static str,
    display: String,
}

fn breakdown_rows(result: &ValuationResult) -> Vec<BreakdownRow> {
    let breakdown = &result.breakdown;
    vec![
        BreakdownRow {
            term: "Pre-Accident Value",
            display: format_usd(breakdown.base_value),
        },
        BreakdownRow {
            term: "10% Cap",
            display: format_usd(breakdown.ten_percent_cap),
        },
        BreakdownRow {
            term: "Damage Multiplier",
            display: format!("{}", breakdown.damage_multiplier),
        },
        BreakdownRow {
            term: "Mileage Multiplier",
            display: format!("{}", breakdown.mileage_multiplier),
        },
    ]
}

/// The four-term calculation audit trail shown with every estimate.
#[component]
pub fn BreakdownTable(result: ValuationResult) -> Element {
    let rows = breakdown_rows(&result);
    let total = format_usd(result.diminished_value as f64);

    rsx! {
        div {
            class: "{theme::table_container()}",
            table {
                class: "min-w-full {theme::table_divider()} text-sm",
                thead {
                    class: "{theme::table_header()} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Term" }
                        th { class: "px-4 py-3 text-right font-medium", "Value" }
                    }
                }
                tbody {
                    class: "{theme::table_divider()}",
                    for row in rows {
                        tr {
                            td { class: "px-4 py-3 {theme::text_muted()}", "{row.term}" }
                            td { class: "px-4 py-3 text-right font-medium {theme::text_secondary()}", "{row.display}" }
                        }
                    }
                    tr {
                        class: "border-t border-slate-700 font-semibold",
                        td { class: "px-4 py-3 text-slate-200", "Final Diminished Value" }
                        td { class: "px-4 py-3 text-right text-indigo-300", "{total}" }
                    }
                }
            }
        }
    }
}
