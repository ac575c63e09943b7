use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppState, WizardStep},
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            BreakdownTable, KpiCard, StepProgress,
        },
        theme,
    },
    util::format_usd,
};

/// Step 3: the estimate, its audit trail, and the way back to a fresh form.
#[component]
pub fn ResultsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let result = state.with(|st| st.result);
    let vehicle_name = state.with(|st| st.vehicle.display_name());

    let Some(result) = result else {
        // Nothing calculated yet; the engine contract leaves this view to us.
        return rsx! {
            div { class: "space-y-6",
                StepProgress { current: WizardStep::Results }
                section {
                    class: "{theme::panel_border()} p-10 text-center",
                    h2 { class: "text-2xl font-semibold", "No estimate yet" }
                    p { class: "mt-2 text-sm {theme::text_muted()}",
                        "Complete the vehicle and damage steps to see your diminished value."
                    }
                    button {
                        class: "{theme::btn_primary()} mt-6 px-6 py-3",
                        onclick: move |_| { nav.push(Route::Vehicle {}); },
                        "Start with Vehicle Details"
                    }
                }
            }
        };
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.reset_form());
            push_toast(toasts.clone(), ToastKind::Info, "Form cleared for the next vehicle.");
            nav.push(Route::Vehicle {});
        }
    };

    rsx! {
        div { class: "space-y-6",
            StepProgress { current: WizardStep::Results }

            section {
                class: "{theme::panel_highlight()} p-8 text-center",
                if !vehicle_name.is_empty() {
                    p { class: "text-sm {theme::text_muted()}", "{vehicle_name}" }
                }
                p { class: "mt-1 {theme::text_muted()}", "Estimated Claim Amount" }
                p { class: "headline-value mt-2 text-5xl font-bold text-indigo-300",
                    {format_usd(result.diminished_value as f64)}
                }
            }

            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "10% Cap".to_string(),
                    value: format_usd(result.breakdown.ten_percent_cap),
                    description: Some("Maximum recoverable under 17c".to_string()),
                }
                KpiCard {
                    title: "Damage Multiplier".to_string(),
                    value: format!("{}", result.breakdown.damage_multiplier),
                    description: Some("From the assessed severity".to_string()),
                }
                KpiCard {
                    title: "Mileage Multiplier".to_string(),
                    value: format!("{}", result.breakdown.mileage_multiplier),
                    description: Some("From the odometer band".to_string()),
                }
            }

            section {
                class: "space-y-3",
                h3 { class: "text-sm font-semibold text-slate-200", "Calculation Breakdown" }
                BreakdownTable { result: result }
            }

            button {
                class: "{theme::btn_secondary()} w-full py-3",
                onclick: on_reset,
                "Calculate Another Vehicle"
            }
        }
    }
}
