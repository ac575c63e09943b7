use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{evaluate_form, mileage_band, parse_amount, AppState, DamageSeverity, WizardStep},
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            SeverityBadge, StepProgress,
        },
        theme,
    },
    util::format_usd,
};

/// Step 2: damage severity and mileage, then run the estimate.
#[component]
pub fn DamagePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let severity = state.with(|st| st.severity);
    let mileage_input = state.with(|st| st.mileage_input.clone());
    let base_value_input = state.with(|st| st.base_value_input.clone());
    let live_estimate = state.with(|st| st.settings.live_estimate);
    let can_calculate = state.with(|st| st.damage_step_complete());

    // Empty mileage previews as 0 miles, same as the form placeholder.
    let hint_band = mileage_band(parse_amount(&mileage_input).unwrap_or(0.0));
    let band_hint = match hint_band {
        Some(band) => format!("Mileage multiplier: {} ({})", band.multiplier, band.label),
        None => "Mileage multiplier: 0 (outside every band)".to_string(),
    };
    let live_result = live_estimate
        .then(|| evaluate_form(&base_value_input, severity, &mileage_input).ok())
        .flatten();

    let on_severity = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            if let Some(selected) = DamageSeverity::from_key(&evt.value()) {
                state.with_mut(|st| st.severity = selected);
            }
        }
    };

    let on_mileage = {
        let mut state = state.clone();
        move |evt: FormEvent| state.with_mut(|st| st.mileage_input = evt.value())
    };

    let on_calculate = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            match state.with_mut(|st| st.recalculate()) {
                Ok(_) => {
                    nav.push(Route::Results {});
                }
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            StepProgress { current: WizardStep::Damage }

            section {
                class: "{theme::panel_border()} space-y-6 p-6",
                h2 { class: "text-2xl font-semibold", "Step 2: Damage Assessment" }

                div {
                    div { class: "flex items-center justify-between",
                        label { class: "{theme::label_class()}", "Damage Severity" }
                        SeverityBadge { severity: severity }
                    }
                    select {
                        class: "{theme::select_class()}",
                        value: severity.key(),
                        onchange: on_severity,
                        for option in DamageSeverity::ALL {
                            option {
                                value: option.key(),
                                selected: option == severity,
                                "{option.label()} (Multiplier: {option.multiplier()})"
                            }
                        }
                    }
                    p { class: "mt-2 text-sm {theme::text_muted()}", "{severity.description()}" }
                }

                div {
                    label { class: "{theme::label_class()}", "Current Mileage" }
                    input {
                        class: "{theme::input_class()}",
                        inputmode: "decimal",
                        value: mileage_input,
                        oninput: on_mileage,
                        placeholder: "45000",
                    }
                    p { class: "mt-2 text-sm {theme::text_muted()}", "{band_hint}" }
                }

                if let Some(result) = live_result {
                    div {
                        class: "{theme::panel_highlight()} p-4",
                        p { class: "{theme::label_class()}", "Live Estimate" }
                        p { class: "mt-1 text-3xl font-bold text-indigo-300",
                            {format_usd(result.diminished_value as f64)}
                        }
                    }
                }
            }

            div { class: "flex gap-4",
                button {
                    class: "{theme::btn_secondary()} flex-1 py-3",
                    onclick: move |_| { nav.push(Route::Vehicle {}); },
                    "← Back"
                }
                button {
                    class: "{theme::btn_primary()} flex-1 py-3",
                    disabled: !can_calculate,
                    onclick: on_calculate,
                    "Calculate My Value"
                }
            }

            div {
                class: "{theme::panel_warning()}",
                p { class: "text-sm {theme::text_secondary()}",
                    strong { "Disclaimer: " }
                    "This calculator provides an estimate based on the 17c formula commonly "
                    "used by insurance adjusters. Results are informational only and do not "
                    "constitute legal or financial advice. Actual diminished value may vary; "
                    "consult a qualified appraiser for a formal valuation."
                }
            }
        }
    }
}
