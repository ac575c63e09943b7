use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppState, WizardStep},
    ui::{components::StepProgress, theme},
};

/// Step 1: identify the vehicle and its pre-accident market value.
#[component]
pub fn VehiclePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let vehicle = state.with(|st| st.vehicle.clone());
    let base_value = state.with(|st| st.base_value_input.clone());
    let can_continue = state.with(|st| st.vehicle_step_complete());

    let on_year = {
        let mut state = state.clone();
        move |evt: FormEvent| state.with_mut(|st| st.vehicle.year = evt.value())
    };
    let on_make = {
        let mut state = state.clone();
        move |evt: FormEvent| state.with_mut(|st| st.vehicle.make = evt.value())
    };
    let on_model = {
        let mut state = state.clone();
        move |evt: FormEvent| state.with_mut(|st| st.vehicle.model = evt.value())
    };
    let on_base_value = {
        let mut state = state.clone();
        move |evt: FormEvent| state.with_mut(|st| st.base_value_input = evt.value())
    };

    rsx! {
        div { class: "space-y-6",
            StepProgress { current: WizardStep::Vehicle }

            section {
                class: "{theme::panel_border()} space-y-6 p-6",
                h2 { class: "text-2xl font-semibold", "Step 1: Vehicle Details" }

                div { class: "grid gap-4 sm:grid-cols-3",
                    div {
                        label { class: "{theme::label_class()}", "Year" }
                        input {
                            class: "{theme::input_class()}",
                            inputmode: "numeric",
                            value: vehicle.year.clone(),
                            oninput: on_year,
                            placeholder: "2020",
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Make" }
                        input {
                            class: "{theme::input_class()}",
                            value: vehicle.make.clone(),
                            oninput: on_make,
                            placeholder: "Toyota",
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Model" }
                        input {
                            class: "{theme::input_class()}",
                            value: vehicle.model.clone(),
                            oninput: on_model,
                            placeholder: "Camry",
                        }
                    }
                }

                div {
                    label { class: "{theme::label_class()}", "Pre-Accident Value (KBB/NADA Estimate)" }
                    div { class: "relative",
                        span { class: "absolute left-3 top-2.5 text-sm text-slate-500", "$" }
                        input {
                            class: "{theme::input_class()} pl-7",
                            inputmode: "decimal",
                            value: base_value,
                            oninput: on_base_value,
                            placeholder: "25000",
                        }
                    }
                    p { class: "mt-2 text-sm {theme::text_muted()}",
                        "Use "
                        a {
                            href: "https://www.kbb.com",
                            target: "_blank",
                            rel: "noreferrer",
                            class: "{theme::link_class()}",
                            "Kelley Blue Book"
                        }
                        " or "
                        a {
                            href: "https://www.nada.com",
                            target: "_blank",
                            rel: "noreferrer",
                            class: "{theme::link_class()}",
                            "NADA Guides"
                        }
                        " for an accurate valuation."
                    }
                }
            }

            button {
                class: "{theme::btn_primary()} w-full py-3",
                disabled: !can_continue,
                onclick: move |_| { nav.push(Route::Damage {}); },
                "Continue to Damage Assessment →"
            }
        }
    }
}
