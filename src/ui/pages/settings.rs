use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::AppState,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version,
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let live_estimate = state.with(|st| st.settings.live_estimate);

    // Update checks run through a resource keyed off a request counter, so the
    // network call happens outside the event handler.
    let check_requested = use_signal(|| 0u32);
    let update_status = use_signal(|| None::<String>);
    let _update_check = use_resource({
        let check_requested = check_requested.clone();
        let mut update_status = update_status.clone();
        move || async move {
            if check_requested() == 0 {
                return;
            }
            update_status.set(Some("Checking for updates...".to_string()));
            let message = match version::check_for_update().await {
                Ok(info) => info.to_string(),
                Err(err) => format!("Update check failed: {err}"),
            };
            update_status.set(Some(message));
        }
    });

    let on_toggle_live = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let enabled = state.with_mut(|st| {
                st.settings.live_estimate = !st.settings.live_estimate;
                st.settings.live_estimate
            });
            persist_user_state(&state);
            let message = if enabled {
                "Live estimate enabled; the damage step now recalculates as you type."
            } else {
                "Live estimate disabled; use the Calculate button."
            };
            push_toast(toasts.clone(), ToastKind::Success, message);
        }
    };

    let on_reset_form = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.reset_form());
            push_toast(toasts.clone(), ToastKind::Info, "Cleared the form and current estimate.");
        }
    };

    let on_check_updates = {
        let mut check_requested = check_requested.clone();
        move |_| {
            check_requested.set(check_requested() + 1);
        }
    };

    let status_line = update_status();

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Estimator Behavior" }
                label {
                    class: "mt-4 flex cursor-pointer items-center gap-3",
                    input {
                        r#type: "checkbox",
                        class: "h-4 w-4 cursor-pointer accent-indigo-500",
                        checked: live_estimate,
                        onclick: on_toggle_live,
                    }
                    div {
                        p { class: "text-sm {theme::text_secondary()}", "Live estimate" }
                        p { class: "text-xs {theme::text_muted()}",
                            "Recalculate continuously on the damage step once all inputs are present, instead of waiting for Calculate."
                        }
                    }
                }
            }

            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Data Controls" }
                p { class: "mt-2 text-sm {theme::text_muted()}",
                    "Estimates live only in this session; nothing about a calculation is written to disk."
                }
                button {
                    class: "{theme::btn_danger_outline()} mt-4",
                    onclick: on_reset_form,
                    "Clear Form & Estimate"
                }
            }

            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Updates" }
                p { class: "mt-2 text-sm {theme::text_secondary()}",
                    "{version::APP_NAME} {version::version_label()}"
                }
                if let Some(status) = status_line {
                    p { class: "mt-2 text-xs {theme::text_muted()}", "{status}" }
                }
                button {
                    class: "{theme::btn_secondary()} mt-4 text-xs uppercase tracking-wide",
                    onclick: on_check_updates,
                    "Check for Updates"
                }
            }

            section {
                class: "{theme::panel_border()} p-6 text-sm {theme::text_muted()}",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About the 17c Formula" }
                p { class: "mt-2",
                    "The 17c heuristic caps diminished value at 10% of the pre-accident market "
                    "value, then discounts by damage severity and odometer mileage. Look up the "
                    "pre-accident value on "
                    a { href: "https://www.kbb.com", target: "_blank", rel: "noreferrer", class: "{theme::link_class()}", "KBB" }
                    " or "
                    a { href: "https://www.nada.com", target: "_blank", rel: "noreferrer", class: "{theme::link_class()}", "NADA" }
                    "; this app never fetches pricing data itself."
                }
                p { class: "mt-3 text-xs",
                    "Estimates are informational and not legal or financial advice."
                }
            }
        }
    }
}
