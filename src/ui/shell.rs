use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    // Later wizard steps stay locked until earlier ones are filled in.
    let damage_unlocked = state.with(|st| st.vehicle_step_complete());
    let results_unlocked = state.with(|st| st.result.is_some());

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-4xl items-center justify-between gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight", "{version::APP_NAME}" }
                        p { class: "text-xs italic text-slate-500", "17c estimates without the adjuster math" }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Vehicle {}),
                            disabled: false,
                            onclick: move |_| { nav.push(Route::Vehicle {}); },
                            label: "Vehicle",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Damage {}),
                            disabled: !damage_unlocked,
                            onclick: move |_| { nav.push(Route::Damage {}); },
                            label: "Damage",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Results {}),
                            disabled: !results_unlocked,
                            onclick: move |_| { nav.push(Route::Results {}); },
                            label: "Results",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            disabled: false,
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-4xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    disabled: bool,
    onclick: EventHandler<()>,
    label: &'static str,
) -> Element {
    let class = if disabled {
        "min-w-[5.5rem] cursor-not-allowed rounded-lg border border-slate-900 px-4 py-2 text-slate-700"
    } else if active {
        "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            disabled: disabled,
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
