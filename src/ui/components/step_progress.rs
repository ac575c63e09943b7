use dioxus::prelude::*;

use crate::domain::WizardStep;

struct Segment {
    bar_class: &'static str,
    caption_class: &'static str,
    caption: String,
}

/// The three-segment bar above wizard pages. Segments up to and including the
/// current step are filled.
#[component]
pub fn StepProgress(current: WizardStep) -> Element {
    let segments: Vec<Segment> = WizardStep::ALL
        .into_iter()
        .map(|step| Segment {
            bar_class: if step.index() <= current.index() {
                "progress-segment mx-1 h-2 flex-1 rounded bg-indigo-500"
            } else {
                "progress-segment mx-1 h-2 flex-1 rounded bg-slate-800"
            },
            caption_class: if step == current {
                "mx-1 flex-1 text-center font-semibold text-indigo-300"
            } else {
                "mx-1 flex-1 text-center"
            },
            caption: format!("Step {}: {}", step.index() + 1, step.title()),
        })
        .collect();

    rsx! {
        div {
            class: "mb-8",
            div { class: "flex justify-between",
                for segment in segments.iter() {
                    div { class: "{segment.bar_class}" }
                }
            }
            div { class: "mt-2 flex justify-between text-xs text-slate-500",
                for segment in segments.iter() {
                    span { class: "{segment.caption_class}", "{segment.caption}" }
                }
            }
        }
    }
}
