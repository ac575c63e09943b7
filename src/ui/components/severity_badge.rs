use dioxus::prelude::*;

use crate::domain::DamageSeverity;

#[component]
pub fn SeverityBadge(severity: DamageSeverity) -> Element {
    let color = match severity {
        DamageSeverity::SevereStructural => "bg-rose-500/10 text-rose-300 border-rose-500/40",
        DamageSeverity::Major => "bg-orange-500/10 text-orange-300 border-orange-500/40",
        DamageSeverity::Moderate => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        DamageSeverity::Minor => "bg-sky-500/10 text-sky-300 border-sky-500/40",
        DamageSeverity::NoStructural => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{severity.label()}"
        }
    }
}
