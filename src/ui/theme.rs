//! Shared style helpers so pages stay visually consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:cursor-not-allowed disabled:bg-slate-800 disabled:text-slate-500"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800"
}

pub fn btn_danger_outline() -> &'static str {
    "rounded-lg border border-rose-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10"
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none"
}

pub fn select_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel_border() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn panel_highlight() -> &'static str {
    "rounded-xl border-2 border-indigo-500/70 bg-indigo-500/10"
}

pub fn panel_warning() -> &'static str {
    "rounded-xl border-l-4 border-amber-400/70 bg-amber-500/10 px-4 py-3"
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden"
}

pub fn table_header() -> &'static str {
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500"
}

pub fn table_divider() -> &'static str {
    "divide-y divide-slate-800"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_secondary() -> &'static str {
    "text-slate-300"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn link_class() -> &'static str {
    "text-indigo-300 underline-offset-2 hover:text-indigo-100 hover:underline"
}
