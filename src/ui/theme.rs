//! Shared class strings so pages stay visually consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-amber-400";

pub const BTN_SECONDARY: &str =
    "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-300 hover:border-amber-500 hover:text-amber-300";

pub const BTN_SMALL: &str =
    "rounded-md border border-sky-500/40 px-2 py-1 text-[11px] font-semibold uppercase tracking-wide text-sky-200 hover:bg-sky-500/10 disabled:cursor-wait disabled:opacity-60";

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str =
    "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-amber-500 focus:outline-none";

pub const INPUT_SMALL: &str =
    "w-20 rounded-md border border-slate-700 bg-slate-950 px-2 py-1 text-right text-xs text-slate-100 focus:border-amber-500 focus:outline-none";

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const TABLE_CONTAINER: &str =
    "overflow-x-auto rounded-xl border border-slate-800 bg-slate-900/40";

pub const TABLE_HEADER: &str =
    "border-b border-slate-800 bg-slate-900/60 text-left text-xs uppercase tracking-wide text-slate-500";

pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

// ============================================
// TEXT STYLES
// ============================================

pub const TEXT_MUTED: &str = "text-slate-500";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const HEADING: &str = "text-2xl font-semibold tracking-tight text-slate-100";
