//! Shared UI constants: the two palettes, panel sizing, and the JS snippets
//! used to observe element geometry from the webview.

use crate::core::timeline::AccentKey;

/// Colors for one theme. Both palettes expose the same slots so components
/// only ever read from the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_base: &'static str,
    pub bg_elevated: &'static str,
    pub bg_surface: &'static str,
    pub bg_hover: &'static str,
    pub border_subtle: &'static str,
    pub border_default: &'static str,
    pub border_strong: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub accent_work: &'static str,
    pub accent_freelance: &'static str,
    pub accent_education: &'static str,
    pub accent_personal: &'static str,
    pub selection: &'static str,
    pub timeline_baseline: &'static str,
    pub timeline_tick: &'static str,
}

impl Palette {
    pub fn accent(&self, key: AccentKey) -> &'static str {
        match key {
            AccentKey::Work => self.accent_work,
            AccentKey::Freelance => self.accent_freelance,
            AccentKey::Education => self.accent_education,
            AccentKey::Personal => self.accent_personal,
        }
    }
}

pub const DARK_PALETTE: Palette = Palette {
    bg_base: "#0a0a0b",
    bg_elevated: "#141414",
    bg_surface: "#1a1a1a",
    bg_hover: "#262626",
    border_subtle: "#1f1f1f",
    border_default: "#27272a",
    border_strong: "#3f3f46",
    text_primary: "#fafafa",
    text_secondary: "#a1a1aa",
    text_muted: "#71717a",
    accent_work: "#3b82f6",
    accent_freelance: "#22c55e",
    accent_education: "#a855f7",
    accent_personal: "#f97316",
    selection: "#60a5fa",
    timeline_baseline: "#3f3f46",
    timeline_tick: "#52525b",
};

pub const LIGHT_PALETTE: Palette = Palette {
    bg_base: "#fafafa",
    bg_elevated: "#f4f4f5",
    bg_surface: "#ffffff",
    bg_hover: "#e4e4e7",
    border_subtle: "#e4e4e7",
    border_default: "#d4d4d8",
    border_strong: "#a1a1aa",
    text_primary: "#18181b",
    text_secondary: "#52525b",
    text_muted: "#a1a1aa",
    accent_work: "#2563eb",
    accent_freelance: "#16a34a",
    accent_education: "#9333ea",
    accent_personal: "#ea580c",
    selection: "#2563eb",
    timeline_baseline: "#a1a1aa",
    timeline_tick: "#d4d4d8",
};

pub const TITLE_BAR_HEIGHT: f64 = 38.0;
pub const SIDE_PANEL_WIDTH: f64 = 200.0;
pub const EXPERIENCE_LIST_WIDTH: f64 = 360.0;
pub const TIMELINE_MIN_HEIGHT: f64 = 160.0;

/// Interval of the animation/scroll-sync drive loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Reports the timeline surface's client size whenever it changes.
pub const TIMELINE_SURFACE_SCRIPT: &str = r#"
const hostId = "timeline-surface";
let last = null;

function sendSize() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const next = { width: host.clientWidth || 0, height: host.clientHeight || 0 };
    if (last &&
        Math.abs(last.width - next.width) < 0.5 &&
        Math.abs(last.height - next.height) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendSize());
    observer.observe(host);
    window.addEventListener("resize", sendSize, { passive: true });
    sendSize();
}

attach();
await new Promise(() => {});
"#;

/// Streams the experience list's scroll offset and per-card offsets, and
/// applies animated scroll-to-entry commands sent from Rust.
pub const EXPERIENCE_LIST_SCRIPT: &str = r#"
const hostId = "experience-list";

function measure() {
    const host = document.getElementById(hostId);
    if (!host) {
        return null;
    }
    const tops = [];
    for (const child of host.children) {
        tops.push(child.offsetTop - host.offsetTop);
    }
    return {
        kind: "scroll",
        scrollTop: host.scrollTop,
        viewportHeight: host.clientHeight,
        contentHeight: host.scrollHeight,
        tops: tops
    };
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    host.addEventListener("scroll", () => {
        const state = measure();
        if (state) {
            dioxus.send(state);
        }
    }, { passive: true });
    const state = measure();
    if (state) {
        state.kind = "measure";
        dioxus.send(state);
    }
}

attach();

while (true) {
    const msg = await dioxus.recv();
    if (!msg || msg.kind !== "scrollTo") {
        continue;
    }
    const host = document.getElementById(hostId);
    if (!host) {
        continue;
    }
    host.scrollTo({ top: msg.top, behavior: "smooth" });
    const state = measure();
    if (state) {
        state.kind = "measure";
        dioxus.send(state);
    }
}
"#;
