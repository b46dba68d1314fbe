//! Shared UI constants such as colors, panel sizing, and scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PLAYHEAD: &str = "#ef4444";
pub const ACCENT_PLAY: &str = "#3b82f6";

pub const MONO_FONT: &str = "'SF Mono', Consolas, monospace";

pub const HEADER_HEIGHT: f64 = 56.0;
pub const GRID_HEIGHT: f64 = 48.0;
pub const LAYER_HEIGHT: f64 = 80.0;
pub const INFO_PANEL_WIDTH: f64 = 384.0;
pub const EVENT_BLOCK_MIN_WIDTH: f64 = 2.0;
/// Used until the webview reports the real timeline width.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1000.0;

pub const TIMELINE_HOST_ID: &str = "timeline-scroll-host";

/// Reports the timeline host's left edge, width and horizontal scroll offset
/// whenever it is resized or scrolled.
pub const TIMELINE_VIEWPORT_SCRIPT: &str = r#"
const hostId = "timeline-scroll-host";
let last = null;
let attachedTo = null;

function sendViewport() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const rect = host.getBoundingClientRect();
    const next = {
        left: rect.left,
        width: host.clientWidth || 0,
        scroll_left: host.scrollLeft || 0
    };
    if (last &&
        Math.abs(last.left - next.left) < 0.5 &&
        Math.abs(last.width - next.width) < 0.5 &&
        Math.abs(last.scroll_left - next.scroll_left) < 0.5) {
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
    if (attachedTo !== host) {
        attachedTo = host;
        const observer = new ResizeObserver(() => sendViewport());
        observer.observe(host);
        host.addEventListener("scroll", sendViewport, { passive: true });
    }
    sendViewport();
    setTimeout(attach, 1000);
}

window.addEventListener("resize", sendViewport, { passive: true });
attach();
await new Promise(() => {});
"#;
