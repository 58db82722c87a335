//! Browser host boundary: viewport queries, DOM focus, environment config.
//!
//! Keeps `web_sys` calls behind one seam so components and the reducer stay
//! testable on non-wasm targets, where fixed fallback values are returned.

use desktop_core::{WindowId, WindowRect};

/// Fallback desktop width used off-wasm (tests, tooling builds).
const FALLBACK_VIEWPORT_WIDTH: i32 = 1280;
/// Fallback desktop height used off-wasm.
const FALLBACK_VIEWPORT_HEIGHT: i32 = 800;

/// Backend base URL for the (currently unused) services integration point.
///
/// Read once from the build environment; none of the shell logic depends on
/// it being present.
pub fn backend_base_url() -> Option<&'static str> {
    option_env!("NOMAD_DESK_BACKEND_URL")
}

#[derive(Debug, Clone, Copy, Default)]
/// Host service handle for environment queries and DOM side effects.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Returns the desktop canvas rect: the viewport minus the taskbar strip.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        let (w, h) = viewport_size();
        WindowRect {
            x: 0,
            y: 0,
            w,
            h: (h - taskbar_height_px).max(0),
        }
    }

    /// Moves browser focus onto a window surface so keyboard input follows
    /// the raised window. Missing elements are ignored.
    pub fn focus_window_surface(&self, window_id: WindowId) {
        focus_element_by_id(&window_surface_dom_id(window_id));
    }
}

/// DOM id of a window's focusable root section.
pub fn window_surface_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

#[cfg(target_arch = "wasm32")]
fn viewport_size() -> (i32, i32) {
    let Some(window) = web_sys::window() else {
        return (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
    (width, height)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_size() -> (i32, i32) {
    (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
}

#[cfg(target_arch = "wasm32")]
fn focus_element_by_id(id: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        if let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = html_element.focus();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn focus_element_by_id(_: &str) {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn viewport_rect_reserves_the_taskbar_strip() {
        let host = DesktopHostContext;
        let rect = host.desktop_viewport_rect(38);
        assert_eq!(rect.w, FALLBACK_VIEWPORT_WIDTH);
        assert_eq!(rect.h, FALLBACK_VIEWPORT_HEIGHT - 38);
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn oversized_taskbar_never_produces_a_negative_canvas() {
        let host = DesktopHostContext;
        assert_eq!(host.desktop_viewport_rect(10_000).h, 0);
    }

    #[test]
    fn window_surface_ids_are_stable_per_window() {
        assert_eq!(window_surface_dom_id(WindowId(7)), "desktop-window-7");
    }
}
