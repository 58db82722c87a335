//! Data model for the headless window registry.

use serde::{Deserialize, Serialize};

/// Z-index assigned to the first window opened in a session.
pub const Z_INDEX_BASE: u32 = 1000;
/// Default width for a newly opened window, before viewport clamping.
pub const DEFAULT_WINDOW_WIDTH: i32 = 1000;
/// Default height for a newly opened window, before viewport clamping.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 700;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 320;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 220;
/// Top-left base point of the open-window cascade.
pub const CASCADE_ORIGIN: (i32, i32) = (100, 80);
/// Diagonal offset between successive cascade slots.
pub const CASCADE_STEP: i32 = 40;
/// Number of cascade slots before the offset wraps back to the origin.
pub const CASCADE_SLOTS: u64 = 8;
/// Height of a window title bar, used when clamping drags.
pub const TITLEBAR_HEIGHT_PX: i32 = 32;
/// Minimum horizontal strip of the title bar that must stay on screen.
pub const TITLEBAR_MIN_VISIBLE_PX: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identifier for a runtime-managed window, unique per open window.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Stable catalog key selecting which content renderer a window mounts.
///
/// Window identity and application identity are deliberately separate types:
/// the registry de-duplicates open requests on `ApplicationId` while window
/// ids stay unique per open.
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an application id when `raw` is a non-empty lowercase
    /// `[a-z0-9-]` key that does not start or end with a hyphen.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected a lowercase kebab-case key"
            ))
        }
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 64 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in viewport pixels; `x`/`y` is the top-left corner.
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Translates the rect by the given deltas without changing its size.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Enforces the minimum usable size floor.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// Clamps the position so the title bar stays reachable inside `viewport`.
    ///
    /// The bar may never rise above the viewport top, sink below its bottom
    /// edge, or slide so far sideways that less than
    /// [`TITLEBAR_MIN_VISIBLE_PX`] of it remains on screen.
    pub fn clamped_to_viewport(self, viewport: WindowRect) -> Self {
        let min_x = viewport.x + TITLEBAR_MIN_VISIBLE_PX - self.w;
        let max_x = viewport.x + viewport.w - TITLEBAR_MIN_VISIBLE_PX;
        let min_y = viewport.y;
        let max_y = viewport.y + viewport.h - TITLEBAR_HEIGHT_PX;
        Self {
            x: self.x.min(max_x).max(min_x),
            y: self.y.min(max_y).max(min_y),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: CASCADE_ORIGIN.0,
            y: CASCADE_ORIGIN.1,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One open application surface managed by the registry.
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
    /// Geometry captured on the unmaximized -> maximized transition only.
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request to open (or focus-raise) a window for an application.
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: String,
    pub icon: String,
    /// Explicit initial geometry; the cascade slot is used when absent.
    pub rect: Option<WindowRect>,
}

impl OpenWindowRequest {
    pub fn new(app_id: ApplicationId, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            app_id,
            title: title.into(),
            icon: icon.into(),
            rect: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative registry state: the ordered collection of open windows.
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
    pub launcher_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            launcher_open: false,
        }
    }
}

impl DesktopState {
    /// Returns the currently focused window, if any.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    /// Returns the open window for an application, if one exists.
    pub fn window_for_app(&self, app_id: &ApplicationId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.app_id == app_id)
    }

    /// Returns the highest z-index among open windows.
    pub fn max_z_index(&self) -> Option<u32> {
        self.windows.iter().map(|w| w.z_index).max()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in viewport pixels.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner grabbed during a resize gesture.
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active drag gesture: captured once on pointer-down, read on every move.
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active resize gesture with the grabbed edge.
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer-gesture state, held outside [`DesktopState`] so the
/// registry itself stays a pure function of explicit operations.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// True while either gesture is in progress.
    pub fn gesture_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 760,
    };

    #[test]
    fn viewport_clamp_keeps_the_title_bar_reachable() {
        let rect = WindowRect {
            x: -5000,
            y: -5000,
            w: 800,
            h: 600,
        };
        let clamped = rect.clamped_to_viewport(VIEWPORT);
        assert_eq!(clamped.x, TITLEBAR_MIN_VISIBLE_PX - 800);
        assert_eq!(clamped.y, 0);

        let rect = WindowRect {
            x: 5000,
            y: 5000,
            w: 800,
            h: 600,
        };
        let clamped = rect.clamped_to_viewport(VIEWPORT);
        assert_eq!(clamped.x, VIEWPORT.w - TITLEBAR_MIN_VISIBLE_PX);
        assert_eq!(clamped.y, VIEWPORT.h - TITLEBAR_HEIGHT_PX);
    }

    #[test]
    fn viewport_clamp_leaves_in_bounds_geometry_alone() {
        let rect = WindowRect {
            x: 100,
            y: 80,
            w: 1000,
            h: 700,
        };
        assert_eq!(rect.clamped_to_viewport(VIEWPORT), rect);
    }

    #[test]
    fn size_clamp_enforces_the_floor_without_moving_the_window() {
        let rect = WindowRect {
            x: 10,
            y: 20,
            w: 5,
            h: 5,
        };
        let clamped = rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        assert_eq!(clamped.w, MIN_WINDOW_WIDTH);
        assert_eq!(clamped.h, MIN_WINDOW_HEIGHT);
        assert_eq!((clamped.x, clamped.y), (10, 20));
    }

    #[test]
    fn desktop_state_serializes_round_trip() {
        let mut state = DesktopState::default();
        state.windows.push(WindowRecord {
            id: WindowId(1),
            app_id: ApplicationId::trusted("jobs"),
            title: "Job Hunter".to_string(),
            icon: "\u{1f4bc}".to_string(),
            rect: WindowRect::default(),
            restore_rect: None,
            z_index: Z_INDEX_BASE,
            is_focused: true,
            minimized: false,
            maximized: false,
        });

        let encoded = serde_json::to_string(&state).expect("encode");
        let decoded: DesktopState = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, state);
    }
}
