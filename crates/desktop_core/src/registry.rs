//! Registry actions and transition logic for the desktop window manager.

use thiserror::Error;

use crate::model::{
    DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition, ResizeEdge,
    ResizeSession, WindowId, WindowRecord, WindowRect, CASCADE_ORIGIN, CASCADE_SLOTS, CASCADE_STEP,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, Z_INDEX_BASE,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window for an application, or focus-raise the one already open.
    OpenWindow {
        /// Application, title, icon, and optional explicit geometry.
        request: OpenWindowRequest,
        /// Current desktop viewport, used for initial clamping.
        viewport: WindowRect,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window, hiding it from the canvas but not the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Restore a minimized window at its prior stacking position.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Maximize a window to the provided viewport. No-op when already maximized.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
        /// Viewport rectangle to maximize into.
        viewport: WindowRect,
    },
    /// Restore a maximized window to its captured pre-maximize geometry.
    UnmaximizeWindow {
        /// Window to unmaximize.
        window_id: WindowId,
    },
    /// Toggle taskbar behavior for a window (focus, minimize, or restore).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the application launcher overlay.
    ToggleLauncher,
    /// Close the application launcher overlay if open.
    CloseLauncher,
    /// Begin dragging a window from its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag, clamping to the viewport.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current desktop viewport rectangle.
        viewport: WindowRect,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from an edge or corner handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell to execute.
pub enum RuntimeEffect {
    /// Move browser focus into the given window's surface.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry errors for actions referencing state that no longer exists.
///
/// The dispatch layer logs and drops these; they never abort the shell.
pub enum RegistryError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the registry state and collects side effects.
///
/// This function is the authoritative state transition engine for window
/// management; nothing else may mutate [`DesktopState`].
///
/// # Errors
///
/// Returns [`RegistryError::WindowNotFound`] when an action references a
/// window that is not present. State is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, RegistryError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { request, viewport } => {
            // One window per application: re-opening focus-raises the
            // existing window instead of spawning a duplicate.
            if let Some(existing) = state.window_for_app(&request.app_id).map(|w| w.id) {
                raise_window(state, existing)?;
                state.launcher_open = false;
                effects.push(RuntimeEffect::FocusWindowInput(existing));
                return Ok(effects);
            }

            let window_id = next_window_id(state);
            let rect = request
                .rect
                .unwrap_or_else(|| cascade_rect(window_id, viewport))
                .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
                .clamped_to_viewport(viewport);
            state.windows.push(WindowRecord {
                id: window_id,
                app_id: request.app_id,
                title: request.title,
                icon: request.icon,
                rect,
                restore_rect: None,
                z_index: 0,
                is_focused: false,
                minimized: false,
                maximized: false,
            });
            raise_window(state, window_id)?;
            state.launcher_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(RegistryError::WindowNotFound);
            }
            end_gestures_for(interaction, window_id);
            if state.focused_window_id().is_none() {
                focus_topmost_visible(state);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            raise_window(state, window_id)?;
            state.launcher_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            window.minimized = true;
            window.is_focused = false;
            end_gestures_for(interaction, window_id);
            focus_topmost_visible(state);
        }
        DesktopAction::RestoreWindow { window_id } => {
            // Restore keeps the prior z-index: the window reappears at its
            // old stacking position rather than jumping to the top.
            find_window_mut(state, window_id)?.minimized = false;
            for window in &mut state.windows {
                window.is_focused = window.id == window_id;
            }
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::MaximizeWindow {
            window_id,
            viewport,
        } => {
            let window = find_window_mut(state, window_id)?;
            if !window.maximized {
                window.restore_rect = Some(window.rect);
                window.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                window.maximized = true;
                window.minimized = false;
            }
            raise_window(state, window_id)?;
        }
        DesktopAction::UnmaximizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            if window.maximized {
                if let Some(restore_rect) = window.restore_rect.take() {
                    window.rect = restore_rect;
                }
                window.maximized = false;
            }
            raise_window(state, window_id)?;
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let record = state
                .windows
                .iter()
                .find(|w| w.id == window_id)
                .ok_or(RegistryError::WindowNotFound)?;
            let next = if record.minimized {
                DesktopAction::RestoreWindow { window_id }
            } else if record.is_focused {
                DesktopAction::MinimizeWindow { window_id }
            } else {
                DesktopAction::FocusWindow { window_id }
            };
            effects.extend(reduce_desktop(state, interaction, next)?);
        }
        DesktopAction::ToggleLauncher => {
            state.launcher_open = !state.launcher_open;
        }
        DesktopAction::CloseLauncher => {
            state.launcher_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let rect_start = find_window_mut(state, window_id)?.rect;
            raise_window(state, window_id)?;
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging.clone() {
                let Some(window) = state.windows.iter_mut().find(|w| w.id == session.window_id)
                else {
                    // The window raced a close mid-gesture; release the drag.
                    interaction.dragging = None;
                    return Ok(effects);
                };
                if !window.maximized {
                    let dx = pointer.x - session.pointer_start.x;
                    let dy = pointer.y - session.pointer_start.y;
                    window.rect = session
                        .rect_start
                        .offset(dx, dy)
                        .clamped_to_viewport(viewport);
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let rect_start = find_window_mut(state, window_id)?.rect;
            raise_window(state, window_id)?;
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.clone() {
                let Some(window) = state.windows.iter_mut().find(|w| w.id == session.window_id)
                else {
                    interaction.resizing = None;
                    return Ok(effects);
                };
                if !window.maximized {
                    let dx = pointer.x - session.pointer_start.x;
                    let dy = pointer.y - session.pointer_start.y;
                    window.rect = resize_rect(session.rect_start, session.edge, dx, dy)
                        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
    }

    Ok(effects)
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

/// Cascade slot for a new window so successive opens never perfectly overlap.
fn cascade_rect(window_id: WindowId, viewport: WindowRect) -> WindowRect {
    let slot = ((window_id.0.saturating_sub(1)) % CASCADE_SLOTS) as i32;
    WindowRect {
        x: CASCADE_ORIGIN.0 + slot * CASCADE_STEP,
        y: CASCADE_ORIGIN.1 + slot * CASCADE_STEP,
        w: DEFAULT_WINDOW_WIDTH.min(viewport.w),
        h: DEFAULT_WINDOW_HEIGHT.min(viewport.h),
    }
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, RegistryError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(RegistryError::WindowNotFound)
}

/// Focuses `window_id` and assigns it a z-index strictly above every other
/// open window. A window that is already the focused topmost surface is left
/// untouched so repeated clicks do not inflate z-index values.
fn raise_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), RegistryError> {
    let top_other = state
        .windows
        .iter()
        .filter(|w| w.id != window_id)
        .map(|w| w.z_index)
        .max();
    let window = state
        .windows
        .iter()
        .find(|w| w.id == window_id)
        .ok_or(RegistryError::WindowNotFound)?;
    let already_top = window.is_focused
        && !window.minimized
        && top_other.map_or(true, |top| window.z_index > top);
    if already_top {
        return Ok(());
    }

    let next_z = top_other.map_or(Z_INDEX_BASE, |top| top.saturating_add(1));
    for window in &mut state.windows {
        window.is_focused = false;
    }
    let window = find_window_mut(state, window_id)?;
    window.z_index = next_z;
    window.is_focused = true;
    window.minimized = false;
    Ok(())
}

/// Moves focus to the topmost non-minimized window without re-stacking.
fn focus_topmost_visible(state: &mut DesktopState) {
    let next = state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .max_by_key(|w| w.z_index)
        .map(|w| w.id);
    if let Some(next) = next {
        for window in &mut state.windows {
            window.is_focused = window.id == next;
        }
    }
}

/// Releases any gesture bound to `window_id` so drags never outlive their window.
fn end_gestures_for(interaction: &mut InteractionState, window_id: WindowId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == window_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| session.window_id == window_id)
    {
        interaction.resizing = None;
    }
}

/// Applies resize deltas for a given edge/corner drag.
fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{
        ApplicationId, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TITLEBAR_HEIGHT_PX,
        TITLEBAR_MIN_VISIBLE_PX,
    };

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1600,
        h: 900,
    };

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app: &str) -> WindowId {
        let request = OpenWindowRequest::new(ApplicationId::trusted(app), app.to_string(), "*");
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow {
                request,
                viewport: VIEWPORT,
            },
        )
        .expect("open window");
        state
            .window_for_app(&ApplicationId::trusted(app))
            .expect("window exists")
            .id
    }

    fn window(state: &DesktopState, id: WindowId) -> &WindowRecord {
        state.windows.iter().find(|w| w.id == id).expect("window")
    }

    #[test]
    fn application_id_validation_accepts_catalog_style_keys() {
        assert!(ApplicationId::new("jobs").is_ok());
        assert!(ApplicationId::new("service-jobs").is_ok());
        assert!(ApplicationId::new("").is_err());
        assert!(ApplicationId::new("Jobs").is_err());
        assert!(ApplicationId::new("jobs-").is_err());
        assert!(ApplicationId::new("9jobs").is_err());
    }

    #[test]
    fn opening_same_application_twice_keeps_a_single_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "jobs");
        let again = open(&mut state, &mut interaction, "jobs");

        assert_eq!(first, again);
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.focused_window_id(), Some(first));
    }

    #[test]
    fn reopening_raises_the_existing_window_above_newer_ones() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let jobs = open(&mut state, &mut interaction, "jobs");
        let finance = open(&mut state, &mut interaction, "finance");
        assert!(window(&state, finance).z_index > window(&state, jobs).z_index);

        let again = open(&mut state, &mut interaction, "jobs");
        assert_eq!(again, jobs);
        assert_eq!(state.windows.len(), 2);
        assert!(window(&state, jobs).z_index > window(&state, finance).z_index);
        assert_eq!(state.focused_window_id(), Some(jobs));
    }

    #[test]
    fn successive_windows_cascade_and_stack_upward_from_base() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "jobs");
        let b = open(&mut state, &mut interaction, "finance");

        assert_eq!(window(&state, a).z_index, Z_INDEX_BASE);
        assert_eq!(window(&state, b).z_index, Z_INDEX_BASE + 1);
        let (ra, rb) = (window(&state, a).rect, window(&state, b).rect);
        assert_eq!(rb.x - ra.x, CASCADE_STEP);
        assert_eq!(rb.y - ra.y, CASCADE_STEP);
    }

    #[test]
    fn focusing_a_window_gives_it_a_strictly_highest_z_index() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "jobs");
        let b = open(&mut state, &mut interaction, "finance");
        assert_eq!(window(&state, a).z_index, 1000);
        assert_eq!(window(&state, b).z_index, 1001);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a },
        )
        .expect("focus");

        assert_eq!(window(&state, a).z_index, 1002);
        assert_eq!(window(&state, b).z_index, 1001);
        assert_eq!(state.focused_window_id(), Some(a));
    }

    #[test]
    fn refocusing_the_topmost_window_does_not_inflate_z_index() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "jobs");
        let before = window(&state, a).z_index;
        for _ in 0..3 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::FocusWindow { window_id: a },
            )
            .expect("focus");
        }
        assert_eq!(window(&state, a).z_index, before);
    }

    #[test]
    fn maximize_then_unmaximize_restores_exact_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        let original = window(&state, win).rect;
        assert_eq!(
            original,
            WindowRect {
                x: 100,
                y: 80,
                w: 1000,
                h: 700
            }
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win,
                viewport: VIEWPORT,
            },
        )
        .expect("maximize");
        assert!(window(&state, win).maximized);
        assert_eq!(window(&state, win).rect, VIEWPORT);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UnmaximizeWindow { window_id: win },
        )
        .expect("unmaximize");
        assert!(!window(&state, win).maximized);
        assert_eq!(window(&state, win).rect, original);
    }

    #[test]
    fn repeated_maximize_does_not_lose_the_captured_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        let original = window(&state, win).rect;

        for _ in 0..2 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MaximizeWindow {
                    window_id: win,
                    viewport: VIEWPORT,
                },
            )
            .expect("maximize");
        }
        assert_eq!(window(&state, win).restore_rect, Some(original));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UnmaximizeWindow { window_id: win },
        )
        .expect("unmaximize");
        assert_eq!(window(&state, win).rect, original);
        assert_eq!(window(&state, win).restore_rect, None);
    }

    #[test]
    fn minimize_and_taskbar_restore_round_trip_preserves_position() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        let rect = window(&state, win).rect;
        let z = window(&state, win).z_index;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: win },
        )
        .expect("minimize via taskbar");
        assert!(window(&state, win).minimized);
        assert!(!window(&state, win).is_focused);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: win },
        )
        .expect("restore via taskbar");
        let record = window(&state, win);
        assert!(!record.minimized);
        assert!(record.is_focused);
        assert_eq!(record.rect, rect);
        assert_eq!(record.z_index, z);
    }

    #[test]
    fn minimizing_the_focused_window_passes_focus_to_the_next_topmost() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "jobs");
        let b = open(&mut state, &mut interaction, "finance");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: b },
        )
        .expect("minimize");

        assert_eq!(state.focused_window_id(), Some(a));
    }

    #[test]
    fn dragging_moves_by_pointer_delta_and_clamps_to_the_viewport() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        let start = window(&state, win).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 200, y: 100 },
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 225, y: 140 },
                viewport: VIEWPORT,
            },
        )
        .expect("update move");

        let moved = window(&state, win).rect;
        assert_eq!(moved.x, start.x + 25);
        assert_eq!(moved.y, start.y + 40);

        // Yank the pointer far off every edge; the title bar must survive.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: -5000, y: -5000 },
                viewport: VIEWPORT,
            },
        )
        .expect("update move");
        let clamped = window(&state, win).rect;
        assert_eq!(clamped.x, TITLEBAR_MIN_VISIBLE_PX - clamped.w);
        assert_eq!(clamped.y, 0);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 9000, y: 9000 },
                viewport: VIEWPORT,
            },
        )
        .expect("update move");
        let clamped = window(&state, win).rect;
        assert_eq!(clamped.x, VIEWPORT.w - TITLEBAR_MIN_VISIBLE_PX);
        assert_eq!(clamped.y, VIEWPORT.h - TITLEBAR_HEIGHT_PX);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end move");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resizing_clamps_to_the_minimum_size_floor() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 500, y: 500 },
            },
        )
        .expect("begin resize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -4000, y: -4000 },
            },
        )
        .expect("update resize");

        let rect = window(&state, win).rect;
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.h, MIN_WINDOW_HEIGHT);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndResize).expect("end resize");
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn maximized_windows_ignore_move_and_resize_updates() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win,
                viewport: VIEWPORT,
            },
        )
        .expect("maximize");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 400, y: 400 },
                viewport: VIEWPORT,
            },
        )
        .expect("update move");

        assert_eq!(window(&state, win).rect, VIEWPORT);
    }

    #[test]
    fn closing_a_window_removes_it_and_later_operations_are_rejected() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        )
        .expect("close");
        assert!(state.windows.is_empty());

        let before = state.clone();
        for action in [
            DesktopAction::RestoreWindow { window_id: win },
            DesktopAction::MinimizeWindow { window_id: win },
            DesktopAction::CloseWindow { window_id: win },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(RegistryError::WindowNotFound)
            );
            assert_eq!(state, before);
        }
    }

    #[test]
    fn closing_the_dragged_window_releases_the_gesture() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        )
        .expect("begin move");
        assert!(interaction.gesture_active());

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        )
        .expect("close");
        assert!(!interaction.gesture_active());
    }

    #[test]
    fn closing_the_top_window_focuses_the_one_beneath_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "jobs");
        let b = open(&mut state, &mut interaction, "finance");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: b },
        )
        .expect("close");
        assert_eq!(state.focused_window_id(), Some(a));
    }

    #[test]
    fn opening_a_window_closes_the_launcher_overlay() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleLauncher)
            .expect("toggle launcher");
        assert!(state.launcher_open);

        open(&mut state, &mut interaction, "jobs");
        assert!(!state.launcher_open);
    }

    #[test]
    fn minimized_and_maximized_remain_independent_axes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "jobs");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win,
                viewport: VIEWPORT,
            },
        )
        .expect("maximize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: win },
        )
        .expect("minimize");

        let record = window(&state, win);
        assert!(record.minimized);
        assert!(record.maximized);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: win },
        )
        .expect("restore");
        let record = window(&state, win);
        assert!(!record.minimized);
        assert!(record.maximized);
        assert_eq!(record.rect, VIEWPORT);
    }
}
