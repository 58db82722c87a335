//! Desktop shell UI composition and interaction surfaces.

mod launcher;
mod taskbar;
mod window;

use app_catalog::AppDescriptor;
use desktop_core::{DesktopAction, PointerPosition, ResizeEdge};
use leptos::*;

use self::{launcher::LauncherOverlay, taskbar::Taskbar, window::DesktopWindow};
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Height of the taskbar strip reserved at the bottom of the viewport.
pub(crate) const TASKBAR_HEIGHT_PX: i32 = 48;

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(crate) fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Dispatches the open-or-focus request for a catalog entry.
pub(crate) fn activate_app(runtime: DesktopRuntimeContext, descriptor: &AppDescriptor) {
    let viewport = runtime
        .host
        .get_value()
        .desktop_viewport_rect(TASKBAR_HEIGHT_PX);
    runtime.dispatch_action(DesktopAction::OpenWindow {
        request: descriptor.open_request(),
        viewport,
    });
}

/// Ends whichever drag/resize gesture is active. Runs on pointer-up and
/// pointer-cancel so a gesture can never outlive its pointer.
fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

pub(crate) fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

#[component]
/// Renders the full desktop shell: backdrop, icons, window layer, launcher,
/// and taskbar, with global pointer routing for drag/resize gestures.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if runtime.state.get_untracked().launcher_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseLauncher);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if !interaction.gesture_active() {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        if interaction.dragging.is_some() {
            let viewport = runtime
                .host
                .get_value()
                .desktop_viewport_rect(TASKBAR_HEIGHT_PX);
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer, viewport });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-backdrop">
                <div
                    class="desktop-dismiss-layer"
                    on:mousedown=move |_| {
                        if runtime.state.get_untracked().launcher_open {
                            runtime.dispatch_action(DesktopAction::CloseLauncher);
                        }
                    }
                />
                <div class="desktop-icon-grid">
                    <For
                        each=move || app_catalog::desktop_icon_apps()
                        key=|app| app.id
                        let:app
                    >
                        <button
                            type="button"
                            class="desktop-icon-button"
                            title=app.description
                            on:click=move |_| activate_app(runtime, &app)
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">{app.icon}</span>
                            <span class="desktop-icon-label">{app.name}</span>
                        </button>
                    </For>
                </div>

                <div class="desktop-window-layer">
                    <For
                        each=move || state.get().windows
                        key=|win| win.id.0
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </div>

                <Show when=move || state.get().launcher_open fallback=|| ()>
                    <LauncherOverlay />
                </Show>
            </div>

            <Taskbar />
        </div>
    }
}
