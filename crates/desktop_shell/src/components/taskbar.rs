use std::time::Duration;

use desktop_core::{DesktopAction, WindowId};
use leptos::*;

use super::use_desktop_runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    fn formatted(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                class="start-button"
                aria-label="Open application launcher"
                aria-haspopup="menu"
                aria-expanded=move || state.get().launcher_open
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLauncher)
            >
                <span class="taskbar-glyph" aria-hidden="true">"\u{25a6}"</span>
                <span>"Apps"</span>
            </button>

            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For
                    each=move || state.get().windows
                    key=|win| win.id.0
                    let:win
                >
                    <TaskbarWindowButton window_id=win.id />
                </For>
            </div>

            <div class="taskbar-clock" aria-label="Clock">
                {move || clock_now.get().formatted()}
            </div>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let mut class = "taskbar-window-button".to_string();
                if win.is_focused && !win.minimized {
                    class.push_str(" active");
                }
                if win.minimized {
                    class.push_str(" minimized");
                }

                view! {
                    <button
                        class=class
                        title=win.title.clone()
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow { window_id });
                        }
                    >
                        <span class="taskbar-window-icon" aria-hidden="true">{win.icon.clone()}</span>
                        <span class="taskbar-window-title">{win.title.clone()}</span>
                    </button>
                }
                    .into_view()
            }}
        </Show>
    }
}
