//! Runtime provider and context wiring for the desktop shell.
//!
//! Owns the long-lived registry state container, the interaction (gesture)
//! state, and the effect queue. UI composition stays in [`crate::components`].

use desktop_core::{reduce_desktop, DesktopAction, DesktopState, InteractionState, RuntimeEffect};
use leptos::*;

use crate::host::DesktopHostContext;

#[derive(Clone, Copy)]
/// Leptos context for reading registry state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host handle for viewport queries and DOM focus effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive window-registry state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of effects emitted by the reducer and processed by the provider.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a registry action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut gestures = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_gestures = gestures.clone();

        match reduce_desktop(&mut desktop, &mut gestures, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if gestures != previous_gestures {
                    interaction.set(gestures);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            // Missing-window actions race rapid open/close clicks; drop them.
            Err(err) => logging::warn!("desktop registry rejected action: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    create_effect(move |_| {
        let queued = effects.get();
        if queued.is_empty() {
            return;
        }
        effects.set(Vec::new());
        for effect in queued {
            match effect {
                RuntimeEffect::FocusWindowInput(window_id) => {
                    host.get_value().focus_window_surface(window_id);
                }
            }
        }
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
