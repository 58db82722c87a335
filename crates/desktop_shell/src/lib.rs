//! Leptos desktop shell: renders the window registry and routes user input
//! back into it as registry actions.

pub mod components;
pub mod host;
pub mod runtime_context;

pub use components::DesktopShell;
pub use host::{backend_base_url, DesktopHostContext};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
