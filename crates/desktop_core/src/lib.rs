//! Headless window-manager core for the desktop shell.
//!
//! Owns the authoritative window registry (geometry, z-order, minimize and
//! maximize state) and the reducer that applies every mutation to it. No UI
//! dependencies live here; the shell crate renders this state and routes
//! pointer input back in as [`DesktopAction`] values.

pub mod model;
pub mod registry;

pub use model::*;
pub use registry::{reduce_desktop, DesktopAction, RegistryError, RuntimeEffect};
