//! Layout shell runtime: panel/overlay/footer state machine, host effect execution, and the
//! Leptos shell component.

pub mod components;
pub mod config;
pub mod controller;
pub mod host;
pub mod listeners;
pub mod model;
pub mod reducer;

pub use components::{use_layout, LayoutProvider, LayoutShell};
pub use config::{FooterConfig, LayoutConfig, LayoutConfigError};
pub use controller::LayoutController;
pub use host::LayoutHostContext;
pub use listeners::{ListenerId, ListenerSet};
pub use model::*;
pub use reducer::{reduce_layout, LayoutAction, LayoutEffect};
