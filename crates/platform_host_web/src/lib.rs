//! Browser (`wasm32`) implementations of [`platform_host`] layout contracts.
//!
//! This crate is the concrete browser-side wiring layer for the layout shell: the DOM-backed
//! rendering surface and the `matchMedia` breakpoint service. Non-wasm builds compile the same
//! API with inert fallbacks so runtime crates stay testable on the host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod breakpoints;
pub mod surface;

pub use adapters::{
    breakpoint_service, host_strategy_name, layout_surface, selected_host_strategy,
    BreakpointServiceAdapter, HostStrategy, LayoutSurfaceAdapter,
};
pub use breakpoints::WebBreakpointService;
pub use surface::WebLayoutSurface;
