//! Typed host-domain contracts for the layout shell and in-memory adapters used by tests.
//!
//! This crate is the API-first boundary between the layout runtime and the document it renders
//! into. It exposes the rendering-surface and breakpoint-subscription service traits, while
//! concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod breakpoints;
pub mod surface;

pub use breakpoints::{
    Breakpoint, BreakpointCallback, BreakpointService, ManualBreakpointService,
    NoopBreakpointService, MEDIUM_AND_UP_MEDIA_QUERY, SMALL_AND_DOWN_MEDIA_QUERY,
};
pub use surface::memory::MemoryLayoutSurface;
pub use surface::{AttachCallback, LayoutNode, LayoutSurface, NoopLayoutSurface};
