//! Shared UI primitive library for the layout shell.
//!
//! The crate owns the Leptos primitives that render the layout skeleton (navigation bar,
//! slide-out panels, overlay, content section, footer) and the stable `data-ui-*` DOM contract
//! consumed by the layout CSS. Element ids are supplied by the caller so the runtime can address
//! the same nodes through its rendering surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    ActionBar, AppTitle, ContentPanel, ContentSection, Footer, LayoutRoot, MenuToggle,
    NavigationBar, Overlay, PanelSide, SidePanel,
};

/// Convenience imports for crates composing layout views.
pub mod prelude {
    pub use crate::{
        ActionBar, AppTitle, ContentPanel, ContentSection, Footer, LayoutRoot, MenuToggle,
        NavigationBar, Overlay, PanelSide, SidePanel,
    };
}
