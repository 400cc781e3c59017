//! Rendering-surface contracts for the layout shell.
//!
//! The layout runtime never touches the DOM directly. It emits state changes that the host layer
//! maps onto a [`LayoutSurface`]: class toggles, inline style properties and attachment queries
//! against a fixed set of [`LayoutNode`] slots.

pub mod memory;

use serde::{Deserialize, Serialize};

/// Deferred callback run once a node becomes attached to the document.
pub type AttachCallback = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Addressable node slots of the layout shell.
pub enum LayoutNode {
    /// The document body; carries document-wide layout classes (`panel-open`, `l-fixed`, ...).
    Document,
    /// The layout root container.
    Root,
    /// Top navigation bar.
    NavigationBar,
    /// Menu button in the navigation bar that toggles the left panel.
    MenuToggle,
    /// Application title text inside the navigation bar.
    Title,
    /// Left slide-out panel.
    LeftPanel,
    /// Right slide-out panel.
    RightPanel,
    /// Dimming overlay shown while a floating panel is open.
    Overlay,
    /// Content section wrapper.
    Content,
    /// Inner content container holding application views.
    ContentPanel,
    /// Page footer.
    Footer,
}

impl LayoutNode {
    /// Every addressable node, in render order.
    pub const ALL: [LayoutNode; 11] = [
        Self::Document,
        Self::Root,
        Self::Overlay,
        Self::NavigationBar,
        Self::MenuToggle,
        Self::Title,
        Self::LeftPanel,
        Self::RightPanel,
        Self::Content,
        Self::ContentPanel,
        Self::Footer,
    ];

    /// Returns the stable DOM id rendered for this node, or `None` for the document body.
    pub const fn dom_id(self) -> Option<&'static str> {
        match self {
            Self::Document => None,
            Self::Root => Some("layout-root"),
            Self::NavigationBar => Some("layout-navigation-bar"),
            Self::MenuToggle => Some("layout-menu-toggle"),
            Self::Title => Some("layout-title"),
            Self::LeftPanel => Some("layout-left-panel"),
            Self::RightPanel => Some("layout-right-panel"),
            Self::Overlay => Some("layout-overlay"),
            Self::Content => Some("layout-content"),
            Self::ContentPanel => Some("layout-content-panel"),
            Self::Footer => Some("layout-footer"),
        }
    }

    /// Returns a stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Root => "root",
            Self::NavigationBar => "navigation-bar",
            Self::MenuToggle => "menu-toggle",
            Self::Title => "title",
            Self::LeftPanel => "left-panel",
            Self::RightPanel => "right-panel",
            Self::Overlay => "overlay",
            Self::Content => "content",
            Self::ContentPanel => "content-panel",
            Self::Footer => "footer",
        }
    }
}

/// Host service for the document tree the layout renders into.
///
/// Implementations are driven from the UI thread only. Callbacks handed to
/// [`LayoutSurface::on_attached`] may call back into the layout runtime, so implementations must
/// not hold internal borrows while running them.
pub trait LayoutSurface {
    /// Adds (`enabled = true`) or removes a CSS class on `node`.
    fn set_class(&self, node: LayoutNode, class: &str, enabled: bool);

    /// Returns whether `node` currently carries `class`.
    fn has_class(&self, node: LayoutNode, class: &str) -> bool;

    /// Sets an inline style property on `node`, or removes it when `value` is `None`.
    fn set_style(&self, node: LayoutNode, property: &str, value: Option<&str>);

    /// Replaces the text content of `node`.
    fn set_text(&self, node: LayoutNode, text: &str);

    /// Returns whether `node` is attached to the live document.
    fn is_attached(&self, node: LayoutNode) -> bool;

    /// Runs `callback` once `node` is attached; runs it immediately when already attached.
    ///
    /// # Errors
    ///
    /// Returns an error when attachment cannot be observed. `callback` is dropped unrun.
    fn on_attached(&self, node: LayoutNode, callback: AttachCallback) -> Result<(), String>;

    /// Returns the rendered height of `node` in CSS pixels (`0.0` when detached).
    fn client_height(&self, node: LayoutNode) -> f64;

    /// Attaches the layout root to the document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document or the root node is unavailable.
    fn attach_root(&self) -> Result<(), String>;

    /// Detaches the layout root from the document.
    fn detach_root(&self);

    /// Scrolls the document back to the top.
    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op surface for unsupported targets; every node reports as detached.
pub struct NoopLayoutSurface;

impl LayoutSurface for NoopLayoutSurface {
    fn set_class(&self, _node: LayoutNode, _class: &str, _enabled: bool) {}

    fn has_class(&self, _node: LayoutNode, _class: &str) -> bool {
        false
    }

    fn set_style(&self, _node: LayoutNode, _property: &str, _value: Option<&str>) {}

    fn set_text(&self, _node: LayoutNode, _text: &str) {}

    fn is_attached(&self, _node: LayoutNode) -> bool {
        false
    }

    fn on_attached(&self, _node: LayoutNode, _callback: AttachCallback) -> Result<(), String> {
        Ok(())
    }

    fn client_height(&self, _node: LayoutNode) -> f64 {
        0.0
    }

    fn attach_root(&self) -> Result<(), String> {
        Ok(())
    }

    fn detach_root(&self) {}

    fn scroll_to_top(&self) {}
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn dom_ids_are_unique_and_document_has_none() {
        let ids: Vec<_> = LayoutNode::ALL.iter().filter_map(|n| n.dom_id()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), LayoutNode::ALL.len() - 1);
        assert_eq!(unique.len(), ids.len());
        assert_eq!(LayoutNode::Document.dom_id(), None);
    }

    #[test]
    fn noop_surface_reports_detached_and_drops_callbacks() {
        let surface = NoopLayoutSurface;
        let surface_obj: &dyn LayoutSurface = &surface;
        surface_obj.set_class(LayoutNode::LeftPanel, "slide-out-left", true);
        assert!(!surface_obj.has_class(LayoutNode::LeftPanel, "slide-out-left"));
        assert!(!surface_obj.is_attached(LayoutNode::Footer));
        assert_eq!(
            surface_obj.on_attached(LayoutNode::Footer, Box::new(|| panic!("must not run"))),
            Ok(())
        );
        assert_eq!(surface_obj.attach_root(), Ok(()));
    }
}
