//! Shared structural, navigation, and overlay primitives for the layout shell.

use leptos::ev::MouseEvent;
use leptos::*;

mod layout;
mod overlays;
mod shell;

pub use layout::{ContentPanel, ContentSection};
pub use overlays::{Overlay, SidePanel};
pub use shell::{ActionBar, AppTitle, Footer, LayoutRoot, MenuToggle, NavigationBar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which edge a slide-out panel is anchored to.
pub enum PanelSide {
    /// Left edge; hosts navigation.
    Left,
    /// Right edge; hosts auxiliary tools.
    Right,
}

impl PanelSide {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Class applied while the panel is slid out of view.
    pub fn hidden_class(self) -> &'static str {
        match self {
            Self::Left => "slide-out-left",
            Self::Right => "slide-out-right",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn forward_click(on_click: Option<Callback<MouseEvent>>) -> impl Fn(MouseEvent) {
    move |ev| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_layout_class_appends_non_empty_classes() {
        assert_eq!(merge_layout_class("ui-footer", None), "ui-footer");
        assert_eq!(merge_layout_class("ui-footer", Some("")), "ui-footer");
        assert_eq!(
            merge_layout_class("ui-footer", Some("fit-height")),
            "ui-footer fit-height"
        );
    }

    #[test]
    fn panel_sides_use_distinct_slide_out_classes() {
        assert_eq!(PanelSide::Left.hidden_class(), "slide-out-left");
        assert_eq!(PanelSide::Right.hidden_class(), "slide-out-right");
        assert_eq!(PanelSide::Right.token(), "right");
    }
}
