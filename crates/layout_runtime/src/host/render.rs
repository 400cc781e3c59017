//! State-to-surface mapping for each layout node.

use std::rc::{Rc, Weak};

use leptos::logging;
use platform_host::{Breakpoint, LayoutNode, LayoutSurface};

use crate::model::{LayoutState, LeftPanelSize, CONTENT_MARGIN_GAP_PX};

const SIZE_TOKENS: [LeftPanelSize; 3] = [
    LeftPanelSize::Small,
    LeftPanelSize::Default,
    LeftPanelSize::Large,
];

const HIDE_ON_TOKENS: [Breakpoint; 2] = [Breakpoint::Small, Breakpoint::MediumOrAbove];

fn display(visible: bool) -> Option<&'static str> {
    Some(if visible { "block" } else { "none" })
}

fn hide_on_token(breakpoint: Breakpoint) -> &'static str {
    match breakpoint {
        Breakpoint::Small => "hide-on-small-and-down",
        Breakpoint::MediumOrAbove => "hide-on-medium-and-up",
    }
}

/// Runs `update` against the surface once `node` is attached.
///
/// The pending callback lives inside the surface, so it only holds the surface weakly.
fn defer(
    surface: &Rc<dyn LayoutSurface>,
    node: LayoutNode,
    update: impl FnOnce(&dyn LayoutSurface) + 'static,
) {
    let weak: Weak<dyn LayoutSurface> = Rc::downgrade(surface);
    let result = surface.on_attached(
        node,
        Box::new(move || {
            if let Some(surface) = weak.upgrade() {
                update(surface.as_ref());
            }
        }),
    );
    if let Err(err) = result {
        logging::warn!("deferred {} update dropped: {err}", node.as_str());
    }
}

pub(super) fn render_all(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    render_left_panel(surface, state);
    render_right_panel(surface, state);
    render_overlay(surface, state);
    render_footer(surface, state);
    for size in SIZE_TOKENS {
        surface.set_class(LayoutNode::Document, size.token(), false);
    }
    surface.set_class(LayoutNode::Document, state.left_panel_size.token(), true);
    render_left_panel_span(surface, state);
    render_content_fit(surface, state);
    render_title(surface, state);
    if let Some(height) = state.header_height.clone() {
        update_content_margin(surface, height);
    }
}

pub(super) fn render_left_panel(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    let visible = state.is_left_panel_visible();
    let fixed = state.is_left_panel_fixed();
    let disabled = state.is_left_panel_disabled();
    let removed = state.left_panel_removed;
    surface.set_class(LayoutNode::LeftPanel, "slide-out-left", !visible);
    surface.set_style(LayoutNode::LeftPanel, "display", display(!disabled && !removed));
    surface.set_class(LayoutNode::Document, "panel-open", visible);
    surface.set_class(LayoutNode::Document, "l-fixed", fixed);
    surface.set_class(LayoutNode::Document, "ls-hidden", removed);
    surface.set_class(LayoutNode::Document, "ls-closed", !removed && !fixed);

    surface.set_class(LayoutNode::MenuToggle, "disabled", disabled);
    surface.set_class(LayoutNode::MenuToggle, "bars", !disabled);
    surface.set_style(
        LayoutNode::MenuToggle,
        "display",
        display(!disabled && !removed && !state.nav_bar_expand_hidden),
    );
    for breakpoint in HIDE_ON_TOKENS {
        surface.set_class(
            LayoutNode::MenuToggle,
            hide_on_token(breakpoint),
            state.nav_bar_expand_hidden_on == Some(breakpoint),
        );
    }
}

pub(super) fn render_right_panel(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    surface.set_class(
        LayoutNode::RightPanel,
        "slide-out-right",
        !state.is_right_panel_visible(),
    );
}

pub(super) fn render_overlay(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    surface.set_style(
        LayoutNode::Overlay,
        "display",
        display(state.is_overlay_visible()),
    );
}

pub(super) fn render_footer(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    surface.set_style(
        LayoutNode::Footer,
        "display",
        display(state.is_footer_visible()),
    );
    surface.set_class(LayoutNode::Footer, "fixed", state.is_footer_fixed());
}

/// Pads the content by the footer height once the footer is measurable.
pub(super) fn update_content_padding(surface: &Rc<dyn LayoutSurface>) {
    defer(surface, LayoutNode::Footer, |surface| {
        let height = surface.client_height(LayoutNode::Footer);
        surface.set_style(
            LayoutNode::Content,
            "padding-bottom",
            Some(&format!("{height}px")),
        );
    });
}

pub(super) fn clear_content_padding(surface: &Rc<dyn LayoutSurface>) {
    defer(surface, LayoutNode::Footer, |surface| {
        surface.set_style(LayoutNode::Content, "padding-bottom", None)
    });
}

pub(super) fn render_left_panel_size(
    surface: &Rc<dyn LayoutSurface>,
    previous: LeftPanelSize,
    current: LeftPanelSize,
) {
    surface.set_class(LayoutNode::Document, previous.token(), false);
    surface.set_class(LayoutNode::Document, current.token(), true);
}

pub(super) fn render_left_panel_span(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    surface.set_class(
        LayoutNode::Document,
        "l-panel-span-up",
        state.left_panel_span_up,
    );
}

pub(super) fn render_content_fit(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    surface.set_class(LayoutNode::Content, "fit-width", state.fit_width);
    surface.set_class(LayoutNode::ContentPanel, "fit-width", state.fit_width);
    surface.set_class(LayoutNode::Content, "fit-height", state.fit_height);
    surface.set_class(LayoutNode::Footer, "fit-height", state.fit_height);
}

/// Applies `height` to the navigation bar and pushes the content below it, once the bar is
/// measurable.
pub(super) fn update_content_margin(surface: &Rc<dyn LayoutSurface>, height: String) {
    defer(surface, LayoutNode::NavigationBar, move |surface| {
        surface.set_style(LayoutNode::NavigationBar, "height", Some(&height));
        let margin = surface.client_height(LayoutNode::NavigationBar) + CONTENT_MARGIN_GAP_PX;
        surface.set_style(LayoutNode::Content, "margin-top", Some(&format!("{margin}px")));
    });
}

pub(super) fn render_title(surface: &Rc<dyn LayoutSurface>, state: &LayoutState) {
    surface.set_text(LayoutNode::Title, &state.title);
}
