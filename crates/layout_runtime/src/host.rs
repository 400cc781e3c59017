//! Host-side execution of layout effects against the injected rendering surface.
//!
//! The reducer stays pure; everything that touches a [`LayoutSurface`] or a
//! [`BreakpointService`] goes through [`LayoutHostContext`] so tests can swap in the in-memory
//! adapters from `platform_host`.

mod render;

use std::rc::Rc;

use leptos::logging;
use platform_host::{BreakpointService, LayoutSurface, NoopBreakpointService};
use platform_host_web::{breakpoint_service, host_strategy_name, layout_surface};

use crate::{model::LayoutState, reducer::LayoutEffect};

#[derive(Clone)]
/// Host service bundle for layout side effects.
pub struct LayoutHostContext {
    surface: Rc<dyn LayoutSurface>,
    breakpoints: Rc<dyn BreakpointService>,
    host_strategy_name: &'static str,
}

impl Default for LayoutHostContext {
    fn default() -> Self {
        let breakpoints: Rc<dyn BreakpointService> = match breakpoint_service() {
            Ok(service) => Rc::new(service),
            Err(err) => {
                logging::warn!("breakpoint service unavailable, crossings ignored: {err}");
                Rc::new(NoopBreakpointService)
            }
        };
        Self {
            surface: Rc::new(layout_surface()),
            breakpoints,
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl std::fmt::Debug for LayoutHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutHostContext")
            .field("host_strategy_name", &self.host_strategy_name)
            .finish_non_exhaustive()
    }
}

impl LayoutHostContext {
    /// Builds a host context from explicit services.
    pub fn new(surface: Rc<dyn LayoutSurface>, breakpoints: Rc<dyn BreakpointService>) -> Self {
        Self {
            surface,
            breakpoints,
            host_strategy_name: "custom",
        }
    }

    /// Returns the configured rendering surface.
    pub fn surface(&self) -> Rc<dyn LayoutSurface> {
        self.surface.clone()
    }

    /// Returns the configured breakpoint service.
    pub fn breakpoint_service(&self) -> Rc<dyn BreakpointService> {
        self.breakpoints.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Renders every node from `state`, replacing whatever the surface currently shows.
    pub fn render_all(&self, state: &LayoutState) {
        render::render_all(&self.surface, state);
    }

    /// Executes a single [`LayoutEffect`] emitted by the reducer against the post-transition
    /// `state`.
    ///
    /// Listener notification is owned by the controller; this method ignores
    /// [`LayoutEffect::NotifyLeftPanelListeners`].
    pub fn run_layout_effect(&self, state: &LayoutState, effect: LayoutEffect) {
        let surface = &self.surface;
        match effect {
            LayoutEffect::RenderLeftPanel => render::render_left_panel(surface, state),
            LayoutEffect::RenderRightPanel => render::render_right_panel(surface, state),
            LayoutEffect::RenderOverlay => render::render_overlay(surface, state),
            LayoutEffect::RenderFooter => render::render_footer(surface, state),
            LayoutEffect::UpdateContentBottomPadding => render::update_content_padding(surface),
            LayoutEffect::ClearContentBottomPadding => render::clear_content_padding(surface),
            LayoutEffect::RenderLeftPanelSize { previous } => {
                render::render_left_panel_size(surface, previous, state.left_panel_size)
            }
            LayoutEffect::RenderLeftPanelSpan => render::render_left_panel_span(surface, state),
            LayoutEffect::RenderContentFit => render::render_content_fit(surface, state),
            LayoutEffect::UpdateContentMargin => {
                if let Some(height) = state.header_height.clone() {
                    render::update_content_margin(surface, height);
                }
            }
            LayoutEffect::RenderTitle => render::render_title(surface, state),
            LayoutEffect::ScrollToTop => surface.scroll_to_top(),
            LayoutEffect::NotifyLeftPanelListeners(_) => {}
        }
    }
}
