use platform_host::{
    AttachCallback, Breakpoint, BreakpointCallback, BreakpointService, LayoutNode, LayoutSurface,
    NoopBreakpointService, NoopLayoutSurface,
};

use crate::{WebBreakpointService, WebLayoutSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// Inert adapters for server-side or test composition without a document.
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

/// Adapter enum that erases the concrete rendering backend behind [`LayoutSurface`].
#[derive(Debug, Clone)]
pub enum LayoutSurfaceAdapter {
    /// DOM-backed surface.
    Browser(WebLayoutSurface),
    /// No-op fallback.
    Headless(NoopLayoutSurface),
}

impl LayoutSurface for LayoutSurfaceAdapter {
    fn set_class(&self, node: LayoutNode, class: &str, enabled: bool) {
        match self {
            Self::Browser(surface) => surface.set_class(node, class, enabled),
            Self::Headless(surface) => surface.set_class(node, class, enabled),
        }
    }

    fn has_class(&self, node: LayoutNode, class: &str) -> bool {
        match self {
            Self::Browser(surface) => surface.has_class(node, class),
            Self::Headless(surface) => surface.has_class(node, class),
        }
    }

    fn set_style(&self, node: LayoutNode, property: &str, value: Option<&str>) {
        match self {
            Self::Browser(surface) => surface.set_style(node, property, value),
            Self::Headless(surface) => surface.set_style(node, property, value),
        }
    }

    fn set_text(&self, node: LayoutNode, text: &str) {
        match self {
            Self::Browser(surface) => surface.set_text(node, text),
            Self::Headless(surface) => surface.set_text(node, text),
        }
    }

    fn is_attached(&self, node: LayoutNode) -> bool {
        match self {
            Self::Browser(surface) => surface.is_attached(node),
            Self::Headless(surface) => surface.is_attached(node),
        }
    }

    fn on_attached(&self, node: LayoutNode, callback: AttachCallback) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.on_attached(node, callback),
            Self::Headless(surface) => surface.on_attached(node, callback),
        }
    }

    fn client_height(&self, node: LayoutNode) -> f64 {
        match self {
            Self::Browser(surface) => surface.client_height(node),
            Self::Headless(surface) => surface.client_height(node),
        }
    }

    fn attach_root(&self) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.attach_root(),
            Self::Headless(surface) => surface.attach_root(),
        }
    }

    fn detach_root(&self) {
        match self {
            Self::Browser(surface) => surface.detach_root(),
            Self::Headless(surface) => surface.detach_root(),
        }
    }

    fn scroll_to_top(&self) {
        match self {
            Self::Browser(surface) => surface.scroll_to_top(),
            Self::Headless(surface) => surface.scroll_to_top(),
        }
    }
}

/// Adapter enum that erases the concrete breakpoint backend behind [`BreakpointService`].
#[derive(Debug, Clone)]
pub enum BreakpointServiceAdapter {
    /// `matchMedia`-backed notifications.
    Browser(WebBreakpointService),
    /// Service that never fires.
    Headless(NoopBreakpointService),
}

impl BreakpointService for BreakpointServiceAdapter {
    fn on_enter_small(&self, callback: BreakpointCallback) {
        match self {
            Self::Browser(service) => service.on_enter_small(callback),
            Self::Headless(service) => service.on_enter_small(callback),
        }
    }

    fn on_enter_medium_or_above(&self, callback: BreakpointCallback) {
        match self {
            Self::Browser(service) => service.on_enter_medium_or_above(callback),
            Self::Headless(service) => service.on_enter_medium_or_above(callback),
        }
    }

    fn current(&self) -> Option<Breakpoint> {
        match self {
            Self::Browser(service) => service.current(),
            Self::Headless(service) => service.current(),
        }
    }
}

/// Builds the rendering surface for the selected host strategy.
pub fn layout_surface() -> LayoutSurfaceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => LayoutSurfaceAdapter::Browser(WebLayoutSurface::default()),
        HostStrategy::Headless => LayoutSurfaceAdapter::Headless(NoopLayoutSurface),
    }
}

/// Builds the breakpoint service for the selected host strategy.
///
/// # Errors
///
/// Returns an error when the browser strategy cannot install its `matchMedia` listener. Callers
/// choose their own fallback, typically [`NoopBreakpointService`].
pub fn breakpoint_service() -> Result<BreakpointServiceAdapter, String> {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            WebBreakpointService::install().map(BreakpointServiceAdapter::Browser)
        }
        HostStrategy::Headless => Ok(BreakpointServiceAdapter::Headless(NoopBreakpointService)),
    }
}

#[cfg(all(test, not(feature = "headless-host")))]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_is_browser() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(layout_surface(), LayoutSurfaceAdapter::Browser(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_breakpoint_service_installs_off_target() {
        let service = breakpoint_service().expect("install");
        assert!(matches!(service, BreakpointServiceAdapter::Browser(_)));
        assert_eq!(service.current(), None);
    }
}
