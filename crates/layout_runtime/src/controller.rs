//! Builder-style controller owning the layout state machine.
//!
//! [`LayoutController`] is a cheap `Clone` handle. Every mutator funnels through
//! [`reduce_layout`], then runs the resulting effects against the injected
//! [`LayoutHostContext`] and notifies left-panel listeners. Mutator calls made while a transition
//! is being applied (from a listener, for example) are ignored and logged.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use leptos::logging;
use platform_host::{Breakpoint, LayoutNode};

use crate::{
    config::{LayoutConfig, LayoutConfigError},
    host::LayoutHostContext,
    listeners::{ListenerId, ListenerSet},
    model::{FooterFixMode, LayoutState, LeftPanelSize},
    reducer::{reduce_layout, LayoutAction, LayoutEffect},
};

/// Lifecycle hook registered through [`LayoutController::on_show`] or
/// [`LayoutController::on_remove`].
pub type LifecycleHandler = Rc<dyn Fn()>;

struct LayoutInner {
    state: RefCell<LayoutState>,
    listeners: RefCell<ListenerSet>,
    in_transition: Cell<bool>,
    shown: Cell<bool>,
    host: LayoutHostContext,
    show_handlers: RefCell<Vec<LifecycleHandler>>,
    remove_handlers: RefCell<Vec<LifecycleHandler>>,
}

struct TransitionGuard<'a>(&'a Cell<bool>);

impl Drop for TransitionGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[derive(Clone)]
/// Controller for the layout shell panels, overlay and footer.
pub struct LayoutController {
    inner: Rc<LayoutInner>,
}

impl std::fmt::Debug for LayoutController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutController")
            .field("state", &*self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("shown", &self.inner.shown.get())
            .finish()
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new(LayoutHostContext::default())
    }
}

impl LayoutController {
    /// Creates a controller in the initial state (panels hidden, left panel floating, footer
    /// hidden and unfixed), renders it, and subscribes the footer to breakpoint crossings.
    pub fn new(host: LayoutHostContext) -> Self {
        let controller = Self {
            inner: Rc::new(LayoutInner {
                state: RefCell::new(LayoutState::default()),
                listeners: RefCell::new(ListenerSet::default()),
                in_transition: Cell::new(false),
                shown: Cell::new(false),
                host,
                show_handlers: RefCell::new(Vec::new()),
                remove_handlers: RefCell::new(Vec::new()),
            }),
        };
        controller
            .inner
            .host
            .render_all(&controller.inner.state.borrow());

        let breakpoints = controller.inner.host.breakpoint_service();
        let weak = controller.downgrade();
        breakpoints.on_enter_small(Rc::new(move || {
            if let Some(controller) = upgrade(&weak) {
                controller.on_breakpoint_enter_small();
            }
        }));
        let weak = controller.downgrade();
        breakpoints.on_enter_medium_or_above(Rc::new(move || {
            if let Some(controller) = upgrade(&weak) {
                controller.on_breakpoint_enter_medium_or_above();
            }
        }));
        controller
    }

    /// Creates a controller and applies `config` to it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutConfigError`] when `config` fails validation.
    pub fn from_config(
        host: LayoutHostContext,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        let controller = Self::new(host);
        controller
            .set_title(config.title.clone())
            .set_left_panel_size(config.left_panel_size)
            .set_footer_auto_unfix(config.footer.auto_unfix_for_small_screens);
        if config.span_left_panel_up {
            controller.span_left_panel_up();
        }
        if config.hide_nav_bar_expand {
            controller.hide_nav_bar_expand();
        }
        if config.fit_width {
            controller.fit_width();
        }
        if config.fit_height {
            controller.fit_height();
        }
        if let Some(height) = &config.header_height {
            controller.set_header_height(height.clone());
        }
        if config.footer.visible {
            controller.show_footer();
        }
        if config.footer.fixed {
            controller.fix_footer();
            if controller.inner.host.breakpoint_service().current() == Some(Breakpoint::Small) {
                controller.on_breakpoint_enter_small();
            }
        }
        if config.left_panel_disabled {
            controller.disable_left_panel();
        } else if config.auto_fix_left_panel {
            controller.auto_fix_left_panel();
        }
        Ok(controller)
    }

    fn downgrade(&self) -> Weak<LayoutInner> {
        Rc::downgrade(&self.inner)
    }

    /// Applies `action` and executes its effects.
    ///
    /// Ignored (with a warning) while another action is being applied.
    pub fn dispatch(&self, action: LayoutAction) -> &Self {
        if self.inner.in_transition.replace(true) {
            logging::warn!("ignoring reentrant layout action {action:?}");
            return self;
        }
        let _guard = TransitionGuard(&self.inner.in_transition);

        let (state, effects) = {
            let mut state = self.inner.state.borrow_mut();
            let effects = reduce_layout(&mut state, action);
            (state.clone(), effects)
        };
        for effect in effects {
            match effect {
                LayoutEffect::NotifyLeftPanelListeners(visible) => self.notify(visible),
                effect => self.inner.host.run_layout_effect(&state, effect),
            }
        }
        self
    }

    fn notify(&self, visible: bool) {
        let listeners = self.inner.listeners.borrow().snapshot();
        for listener in listeners {
            listener(visible);
        }
    }

    /// Shows the left panel, hiding the right panel first. No-op while disabled.
    pub fn show_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::ShowLeftPanel)
    }

    /// Hides the left panel. No-op while pinned or disabled.
    pub fn hide_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::HideLeftPanel)
    }

    /// Shows the left panel when hidden and hides it when visible. Wired to the menu toggle.
    pub fn toggle_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::ToggleLeftPanel)
    }

    /// Shows the right panel, hiding the left panel first unless it is pinned.
    pub fn show_right_panel(&self) -> &Self {
        self.dispatch(LayoutAction::ShowRightPanel)
    }

    /// Hides the right panel.
    pub fn hide_right_panel(&self) -> &Self {
        self.dispatch(LayoutAction::HideRightPanel)
    }

    /// Shows the right panel when hidden and hides it when visible.
    pub fn toggle_right_panel(&self) -> &Self {
        self.dispatch(LayoutAction::ToggleRightPanel)
    }

    /// Hides both panels; the left one stays open while pinned.
    pub fn hide_panels(&self) -> &Self {
        self.dispatch(LayoutAction::HidePanels)
    }

    /// Shows and pins the left panel. No-op while disabled.
    pub fn fix_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::FixLeftPanel)
    }

    /// Returns the left panel to floating mode without changing its visibility.
    pub fn unfix_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::UnfixLeftPanel)
    }

    /// Unpins and hides the left panel, then ignores show requests until re-enabled.
    pub fn disable_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::DisableLeftPanel)
    }

    /// Lifts [`LayoutController::disable_left_panel`]. The panel comes back floating and
    /// hidden; a panel that is not disabled is left alone.
    pub fn enable_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::EnableLeftPanel)
    }

    /// Pins the left panel on medium-or-above screens and floats it on small ones.
    ///
    /// Applies the current breakpoint immediately when the service knows it. Pinning waits until
    /// the left panel node is attached.
    pub fn auto_fix_left_panel(&self) -> &Self {
        let breakpoints = self.inner.host.breakpoint_service();
        let weak = self.downgrade();
        breakpoints.on_enter_medium_or_above(Rc::new(move || {
            if let Some(controller) = upgrade(&weak) {
                controller.fix_left_panel_when_attached();
            }
        }));
        let weak = self.downgrade();
        breakpoints.on_enter_small(Rc::new(move || {
            if let Some(controller) = upgrade(&weak) {
                controller.unfix_left_panel().hide_left_panel();
            }
        }));

        if breakpoints.current() == Some(Breakpoint::MediumOrAbove) {
            self.fix_left_panel_when_attached();
        }
        self
    }

    fn fix_left_panel_when_attached(&self) {
        let weak = self.downgrade();
        let result = self.inner.host.surface().on_attached(
            LayoutNode::LeftPanel,
            Box::new(move || {
                if let Some(controller) = upgrade(&weak) {
                    controller.fix_left_panel();
                }
            }),
        );
        if let Err(err) = result {
            logging::warn!("left panel auto-fix skipped: {err}");
        }
    }

    /// Handles a crossing into the small breakpoint: a fixed footer is unfixed while auto-unfix
    /// is enabled.
    pub fn on_breakpoint_enter_small(&self) -> &Self {
        self.dispatch(LayoutAction::BreakpointEnteredSmall)
    }

    /// Handles a crossing into the medium-or-above breakpoint: an auto-unfixed, visible footer is
    /// fixed again.
    pub fn on_breakpoint_enter_medium_or_above(&self) -> &Self {
        self.dispatch(LayoutAction::BreakpointEnteredMediumOrAbove)
    }

    /// Registers `listener`, called with the left panel visibility after every show or hide.
    pub fn on_left_panel_state_changed(&self, listener: impl Fn(bool) + 'static) -> ListenerId {
        self.inner.listeners.borrow_mut().register(Rc::new(listener))
    }

    /// Removes a listener. Returns `false` when `id` is not registered.
    pub fn remove_left_panel_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.borrow_mut().remove(id)
    }

    /// Shows the footer.
    pub fn show_footer(&self) -> &Self {
        self.dispatch(LayoutAction::ShowFooter)
    }

    /// Hides the footer. Its fix mode is kept, including an auto-unfix waiting for a
    /// medium-or-above crossing.
    pub fn hide_footer(&self) -> &Self {
        self.dispatch(LayoutAction::HideFooter)
    }

    /// Pins the footer and pads the content by its height once the footer is attached.
    pub fn fix_footer(&self) -> &Self {
        self.dispatch(LayoutAction::FixFooter)
    }

    /// Lets the footer scroll with the content and clears the content padding.
    pub fn unfix_footer(&self) -> &Self {
        self.dispatch(LayoutAction::UnfixFooter)
    }

    /// Enables or disables unfixing a fixed footer on small screens.
    pub fn set_footer_auto_unfix(&self, enabled: bool) -> &Self {
        self.dispatch(LayoutAction::SetFooterAutoUnfix { enabled })
    }

    /// Swaps the document width token (`sm`, `md` or `lg`).
    pub fn set_left_panel_size(&self, size: LeftPanelSize) -> &Self {
        self.dispatch(LayoutAction::SetLeftPanelSize { size })
    }

    /// Lets the left panel extend over the navigation bar. There is no inverse.
    pub fn span_left_panel_up(&self) -> &Self {
        self.dispatch(LayoutAction::SpanLeftPanelUp)
    }

    /// Marks the content section and content panel with `fit-width`.
    pub fn fit_width(&self) -> &Self {
        self.dispatch(LayoutAction::SetFitWidth { enabled: true })
    }

    pub fn unfit_width(&self) -> &Self {
        self.dispatch(LayoutAction::SetFitWidth { enabled: false })
    }

    /// Marks the content section and footer with `fit-height`.
    pub fn fit_height(&self) -> &Self {
        self.dispatch(LayoutAction::SetFitHeight { enabled: true })
    }

    pub fn unfit_height(&self) -> &Self {
        self.dispatch(LayoutAction::SetFitHeight { enabled: false })
    }

    /// Sets the navigation bar height; the content top margin follows it plus a fixed gap once
    /// the bar is attached.
    pub fn set_header_height(&self, height: impl Into<String>) -> &Self {
        self.dispatch(LayoutAction::SetHeaderHeight {
            height: height.into(),
        })
    }

    /// Replaces the navigation bar title text.
    pub fn set_title(&self, title: impl Into<String>) -> &Self {
        self.dispatch(LayoutAction::SetTitle {
            title: title.into(),
        })
    }

    /// Hides the menu toggle on every screen size. The left panel can still be opened through
    /// the controller.
    pub fn hide_nav_bar_expand(&self) -> &Self {
        self.dispatch(LayoutAction::HideNavBarExpand)
    }

    /// Hides the menu toggle while the viewport is in `breakpoint`.
    ///
    /// The toggle gets a `hide-on-*` class and the stylesheet does the hiding, so no breakpoint
    /// subscription is involved. A later call replaces the range.
    pub fn hide_nav_bar_expand_on(&self, breakpoint: Breakpoint) -> &Self {
        self.dispatch(LayoutAction::HideNavBarExpandOn { breakpoint })
    }

    pub fn hide_nav_bar_expand_on_small_down(&self) -> &Self {
        self.hide_nav_bar_expand_on(Breakpoint::Small)
    }

    /// Takes the left panel and the menu toggle out of the page (`display: none`) and marks the
    /// document `ls-hidden`.
    ///
    /// Panel state is untouched: show, hide and fix requests still update it and are rendered
    /// once the panel is added back.
    pub fn remove_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::RemoveLeftPanel)
    }

    /// Reverses [`LayoutController::remove_left_panel`].
    pub fn add_left_panel(&self) -> &Self {
        self.dispatch(LayoutAction::AddLeftPanel)
    }

    /// Scrolls back to the top after the application content was replaced.
    pub fn reset_content_scroll(&self) -> &Self {
        self.dispatch(LayoutAction::ContentReplaced)
    }

    /// Re-renders every node from the current state.
    ///
    /// Call after the layout DOM is (re)built so classes set before mount are not lost.
    pub fn sync_surface(&self) -> &Self {
        let state = self.state();
        self.inner.host.render_all(&state);
        self
    }

    /// Attaches the layout root and runs `on_show` handlers. Later calls are no-ops until
    /// [`LayoutController::remove`].
    pub fn show(&self) -> &Self {
        if self.inner.shown.replace(true) {
            return self;
        }
        if let Err(err) = self.inner.host.surface().attach_root() {
            logging::warn!("layout root attach failed: {err}");
        }
        let handlers = self.inner.show_handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
        self
    }

    /// Registers a handler run when the layout is shown.
    pub fn on_show(&self, handler: impl Fn() + 'static) -> &Self {
        self.inner.show_handlers.borrow_mut().push(Rc::new(handler));
        self
    }

    /// Detaches the layout root, drops every left-panel listener, and runs `on_remove` handlers.
    pub fn remove(&self) -> &Self {
        self.inner.listeners.borrow_mut().clear();
        self.inner.host.surface().detach_root();
        self.inner.shown.set(false);
        let handlers = self.inner.remove_handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
        self
    }

    /// Registers a handler run when the layout is removed.
    pub fn on_remove(&self, handler: impl Fn() + 'static) -> &Self {
        self.inner
            .remove_handlers
            .borrow_mut()
            .push(Rc::new(handler));
        self
    }

    /// Whether [`LayoutController::show`] ran since the last remove.
    pub fn is_shown(&self) -> bool {
        self.inner.shown.get()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> LayoutState {
        self.inner.state.borrow().clone()
    }

    pub fn is_left_panel_visible(&self) -> bool {
        self.inner.state.borrow().is_left_panel_visible()
    }

    pub fn is_right_panel_visible(&self) -> bool {
        self.inner.state.borrow().is_right_panel_visible()
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.inner.state.borrow().is_overlay_visible()
    }

    pub fn is_left_panel_fixed(&self) -> bool {
        self.inner.state.borrow().is_left_panel_fixed()
    }

    pub fn is_left_panel_disabled(&self) -> bool {
        self.inner.state.borrow().is_left_panel_disabled()
    }

    pub fn is_left_panel_removed(&self) -> bool {
        self.inner.state.borrow().left_panel_removed
    }

    pub fn is_footer_visible(&self) -> bool {
        self.inner.state.borrow().is_footer_visible()
    }

    pub fn is_footer_fixed(&self) -> bool {
        self.inner.state.borrow().is_footer_fixed()
    }

    pub fn footer_fix_mode(&self) -> FooterFixMode {
        self.inner.state.borrow().footer.fix_mode
    }

    pub fn left_panel_size(&self) -> LeftPanelSize {
        self.inner.state.borrow().left_panel_size
    }

    /// Number of registered left-panel listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Returns the host context the controller renders through.
    pub fn host(&self) -> &LayoutHostContext {
        &self.inner.host
    }
}

fn upgrade(weak: &Weak<LayoutInner>) -> Option<LayoutController> {
    weak.upgrade().map(|inner| LayoutController { inner })
}

#[cfg(test)]
mod tests {
    use platform_host::{LayoutSurface, ManualBreakpointService, MemoryLayoutSurface};
    use pretty_assertions::assert_eq;

    use super::*;

    fn controller() -> (LayoutController, MemoryLayoutSurface, ManualBreakpointService) {
        let surface = MemoryLayoutSurface::default();
        let breakpoints = ManualBreakpointService::default();
        let controller = LayoutController::new(LayoutHostContext::new(
            Rc::new(surface.clone()),
            Rc::new(breakpoints.clone()),
        ));
        (controller, surface, breakpoints)
    }

    #[test]
    fn mutators_chain_and_render() {
        let (controller, surface, _) = controller();
        controller.show_left_panel().set_title("Mail");

        assert!(controller.is_left_panel_visible());
        assert!(surface.has_class(LayoutNode::Document, "panel-open"));
        assert!(!surface.has_class(LayoutNode::LeftPanel, "slide-out-left"));
        assert_eq!(surface.text(LayoutNode::Title), Some("Mail".to_string()));
    }

    #[test]
    fn reentrant_listener_calls_are_ignored() {
        let (controller, _, _) = controller();
        let weak = controller.downgrade();
        controller.on_left_panel_state_changed(move |visible| {
            if visible {
                if let Some(controller) = upgrade(&weak) {
                    controller.hide_left_panel();
                }
            }
        });

        controller.show_left_panel();
        assert!(controller.is_left_panel_visible());

        controller.hide_left_panel();
        assert!(!controller.is_left_panel_visible());
    }

    #[test]
    fn listener_removed_during_dispatch_still_sees_current_round() {
        let (controller, _, _) = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let slot: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let weak = controller.downgrade();
        let slot_for_first = slot.clone();
        controller.on_left_panel_state_changed(move |_| {
            if let (Some(controller), Some(id)) = (upgrade(&weak), slot_for_first.get()) {
                controller.remove_left_panel_listener(id);
            }
        });
        let seen_for_second = seen.clone();
        slot.set(Some(controller.on_left_panel_state_changed(move |visible| {
            seen_for_second.borrow_mut().push(visible)
        })));

        controller.show_left_panel().hide_left_panel();
        assert_eq!(*seen.borrow(), vec![true]);
        assert_eq!(controller.listener_count(), 1);
    }

    #[test]
    fn footer_follows_breakpoints_through_subscriptions() {
        let (controller, surface, breakpoints) = controller();
        surface.attach_root().expect("attach");
        surface.set_client_height(LayoutNode::Footer, 48.0);
        controller.show_footer().fix_footer();
        assert_eq!(
            surface.style(LayoutNode::Content, "padding-bottom"),
            Some("48px".to_string())
        );

        breakpoints.resize(500);
        assert_eq!(
            controller.footer_fix_mode(),
            FooterFixMode::AutoUnfixedForSmallScreen
        );
        assert!(!surface.has_class(LayoutNode::Footer, "fixed"));
        assert_eq!(surface.style(LayoutNode::Content, "padding-bottom"), None);

        breakpoints.resize(1200);
        assert!(controller.is_footer_fixed());
        assert!(surface.has_class(LayoutNode::Footer, "fixed"));
    }

    #[test]
    fn auto_fix_pins_after_attach_and_floats_on_small() {
        let (controller, surface, breakpoints) = controller();
        breakpoints.enter(Breakpoint::MediumOrAbove);
        controller.auto_fix_left_panel();
        assert!(!controller.is_left_panel_fixed());
        assert_eq!(surface.pending_attach_callbacks(), 1);

        controller.show();
        assert!(controller.is_left_panel_fixed());
        assert!(controller.is_left_panel_visible());
        assert!(surface.has_class(LayoutNode::Document, "l-fixed"));

        breakpoints.resize(400);
        assert!(!controller.is_left_panel_fixed());
        assert!(!controller.is_left_panel_visible());
    }

    #[test]
    fn show_runs_once_and_remove_clears_listeners() {
        let (controller, surface, _) = controller();
        let shows = Rc::new(Cell::new(0));
        let removes = Rc::new(Cell::new(0));
        let shows_for_cb = shows.clone();
        let removes_for_cb = removes.clone();
        controller
            .on_show(move || shows_for_cb.set(shows_for_cb.get() + 1))
            .on_remove(move || removes_for_cb.set(removes_for_cb.get() + 1));
        controller.on_left_panel_state_changed(|_| {});

        controller.show().show();
        assert_eq!(shows.get(), 1);
        assert!(surface.is_root_attached());

        controller.remove();
        assert_eq!(removes.get(), 1);
        assert_eq!(controller.listener_count(), 0);
        assert!(!surface.is_root_attached());
        assert!(!controller.is_shown());
    }

    #[test]
    fn from_config_applies_every_field() {
        let surface = MemoryLayoutSurface::default();
        let breakpoints = ManualBreakpointService::default();
        breakpoints.enter(Breakpoint::Small);
        let config = LayoutConfig::from_toml_str(
            r#"
title = "Reports"
left_panel_size = "sm"
fit_width = true
fit_height = true
span_left_panel_up = true

[footer]
visible = true
fixed = true
"#,
        )
        .expect("config");

        let controller = LayoutController::from_config(
            LayoutHostContext::new(Rc::new(surface.clone()), Rc::new(breakpoints.clone())),
            &config,
        )
        .expect("controller");

        assert_eq!(controller.state().title, "Reports");
        assert_eq!(controller.left_panel_size(), LeftPanelSize::Small);
        assert!(surface.has_class(LayoutNode::Document, "sm"));
        assert!(surface.has_class(LayoutNode::Document, "l-panel-span-up"));
        assert!(surface.has_class(LayoutNode::Content, "fit-width"));
        assert!(surface.has_class(LayoutNode::ContentPanel, "fit-width"));
        assert!(surface.has_class(LayoutNode::Content, "fit-height"));
        assert!(surface.has_class(LayoutNode::Footer, "fit-height"));
        assert_eq!(
            controller.footer_fix_mode(),
            FooterFixMode::AutoUnfixedForSmallScreen
        );

        breakpoints.resize(1024);
        assert!(controller.is_footer_fixed());
    }

    #[test]
    fn disabled_left_panel_hides_panel_and_menu_toggle() {
        let (controller, surface, _) = controller();
        let display = |node| surface.style(node, "display");

        controller.disable_left_panel();
        assert_eq!(display(LayoutNode::LeftPanel), Some("none".to_string()));
        assert_eq!(display(LayoutNode::MenuToggle), Some("none".to_string()));
        assert!(!surface.has_class(LayoutNode::MenuToggle, "bars"));
        assert!(surface.has_class(LayoutNode::MenuToggle, "disabled"));

        controller.enable_left_panel();
        assert_eq!(display(LayoutNode::LeftPanel), Some("block".to_string()));
        assert_eq!(display(LayoutNode::MenuToggle), Some("block".to_string()));
        assert!(surface.has_class(LayoutNode::MenuToggle, "bars"));
        assert!(!surface.has_class(LayoutNode::MenuToggle, "disabled"));

        controller.hide_nav_bar_expand().disable_left_panel().enable_left_panel();
        assert_eq!(display(LayoutNode::MenuToggle), Some("none".to_string()));
        assert_eq!(display(LayoutNode::LeftPanel), Some("block".to_string()));
    }

    #[test]
    fn removed_left_panel_swaps_document_classes() {
        let (controller, surface, _) = controller();
        controller.remove_left_panel();
        assert!(controller.is_left_panel_removed());
        assert_eq!(
            surface.style(LayoutNode::LeftPanel, "display"),
            Some("none".to_string())
        );
        assert_eq!(
            surface.style(LayoutNode::MenuToggle, "display"),
            Some("none".to_string())
        );
        assert!(surface.has_class(LayoutNode::Document, "ls-hidden"));
        assert!(!surface.has_class(LayoutNode::Document, "ls-closed"));

        controller.show_left_panel();
        assert!(controller.is_left_panel_visible());
        assert_eq!(
            surface.style(LayoutNode::LeftPanel, "display"),
            Some("none".to_string())
        );

        controller.hide_left_panel().add_left_panel();
        assert!(!controller.is_left_panel_removed());
        assert_eq!(
            surface.style(LayoutNode::LeftPanel, "display"),
            Some("block".to_string())
        );
        assert_eq!(
            surface.style(LayoutNode::MenuToggle, "display"),
            Some("block".to_string())
        );
        assert!(!surface.has_class(LayoutNode::Document, "ls-hidden"));
        assert!(surface.has_class(LayoutNode::Document, "ls-closed"));
    }

    #[test]
    fn nav_bar_expand_hidden_on_breakpoint_uses_one_class() {
        let (controller, surface, _) = controller();
        controller.hide_nav_bar_expand_on_small_down();
        assert!(surface.has_class(LayoutNode::MenuToggle, "hide-on-small-and-down"));
        assert_eq!(
            surface.style(LayoutNode::MenuToggle, "display"),
            Some("block".to_string())
        );

        controller.hide_nav_bar_expand_on(Breakpoint::MediumOrAbove);
        assert!(!surface.has_class(LayoutNode::MenuToggle, "hide-on-small-and-down"));
        assert!(surface.has_class(LayoutNode::MenuToggle, "hide-on-medium-and-up"));
    }

    #[test]
    fn from_config_rejects_invalid_header_height() {
        let config = LayoutConfig {
            header_height: Some("tall".to_string()),
            ..LayoutConfig::default()
        };
        let err = LayoutController::from_config(
            LayoutHostContext::new(
                Rc::new(MemoryLayoutSurface::default()),
                Rc::new(ManualBreakpointService::default()),
            ),
            &config,
        )
        .expect_err("invalid");
        assert!(matches!(err, LayoutConfigError::InvalidHeaderHeight(_)));
    }
}
