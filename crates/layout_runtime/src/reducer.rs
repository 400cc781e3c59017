//! Reducer actions, side-effect intents, and transition logic for the layout shell.
//!
//! Every transition is total: actions that do not apply to the current state (showing a
//! disabled panel, hiding a pinned one) leave the state untouched and emit no effects.

use platform_host::Breakpoint;

use crate::model::{
    FooterFixMode, LayoutState, LeftPanelMode, LeftPanelSize, PanelState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_layout`] to mutate [`LayoutState`].
pub enum LayoutAction {
    /// Slide the left panel in (hides the right panel first).
    ShowLeftPanel,
    /// Slide the left panel out unless it is pinned or disabled.
    HideLeftPanel,
    /// Show the left panel when hidden, hide it when visible.
    ToggleLeftPanel,
    /// Slide the right panel in (hides the left panel first).
    ShowRightPanel,
    /// Slide the right panel out.
    HideRightPanel,
    /// Show the right panel when hidden, hide it when visible.
    ToggleRightPanel,
    /// Hide both panels (overlay click).
    HidePanels,
    /// Pin the left panel open.
    FixLeftPanel,
    /// Return a pinned left panel to floating mode without hiding it.
    UnfixLeftPanel,
    /// Unfix, hide, and disable the left panel.
    DisableLeftPanel,
    /// Re-enable a disabled left panel.
    EnableLeftPanel,
    /// The viewport crossed into the small breakpoint.
    BreakpointEnteredSmall,
    /// The viewport crossed into the medium-or-above breakpoint.
    BreakpointEnteredMediumOrAbove,
    /// Make the footer visible.
    ShowFooter,
    /// Hide the footer.
    HideFooter,
    /// Pin the footer to the bottom of the viewport.
    FixFooter,
    /// Let the footer scroll with the content.
    UnfixFooter,
    /// Enable or disable automatic footer unfixing on small screens.
    SetFooterAutoUnfix {
        /// Whether enter-small events unfix a fixed footer.
        enabled: bool,
    },
    /// Change the left panel width token.
    SetLeftPanelSize {
        /// New size.
        size: LeftPanelSize,
    },
    /// Let the left panel extend over the navigation bar.
    SpanLeftPanelUp,
    /// Stretch content to the full viewport width.
    SetFitWidth {
        /// Whether content fits the width.
        enabled: bool,
    },
    /// Stretch content to the full viewport height.
    SetFitHeight {
        /// Whether content fits the height.
        enabled: bool,
    },
    /// Set the navigation bar height (any CSS length).
    SetHeaderHeight {
        /// CSS length, e.g. `"72px"`.
        height: String,
    },
    /// Replace the application title.
    SetTitle {
        /// New title text.
        title: String,
    },
    /// Hide the navigation-bar menu toggle.
    HideNavBarExpand,
    /// Hide the menu toggle only while the viewport is in `breakpoint`.
    HideNavBarExpandOn {
        /// Range the toggle is hidden on; replaces any earlier range.
        breakpoint: Breakpoint,
    },
    /// Take the left panel and its menu toggle out of the page.
    RemoveLeftPanel,
    /// Put a removed left panel and its menu toggle back.
    AddLeftPanel,
    /// Application content was replaced; scroll back to the top.
    ContentReplaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_layout`] for the host layer to execute.
///
/// `Render*` effects are level-triggered: the host re-renders the named part from the state
/// snapshot taken after the reducer returns.
pub enum LayoutEffect {
    /// Sync left panel display and classes, document panel classes, and the menu toggle.
    RenderLeftPanel,
    /// Sync right panel classes.
    RenderRightPanel,
    /// Sync overlay display.
    RenderOverlay,
    /// Sync footer display and fixed class.
    RenderFooter,
    /// Pad the content by the footer height once the footer is attached.
    UpdateContentBottomPadding,
    /// Clear the content bottom padding once the footer is attached.
    ClearContentBottomPadding,
    /// Swap the document size token.
    RenderLeftPanelSize {
        /// Token to remove.
        previous: LeftPanelSize,
    },
    /// Sync the span-up document class.
    RenderLeftPanelSpan,
    /// Sync `fit-width` / `fit-height` classes.
    RenderContentFit,
    /// Apply the header height and recompute the content margin once the bar is attached.
    UpdateContentMargin,
    /// Sync title text.
    RenderTitle,
    /// Scroll the document to the top.
    ScrollToTop,
    /// Invoke left-panel listeners with the new visibility.
    NotifyLeftPanelListeners(bool),
}

/// Applies a [`LayoutAction`] to the layout state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for the layout shell. It never
/// fails; inapplicable actions are no-ops.
pub fn reduce_layout(state: &mut LayoutState, action: LayoutAction) -> Vec<LayoutEffect> {
    let mut effects = Vec::new();
    match action {
        LayoutAction::ShowLeftPanel => show_left_panel(state, &mut effects),
        LayoutAction::HideLeftPanel => hide_left_panel(state, &mut effects),
        LayoutAction::ToggleLeftPanel => {
            if state.left_panel.is_visible() {
                hide_left_panel(state, &mut effects);
            } else {
                show_left_panel(state, &mut effects);
            }
        }
        LayoutAction::ShowRightPanel => show_right_panel(state, &mut effects),
        LayoutAction::HideRightPanel => hide_right_panel(state, &mut effects),
        LayoutAction::ToggleRightPanel => {
            if state.right_panel.is_visible() {
                hide_right_panel(state, &mut effects);
            } else {
                show_right_panel(state, &mut effects);
            }
        }
        LayoutAction::HidePanels => {
            hide_right_panel(state, &mut effects);
            hide_left_panel(state, &mut effects);
        }
        LayoutAction::FixLeftPanel => fix_left_panel(state, &mut effects),
        LayoutAction::UnfixLeftPanel => unfix_left_panel(state, &mut effects),
        LayoutAction::DisableLeftPanel => {
            unfix_left_panel(state, &mut effects);
            hide_left_panel(state, &mut effects);
            if state.left_mode != LeftPanelMode::Disabled {
                state.left_mode = LeftPanelMode::Disabled;
                effects.push(LayoutEffect::RenderLeftPanel);
            }
        }
        LayoutAction::EnableLeftPanel => {
            if state.left_mode == LeftPanelMode::Disabled {
                state.left_mode = LeftPanelMode::Floating;
                effects.push(LayoutEffect::RenderLeftPanel);
            }
        }
        LayoutAction::BreakpointEnteredSmall => {
            if state.footer.auto_unfix_for_small_screens
                && state.footer.fix_mode == FooterFixMode::Fixed
            {
                state.footer.fix_mode = FooterFixMode::AutoUnfixedForSmallScreen;
                effects.push(LayoutEffect::RenderFooter);
                effects.push(LayoutEffect::ClearContentBottomPadding);
            }
        }
        LayoutAction::BreakpointEnteredMediumOrAbove => {
            if state.footer.auto_unfix_for_small_screens
                && state.footer.fix_mode == FooterFixMode::AutoUnfixedForSmallScreen
                && state.footer.visible
            {
                state.footer.fix_mode = FooterFixMode::Fixed;
                effects.push(LayoutEffect::RenderFooter);
                effects.push(LayoutEffect::UpdateContentBottomPadding);
            }
        }
        LayoutAction::ShowFooter => {
            state.footer.visible = true;
            effects.push(LayoutEffect::RenderFooter);
        }
        LayoutAction::HideFooter => {
            state.footer.visible = false;
            effects.push(LayoutEffect::RenderFooter);
        }
        LayoutAction::FixFooter => {
            state.footer.fix_mode = FooterFixMode::Fixed;
            effects.push(LayoutEffect::RenderFooter);
            effects.push(LayoutEffect::UpdateContentBottomPadding);
        }
        LayoutAction::UnfixFooter => {
            state.footer.fix_mode = FooterFixMode::Unfixed;
            effects.push(LayoutEffect::RenderFooter);
            effects.push(LayoutEffect::ClearContentBottomPadding);
        }
        LayoutAction::SetFooterAutoUnfix { enabled } => {
            state.footer.auto_unfix_for_small_screens = enabled;
        }
        LayoutAction::SetLeftPanelSize { size } => {
            let previous = state.left_panel_size;
            state.left_panel_size = size;
            effects.push(LayoutEffect::RenderLeftPanelSize { previous });
        }
        LayoutAction::SpanLeftPanelUp => {
            state.left_panel_span_up = true;
            effects.push(LayoutEffect::RenderLeftPanelSpan);
        }
        LayoutAction::SetFitWidth { enabled } => {
            state.fit_width = enabled;
            effects.push(LayoutEffect::RenderContentFit);
        }
        LayoutAction::SetFitHeight { enabled } => {
            state.fit_height = enabled;
            effects.push(LayoutEffect::RenderContentFit);
        }
        LayoutAction::SetHeaderHeight { height } => {
            state.header_height = Some(height);
            effects.push(LayoutEffect::UpdateContentMargin);
        }
        LayoutAction::SetTitle { title } => {
            state.title = title;
            effects.push(LayoutEffect::RenderTitle);
        }
        LayoutAction::HideNavBarExpand => {
            state.nav_bar_expand_hidden = true;
            effects.push(LayoutEffect::RenderLeftPanel);
        }
        LayoutAction::HideNavBarExpandOn { breakpoint } => {
            state.nav_bar_expand_hidden_on = Some(breakpoint);
            effects.push(LayoutEffect::RenderLeftPanel);
        }
        LayoutAction::RemoveLeftPanel => {
            state.left_panel_removed = true;
            effects.push(LayoutEffect::RenderLeftPanel);
        }
        LayoutAction::AddLeftPanel => {
            state.left_panel_removed = false;
            effects.push(LayoutEffect::RenderLeftPanel);
        }
        LayoutAction::ContentReplaced => effects.push(LayoutEffect::ScrollToTop),
    }
    effects
}

fn show_left_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.left_mode == LeftPanelMode::Disabled {
        return;
    }
    if state.right_panel.is_visible() {
        hide_right_panel(state, effects);
    }
    state.left_panel = PanelState::Visible;
    effects.push(LayoutEffect::RenderLeftPanel);
    effects.push(LayoutEffect::RenderOverlay);
    effects.push(LayoutEffect::NotifyLeftPanelListeners(true));
}

fn hide_left_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if matches!(
        state.left_mode,
        LeftPanelMode::Fixed | LeftPanelMode::Disabled
    ) {
        return;
    }
    state.left_panel = PanelState::Hidden;
    effects.push(LayoutEffect::RenderLeftPanel);
    effects.push(LayoutEffect::RenderOverlay);
    effects.push(LayoutEffect::NotifyLeftPanelListeners(false));
}

fn show_right_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.left_panel.is_visible() {
        hide_left_panel(state, effects);
    }
    state.right_panel = PanelState::Visible;
    effects.push(LayoutEffect::RenderRightPanel);
    effects.push(LayoutEffect::RenderOverlay);
}

fn hide_right_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    state.right_panel = PanelState::Hidden;
    effects.push(LayoutEffect::RenderRightPanel);
    effects.push(LayoutEffect::RenderOverlay);
}

fn fix_left_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.left_mode == LeftPanelMode::Disabled {
        return;
    }
    show_left_panel(state, effects);
    state.left_mode = LeftPanelMode::Fixed;
    effects.push(LayoutEffect::RenderLeftPanel);
    effects.push(LayoutEffect::RenderOverlay);
}

fn unfix_left_panel(state: &mut LayoutState, effects: &mut Vec<LayoutEffect>) {
    if state.left_mode == LeftPanelMode::Disabled {
        return;
    }
    state.left_mode = LeftPanelMode::Floating;
    effects.push(LayoutEffect::RenderLeftPanel);
    effects.push(LayoutEffect::RenderOverlay);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply(state: &mut LayoutState, actions: &[LayoutAction]) -> Vec<LayoutEffect> {
        actions
            .iter()
            .cloned()
            .flat_map(|action| reduce_layout(state, action))
            .collect()
    }

    fn notifications(effects: &[LayoutEffect]) -> Vec<bool> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                LayoutEffect::NotifyLeftPanelListeners(visible) => Some(*visible),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn showing_right_panel_hides_left_and_notifies_false_first() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::ShowLeftPanel);

        let effects = reduce_layout(&mut state, LayoutAction::ShowRightPanel);

        assert!(!state.is_left_panel_visible());
        assert!(state.is_right_panel_visible());
        assert!(state.is_overlay_visible());
        assert_eq!(
            effects,
            vec![
                LayoutEffect::RenderLeftPanel,
                LayoutEffect::RenderOverlay,
                LayoutEffect::NotifyLeftPanelListeners(false),
                LayoutEffect::RenderRightPanel,
                LayoutEffect::RenderOverlay,
            ]
        );
    }

    #[test]
    fn repeated_show_notifies_on_every_call() {
        let mut state = LayoutState::default();
        let effects = apply(
            &mut state,
            &[LayoutAction::ShowLeftPanel, LayoutAction::ShowLeftPanel],
        );
        assert_eq!(notifications(&effects), vec![true, true]);
    }

    #[test]
    fn disabled_left_panel_ignores_show_and_toggle() {
        let mut state = LayoutState::default();
        let effects = apply(
            &mut state,
            &[
                LayoutAction::DisableLeftPanel,
                LayoutAction::ShowLeftPanel,
                LayoutAction::ToggleLeftPanel,
                LayoutAction::FixLeftPanel,
            ],
        );
        assert!(!state.is_left_panel_visible());
        assert!(state.is_left_panel_disabled());
        assert_eq!(notifications(&effects), vec![false]);
    }

    #[test]
    fn fixed_left_panel_ignores_hide_toggle_and_overlay_clicks() {
        let mut state = LayoutState::default();
        apply(
            &mut state,
            &[
                LayoutAction::FixLeftPanel,
                LayoutAction::HideLeftPanel,
                LayoutAction::ToggleLeftPanel,
                LayoutAction::HidePanels,
            ],
        );
        assert!(state.is_left_panel_visible());
        assert!(state.is_left_panel_fixed());
        assert!(!state.is_overlay_visible());

        apply(
            &mut state,
            &[LayoutAction::UnfixLeftPanel, LayoutAction::ToggleLeftPanel],
        );
        assert!(!state.is_left_panel_visible());
        assert_eq!(state.left_mode, LeftPanelMode::Floating);
    }

    #[test]
    fn right_panel_opens_beside_a_pinned_left_panel() {
        let mut state = LayoutState::default();
        apply(
            &mut state,
            &[LayoutAction::FixLeftPanel, LayoutAction::ShowRightPanel],
        );
        assert!(state.is_left_panel_visible());
        assert!(state.is_right_panel_visible());
        assert!(state.is_overlay_visible());
    }

    #[test]
    fn fix_then_disable_unfixes_hides_and_disables() {
        let mut state = LayoutState::default();
        reduce_layout(&mut state, LayoutAction::FixLeftPanel);

        let effects = reduce_layout(&mut state, LayoutAction::DisableLeftPanel);

        assert_eq!(state.left_mode, LeftPanelMode::Disabled);
        assert!(!state.is_left_panel_visible());
        assert!(!state.is_overlay_visible());
        assert_eq!(notifications(&effects), vec![false]);

        reduce_layout(&mut state, LayoutAction::EnableLeftPanel);
        assert_eq!(state.left_mode, LeftPanelMode::Floating);
        assert!(!state.is_left_panel_visible());
    }

    #[test]
    fn enable_leaves_a_pinned_panel_pinned() {
        let mut state = LayoutState::default();
        apply(
            &mut state,
            &[LayoutAction::FixLeftPanel, LayoutAction::EnableLeftPanel],
        );
        assert_eq!(state.left_mode, LeftPanelMode::Fixed);
    }

    #[test]
    fn footer_is_auto_unfixed_on_small_and_restored_on_medium() {
        let mut state = LayoutState::default();
        apply(&mut state, &[LayoutAction::ShowFooter, LayoutAction::FixFooter]);

        let effects = reduce_layout(&mut state, LayoutAction::BreakpointEnteredSmall);
        assert_eq!(
            state.footer.fix_mode,
            FooterFixMode::AutoUnfixedForSmallScreen
        );
        assert!(effects.contains(&LayoutEffect::ClearContentBottomPadding));

        let effects = reduce_layout(&mut state, LayoutAction::BreakpointEnteredMediumOrAbove);
        assert_eq!(state.footer.fix_mode, FooterFixMode::Fixed);
        assert!(effects.contains(&LayoutEffect::UpdateContentBottomPadding));
    }

    #[test]
    fn hidden_footer_keeps_auto_unfix_memory_until_visible() {
        let mut state = LayoutState::default();
        apply(
            &mut state,
            &[
                LayoutAction::ShowFooter,
                LayoutAction::FixFooter,
                LayoutAction::BreakpointEnteredSmall,
                LayoutAction::HideFooter,
                LayoutAction::BreakpointEnteredMediumOrAbove,
            ],
        );
        assert_eq!(
            state.footer.fix_mode,
            FooterFixMode::AutoUnfixedForSmallScreen
        );

        apply(
            &mut state,
            &[
                LayoutAction::ShowFooter,
                LayoutAction::BreakpointEnteredSmall,
                LayoutAction::BreakpointEnteredMediumOrAbove,
            ],
        );
        assert_eq!(state.footer.fix_mode, FooterFixMode::Fixed);
    }

    #[test]
    fn unfixed_footer_ignores_breakpoints() {
        let mut state = LayoutState::default();
        let effects = apply(
            &mut state,
            &[
                LayoutAction::ShowFooter,
                LayoutAction::BreakpointEnteredSmall,
                LayoutAction::BreakpointEnteredMediumOrAbove,
            ],
        );
        assert_eq!(state.footer.fix_mode, FooterFixMode::Unfixed);
        assert_eq!(effects, vec![LayoutEffect::RenderFooter]);
    }

    #[test]
    fn auto_unfix_can_be_turned_off() {
        let mut state = LayoutState::default();
        apply(
            &mut state,
            &[
                LayoutAction::SetFooterAutoUnfix { enabled: false },
                LayoutAction::ShowFooter,
                LayoutAction::FixFooter,
                LayoutAction::BreakpointEnteredSmall,
            ],
        );
        assert_eq!(state.footer.fix_mode, FooterFixMode::Fixed);
    }

    #[test]
    fn left_panel_size_change_reports_previous_token() {
        let mut state = LayoutState::default();
        let effects = reduce_layout(
            &mut state,
            LayoutAction::SetLeftPanelSize {
                size: LeftPanelSize::Large,
            },
        );
        assert_eq!(state.left_panel_size, LeftPanelSize::Large);
        assert_eq!(
            effects,
            vec![LayoutEffect::RenderLeftPanelSize {
                previous: LeftPanelSize::Default
            }]
        );
    }

    #[test]
    fn removing_the_left_panel_keeps_its_state() {
        let mut state = LayoutState::default();
        apply(&mut state, &[LayoutAction::FixLeftPanel]);

        let effects = reduce_layout(&mut state, LayoutAction::RemoveLeftPanel);
        assert!(state.left_panel_removed);
        assert!(state.is_left_panel_visible());
        assert_eq!(state.left_mode, LeftPanelMode::Fixed);
        assert_eq!(effects, vec![LayoutEffect::RenderLeftPanel]);

        let effects = reduce_layout(&mut state, LayoutAction::AddLeftPanel);
        assert!(!state.left_panel_removed);
        assert_eq!(effects, vec![LayoutEffect::RenderLeftPanel]);
    }

    #[test]
    fn hide_nav_bar_expand_on_keeps_the_latest_range() {
        let mut state = LayoutState::default();
        apply(
            &mut state,
            &[
                LayoutAction::HideNavBarExpandOn {
                    breakpoint: Breakpoint::Small,
                },
                LayoutAction::HideNavBarExpandOn {
                    breakpoint: Breakpoint::MediumOrAbove,
                },
            ],
        );
        assert_eq!(
            state.nav_bar_expand_hidden_on,
            Some(Breakpoint::MediumOrAbove)
        );
        assert!(!state.nav_bar_expand_hidden);
    }
}
