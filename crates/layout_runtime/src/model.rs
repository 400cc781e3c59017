use platform_host::Breakpoint;
use serde::{Deserialize, Serialize};

/// Extra gap (in px) kept between the navigation bar and the content section.
pub const CONTENT_MARGIN_GAP_PX: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

impl PanelState {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeftPanelMode {
    /// Slides in over the content and can be dismissed.
    #[default]
    Floating,
    /// Pinned open; ignores hide requests until unfixed.
    Fixed,
    /// Administratively off; ignores show and hide requests.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FooterFixMode {
    #[default]
    Unfixed,
    Fixed,
    /// Fixed footer that was unfixed on entering the small breakpoint and is restored on the
    /// next medium-or-above crossing.
    AutoUnfixedForSmallScreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeftPanelSize {
    #[serde(alias = "sm")]
    Small,
    #[default]
    #[serde(alias = "md")]
    Default,
    #[serde(alias = "lg")]
    Large,
}

impl LeftPanelSize {
    /// Document class token for this size.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Default => "md",
            Self::Large => "lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterState {
    pub visible: bool,
    pub fix_mode: FooterFixMode,
    pub auto_unfix_for_small_screens: bool,
}

impl Default for FooterState {
    fn default() -> Self {
        Self {
            visible: false,
            fix_mode: FooterFixMode::Unfixed,
            auto_unfix_for_small_screens: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub left_panel: PanelState,
    pub right_panel: PanelState,
    pub left_mode: LeftPanelMode,
    pub left_panel_size: LeftPanelSize,
    pub left_panel_span_up: bool,
    pub footer: FooterState,
    pub title: String,
    pub header_height: Option<String>,
    pub fit_width: bool,
    pub fit_height: bool,
    pub nav_bar_expand_hidden: bool,
    /// Breakpoint range on which the menu toggle is hidden by a stylesheet rule.
    pub nav_bar_expand_hidden_on: Option<Breakpoint>,
    /// Left panel and menu toggle are taken out of the page; the panel state machine keeps
    /// running underneath.
    pub left_panel_removed: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            left_panel: PanelState::Hidden,
            right_panel: PanelState::Hidden,
            left_mode: LeftPanelMode::Floating,
            left_panel_size: LeftPanelSize::Default,
            left_panel_span_up: false,
            footer: FooterState::default(),
            title: String::new(),
            header_height: None,
            fit_width: false,
            fit_height: false,
            nav_bar_expand_hidden: false,
            nav_bar_expand_hidden_on: None,
            left_panel_removed: false,
        }
    }
}

impl LayoutState {
    pub fn is_left_panel_visible(&self) -> bool {
        self.left_panel.is_visible()
    }

    pub fn is_right_panel_visible(&self) -> bool {
        self.right_panel.is_visible()
    }

    /// The overlay dims the content while a floating panel is open. A pinned left panel is part
    /// of the page and does not count.
    pub fn is_overlay_visible(&self) -> bool {
        self.right_panel.is_visible()
            || (self.left_panel.is_visible() && self.left_mode != LeftPanelMode::Fixed)
    }

    pub fn is_left_panel_fixed(&self) -> bool {
        self.left_mode == LeftPanelMode::Fixed
    }

    pub fn is_left_panel_disabled(&self) -> bool {
        self.left_mode == LeftPanelMode::Disabled
    }

    pub fn is_footer_visible(&self) -> bool {
        self.footer.visible
    }

    pub fn is_footer_fixed(&self) -> bool {
        self.footer.fix_mode == FooterFixMode::Fixed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_state_has_everything_hidden_and_floating() {
        let state = LayoutState::default();
        assert!(!state.is_left_panel_visible());
        assert!(!state.is_right_panel_visible());
        assert!(!state.is_overlay_visible());
        assert_eq!(state.left_mode, LeftPanelMode::Floating);
        assert_eq!(state.footer.fix_mode, FooterFixMode::Unfixed);
        assert!(!state.is_footer_visible());
        assert!(state.footer.auto_unfix_for_small_screens);
    }

    #[test]
    fn pinned_left_panel_does_not_raise_overlay() {
        let mut state = LayoutState {
            left_panel: PanelState::Visible,
            ..LayoutState::default()
        };
        assert!(state.is_overlay_visible());

        state.left_mode = LeftPanelMode::Fixed;
        assert!(!state.is_overlay_visible());

        state.right_panel = PanelState::Visible;
        assert!(state.is_overlay_visible());
    }

    #[test]
    fn left_panel_size_accepts_short_tokens() {
        let size: LeftPanelSize = serde_json::from_str("\"lg\"").expect("alias");
        assert_eq!(size, LeftPanelSize::Large);
        let size: LeftPanelSize = serde_json::from_str("\"small\"").expect("name");
        assert_eq!(size.token(), "sm");
    }
}
