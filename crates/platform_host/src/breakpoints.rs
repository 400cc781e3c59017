//! Responsive breakpoint subscription contracts.
//!
//! Consumers observe breakpoint *crossings* only. A service invokes each registered callback at
//! most once per actual crossing and never reports continuous viewport sizes.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// Media query matched while the viewport is in the small-and-down range.
pub const SMALL_AND_DOWN_MEDIA_QUERY: &str = "(max-width: 767px)";
/// Media query matched while the viewport is in the medium-and-up range.
pub const MEDIUM_AND_UP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Callback invoked when a breakpoint range is entered.
pub type BreakpointCallback = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Screen-width range reported by a [`BreakpointService`].
pub enum Breakpoint {
    /// Phone-sized viewport.
    Small,
    /// Tablet-sized viewport or wider.
    MediumOrAbove,
}

impl Breakpoint {
    /// Classifies a viewport width in CSS pixels.
    pub const fn from_width(width_px: u32) -> Self {
        if width_px <= 767 {
            Self::Small
        } else {
            Self::MediumOrAbove
        }
    }

    /// Returns the media query matching this range.
    pub const fn media_query(self) -> &'static str {
        match self {
            Self::Small => SMALL_AND_DOWN_MEDIA_QUERY,
            Self::MediumOrAbove => MEDIUM_AND_UP_MEDIA_QUERY,
        }
    }
}

/// Host service delivering breakpoint-entry notifications.
pub trait BreakpointService {
    /// Registers `callback` for every future entry into the small range.
    fn on_enter_small(&self, callback: BreakpointCallback);

    /// Registers `callback` for every future entry into the medium-or-above range.
    fn on_enter_medium_or_above(&self, callback: BreakpointCallback);

    /// Returns the range the viewport is currently in, when known.
    fn current(&self) -> Option<Breakpoint>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Breakpoint service that never fires.
pub struct NoopBreakpointService;

impl BreakpointService for NoopBreakpointService {
    fn on_enter_small(&self, _callback: BreakpointCallback) {}

    fn on_enter_medium_or_above(&self, _callback: BreakpointCallback) {}

    fn current(&self) -> Option<Breakpoint> {
        None
    }
}

#[derive(Default)]
struct ManualRegistry {
    current: Option<Breakpoint>,
    small: Vec<BreakpointCallback>,
    medium_or_above: Vec<BreakpointCallback>,
}

#[derive(Clone, Default)]
/// Breakpoint service driven explicitly by the caller (tests, headless hosts).
pub struct ManualBreakpointService {
    inner: Rc<RefCell<ManualRegistry>>,
}

impl std::fmt::Debug for ManualBreakpointService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualBreakpointService")
            .field("current", &inner.current)
            .field("small", &inner.small.len())
            .field("medium_or_above", &inner.medium_or_above.len())
            .finish()
    }
}

impl ManualBreakpointService {
    /// Moves the viewport into `breakpoint`.
    ///
    /// Callbacks run in registration order. Returns `false` without notifying anyone when the
    /// viewport is already in that range, so repeated calls are not reported as crossings.
    pub fn enter(&self, breakpoint: Breakpoint) -> bool {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == Some(breakpoint) {
                return false;
            }
            inner.current = Some(breakpoint);
            match breakpoint {
                Breakpoint::Small => inner.small.clone(),
                Breakpoint::MediumOrAbove => inner.medium_or_above.clone(),
            }
        };
        for callback in callbacks {
            callback();
        }
        true
    }

    /// Classifies `width_px` and enters the resulting range.
    pub fn resize(&self, width_px: u32) -> bool {
        self.enter(Breakpoint::from_width(width_px))
    }

    /// Returns how many callbacks are registered for `breakpoint`.
    pub fn subscriber_count(&self, breakpoint: Breakpoint) -> usize {
        let inner = self.inner.borrow();
        match breakpoint {
            Breakpoint::Small => inner.small.len(),
            Breakpoint::MediumOrAbove => inner.medium_or_above.len(),
        }
    }
}

impl BreakpointService for ManualBreakpointService {
    fn on_enter_small(&self, callback: BreakpointCallback) {
        self.inner.borrow_mut().small.push(callback);
    }

    fn on_enter_medium_or_above(&self, callback: BreakpointCallback) {
        self.inner.borrow_mut().medium_or_above.push(callback);
    }

    fn current(&self) -> Option<Breakpoint> {
        self.inner.borrow().current
    }
}
