//! `matchMedia`-backed breakpoint notifications.

use std::{cell::RefCell, rc::Rc};

use platform_host::{Breakpoint, BreakpointCallback, BreakpointService};
#[cfg(target_arch = "wasm32")]
use platform_host::SMALL_AND_DOWN_MEDIA_QUERY;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Default)]
struct WebBreakpointRegistry {
    current: Option<Breakpoint>,
    small: Vec<BreakpointCallback>,
    medium_or_above: Vec<BreakpointCallback>,
}

impl WebBreakpointRegistry {
    fn callbacks_for(&mut self, breakpoint: Breakpoint) -> Option<Vec<BreakpointCallback>> {
        if self.current == Some(breakpoint) {
            return None;
        }
        self.current = Some(breakpoint);
        Some(match breakpoint {
            Breakpoint::Small => self.small.clone(),
            Breakpoint::MediumOrAbove => self.medium_or_above.clone(),
        })
    }
}

#[derive(Clone, Default)]
/// Browser [`BreakpointService`] listening to a single small-and-down media query.
///
/// One `change` listener drives both directions, so each crossing is reported exactly once:
/// `matches = true` enters [`Breakpoint::Small`], `matches = false` enters
/// [`Breakpoint::MediumOrAbove`].
pub struct WebBreakpointService {
    registry: Rc<RefCell<WebBreakpointRegistry>>,
}

impl std::fmt::Debug for WebBreakpointService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebBreakpointService")
            .field("current", &self.registry.borrow().current)
            .finish()
    }
}

impl WebBreakpointService {
    /// Creates the service and installs the media-query listener.
    ///
    /// # Errors
    ///
    /// Returns an error when `window.matchMedia` is unavailable or the listener cannot be added.
    pub fn install() -> Result<Self, String> {
        let service = Self::default();

        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let query = window
                .match_media(SMALL_AND_DOWN_MEDIA_QUERY)
                .map_err(|err| format!("matchMedia failed: {err:?}"))?
                .ok_or_else(|| "matchMedia unsupported".to_string())?;
            service.registry.borrow_mut().current = Some(if query.matches() {
                Breakpoint::Small
            } else {
                Breakpoint::MediumOrAbove
            });

            let listener_service = service.clone();
            let query_for_change = query.clone();
            let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
                let breakpoint = if query_for_change.matches() {
                    Breakpoint::Small
                } else {
                    Breakpoint::MediumOrAbove
                };
                listener_service.dispatch(breakpoint);
            }));
            query
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .map_err(|err| format!("failed to add media listener: {err:?}"))?;
            on_change.forget();
        }

        Ok(service)
    }

    /// Reports a crossing into `breakpoint`; ignored when the viewport is already there.
    pub fn dispatch(&self, breakpoint: Breakpoint) {
        let callbacks = self.registry.borrow_mut().callbacks_for(breakpoint);
        for callback in callbacks.into_iter().flatten() {
            callback();
        }
    }
}

impl BreakpointService for WebBreakpointService {
    fn on_enter_small(&self, callback: BreakpointCallback) {
        self.registry.borrow_mut().small.push(callback);
    }

    fn on_enter_medium_or_above(&self, callback: BreakpointCallback) {
        self.registry.borrow_mut().medium_or_above.push(callback);
    }

    fn current(&self) -> Option<Breakpoint> {
        self.registry.borrow().current
    }
}
