//! DOM-backed rendering surface for the layout shell.
//!
//! Nodes are resolved by the stable ids from [`LayoutNode::dom_id`]. Lookups below the root go
//! through the root element, so class and style updates also land while the root is detached
//! from the document. A cached root that is no longer connected is replaced as soon as a
//! connected root with the same id is mounted. `detach_root` drops the cache and keeps the
//! removed element only until it is attached again or a new root is mounted.

use std::{cell::RefCell, rc::Rc};

use platform_host::{AttachCallback, LayoutNode, LayoutSurface};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Default)]
/// Browser [`LayoutSurface`] backed by `web_sys` elements.
pub struct WebLayoutSurface {
    root: Rc<RefCell<Option<web_sys::HtmlElement>>>,
    detached: Rc<RefCell<Option<web_sys::HtmlElement>>>,
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

impl WebLayoutSurface {
    #[cfg(target_arch = "wasm32")]
    fn root_element(&self) -> Option<web_sys::HtmlElement> {
        let cached = self.root.borrow().clone();
        if let Some(root) = cached.as_ref().filter(|root| root.is_connected()) {
            return Some(root.clone());
        }
        let mounted = LayoutNode::Root.dom_id().and_then(|id| {
            document()?
                .get_element_by_id(id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()
        });
        match mounted {
            Some(root) => {
                *self.root.borrow_mut() = Some(root.clone());
                self.detached.borrow_mut().take();
                Some(root)
            }
            None => cached.or_else(|| self.detached.borrow().clone()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn element(&self, node: LayoutNode) -> Option<web_sys::HtmlElement> {
        match node {
            LayoutNode::Document => document()?.body(),
            LayoutNode::Root => self.root_element(),
            _ => {
                let id = node.dom_id()?;
                self.root_element()?
                    .query_selector(&format!("#{id}"))
                    .ok()
                    .flatten()?
                    .dyn_into::<web_sys::HtmlElement>()
                    .ok()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn observe_attach(&self, node: LayoutNode, callback: AttachCallback) -> Result<(), String> {
        let target = document()
            .and_then(|document| document.document_element())
            .ok_or_else(|| "document element unavailable".to_string())?;
        let slot = Rc::new(RefCell::new(Some(callback)));
        let surface = self.clone();
        let on_mutation = Closure::<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>::wrap(
            Box::new(move |_records, observer: web_sys::MutationObserver| {
                if !surface.is_attached(node) {
                    return;
                }
                observer.disconnect();
                let callback = slot.borrow_mut().take();
                if let Some(callback) = callback {
                    callback();
                }
            }),
        );
        let observer = web_sys::MutationObserver::new(on_mutation.as_ref().unchecked_ref())
            .map_err(|err| format!("failed to create mutation observer: {err:?}"))?;
        let init = web_sys::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(&target, &init)
            .map_err(|err| format!("failed to observe document: {err:?}"))?;
        on_mutation.forget();
        Ok(())
    }
}

impl LayoutSurface for WebLayoutSurface {
    fn set_class(&self, node: LayoutNode, class: &str, enabled: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(element) = self.element(node) {
                let _ = element.class_list().toggle_with_force(class, enabled);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (node, class, enabled);
    }

    fn has_class(&self, node: LayoutNode, class: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.element(node)
                .map(|element| element.class_list().contains(class))
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (node, class);
            false
        }
    }

    fn set_style(&self, node: LayoutNode, property: &str, value: Option<&str>) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(element) = self.element(node) else {
                return;
            };
            let style = element.style();
            let _ = match value {
                Some(value) => style.set_property(property, value),
                None => style.remove_property(property).map(|_| ()),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (node, property, value);
    }

    fn set_text(&self, node: LayoutNode, text: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(element) = self.element(node) {
                element.set_text_content(Some(text));
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (node, text);
    }

    fn is_attached(&self, node: LayoutNode) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.element(node)
                .map(|element| element.is_connected())
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = node;
            false
        }
    }

    fn on_attached(&self, node: LayoutNode, callback: AttachCallback) -> Result<(), String> {
        if self.is_attached(node) {
            callback();
            return Ok(());
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.observe_attach(node, callback)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = callback;
            Err(format!(
                "cannot observe {} attachment without a browser document",
                node.as_str()
            ))
        }
    }

    fn client_height(&self, node: LayoutNode) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            self.element(node)
                .map(|element| f64::from(element.client_height()))
                .unwrap_or(0.0)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = node;
            0.0
        }
    }

    fn attach_root(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let root = self
                .root_element()
                .ok_or_else(|| "layout root element missing".to_string())?;
            if root.is_connected() {
                return Ok(());
            }
            let body = document()
                .and_then(|document| document.body())
                .ok_or_else(|| "document body unavailable".to_string())?;
            body.append_child(&root)
                .map_err(|err| format!("failed to attach layout root: {err:?}"))?;
            self.detached.borrow_mut().take();
            *self.root.borrow_mut() = Some(root);
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err("layout root requires a browser document".to_string())
        }
    }

    fn detach_root(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(root) = self.root_element() {
                root.remove();
                *self.detached.borrow_mut() = Some(root);
            }
        }
        self.root.borrow_mut().take();
    }

    fn scroll_to_top(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn non_browser_surface_is_inert() {
        let surface = WebLayoutSurface::default();
        surface.set_class(LayoutNode::LeftPanel, "slide-out-left", true);
        assert!(!surface.has_class(LayoutNode::LeftPanel, "slide-out-left"));
        assert!(!surface.is_attached(LayoutNode::Root));
        assert_eq!(surface.client_height(LayoutNode::Footer), 0.0);
        assert!(surface.attach_root().is_err());
    }

    #[test]
    fn non_browser_surface_reports_unobservable_attachment() {
        let surface = WebLayoutSurface::default();
        let err = surface
            .on_attached(LayoutNode::Footer, Box::new(|| panic!("must not run")))
            .expect_err("no document");
        assert!(err.contains("footer"), "{err}");

        surface.detach_root();
        assert!(surface.root.borrow().is_none());
    }
}
