//! In-memory rendering surface used by tests and headless hosts.

use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
    rc::Rc,
};

use super::{AttachCallback, LayoutNode, LayoutSurface};

#[derive(Default)]
struct MemorySurfaceInner {
    classes: HashMap<LayoutNode, BTreeSet<String>>,
    styles: HashMap<(LayoutNode, String), String>,
    texts: HashMap<LayoutNode, String>,
    heights: HashMap<LayoutNode, f64>,
    attached: bool,
    pending: Vec<(LayoutNode, AttachCallback)>,
    scroll_resets: usize,
}

#[derive(Clone, Default)]
/// In-memory [`LayoutSurface`] that records classes and styles per node.
///
/// Every node counts as attached exactly while the root is attached, so deferred
/// [`LayoutSurface::on_attached`] callbacks run on the next [`LayoutSurface::attach_root`] call.
pub struct MemoryLayoutSurface {
    inner: Rc<RefCell<MemorySurfaceInner>>,
}

impl std::fmt::Debug for MemoryLayoutSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryLayoutSurface")
            .field("attached", &inner.attached)
            .field("classes", &inner.classes)
            .field("pending", &inner.pending.len())
            .finish()
    }
}

impl MemoryLayoutSurface {
    /// Returns the classes on `node`, sorted.
    pub fn classes(&self, node: LayoutNode) -> Vec<String> {
        self.inner
            .borrow()
            .classes
            .get(&node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the inline style `property` on `node`.
    pub fn style(&self, node: LayoutNode, property: &str) -> Option<String> {
        self.inner
            .borrow()
            .styles
            .get(&(node, property.to_string()))
            .cloned()
    }

    /// Returns the text content of `node`.
    pub fn text(&self, node: LayoutNode) -> Option<String> {
        self.inner.borrow().texts.get(&node).cloned()
    }

    /// Sets the height reported by [`LayoutSurface::client_height`] while attached.
    pub fn set_client_height(&self, node: LayoutNode, height: f64) {
        self.inner.borrow_mut().heights.insert(node, height);
    }

    /// Returns whether the root is attached.
    pub fn is_root_attached(&self) -> bool {
        self.inner.borrow().attached
    }

    /// Returns how many attach callbacks are still waiting.
    pub fn pending_attach_callbacks(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Returns how many times the document was scrolled back to the top.
    pub fn scroll_resets(&self) -> usize {
        self.inner.borrow().scroll_resets
    }
}

impl LayoutSurface for MemoryLayoutSurface {
    fn set_class(&self, node: LayoutNode, class: &str, enabled: bool) {
        let mut inner = self.inner.borrow_mut();
        let classes = inner.classes.entry(node).or_default();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, node: LayoutNode, class: &str) -> bool {
        self.inner
            .borrow()
            .classes
            .get(&node)
            .is_some_and(|set| set.contains(class))
    }

    fn set_style(&self, node: LayoutNode, property: &str, value: Option<&str>) {
        let mut inner = self.inner.borrow_mut();
        let key = (node, property.to_string());
        match value {
            Some(value) => {
                inner.styles.insert(key, value.to_string());
            }
            None => {
                inner.styles.remove(&key);
            }
        }
    }

    fn set_text(&self, node: LayoutNode, text: &str) {
        self.inner.borrow_mut().texts.insert(node, text.to_string());
    }

    fn is_attached(&self, node: LayoutNode) -> bool {
        matches!(node, LayoutNode::Document) || self.inner.borrow().attached
    }

    fn on_attached(&self, node: LayoutNode, callback: AttachCallback) -> Result<(), String> {
        if self.is_attached(node) {
            callback();
            return Ok(());
        }
        self.inner.borrow_mut().pending.push((node, callback));
        Ok(())
    }

    fn client_height(&self, node: LayoutNode) -> f64 {
        let inner = self.inner.borrow();
        if !inner.attached {
            return 0.0;
        }
        inner.heights.get(&node).copied().unwrap_or(0.0)
    }

    fn attach_root(&self) -> Result<(), String> {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.attached = true;
            std::mem::take(&mut inner.pending)
        };
        for (_, callback) in pending {
            callback();
        }
        Ok(())
    }

    fn detach_root(&self) {
        self.inner.borrow_mut().attached = false;
    }

    fn scroll_to_top(&self) {
        self.inner.borrow_mut().scroll_resets += 1;
    }
}
