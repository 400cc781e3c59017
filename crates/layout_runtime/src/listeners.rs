//! Ordered left-panel state listeners.

use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle returned by [`ListenerSet::register`], used to remove the listener later.
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Callback told whether the left panel is now visible.
pub type LeftPanelListener = Rc<dyn Fn(bool)>;

#[derive(Default, Clone)]
/// Listeners invoked in registration order.
pub struct ListenerSet {
    next_id: u64,
    entries: Vec<(ListenerId, LeftPanelListener)>,
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("next_id", &self.next_id)
            .field(
                "ids",
                &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ListenerSet {
    /// Appends `listener` and returns its id. Ids are never reused.
    pub fn register(&mut self, listener: LeftPanelListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes the listener registered under `id`. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Copies the current listeners so they can be invoked without holding a borrow.
    pub fn snapshot(&self) -> Vec<LeftPanelListener> {
        self.entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
