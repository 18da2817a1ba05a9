//! Listener registry.
//!
//! Hosts subscribe callbacks to a puzzle's events. A listener either hears
//! every event or only the kinds it asked for. Listeners are called in
//! subscription order.

use serde::{Deserialize, Serialize};

use super::event::{PuzzleEvent, PuzzleEventKind};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Callback = Box<dyn FnMut(&PuzzleEvent)>;

struct Listener {
    id: ListenerId,
    /// `None` listens to everything.
    kind: Option<PuzzleEventKind>,
    callback: Callback,
}

/// Ordered set of event listeners.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Listener>,
    next_id: u32,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to every event.
    pub fn subscribe(&mut self, callback: impl FnMut(&PuzzleEvent) + 'static) -> ListenerId {
        self.add(None, Box::new(callback))
    }

    /// Listen to a single kind of event.
    pub fn subscribe_to(
        &mut self,
        kind: PuzzleEventKind,
        callback: impl FnMut(&PuzzleEvent) + 'static,
    ) -> ListenerId {
        self.add(Some(kind), Box::new(callback))
    }

    fn add(&mut self, kind: Option<PuzzleEventKind>, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, kind, callback });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every interested listener.
    pub fn emit(&mut self, event: &PuzzleEvent) {
        let kind = event.kind();
        for listener in &mut self.listeners {
            if listener.kind.map_or(true, |k| k == kind) {
                (listener.callback)(event);
            }
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
