use campus_protocol::CarouselEvent;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&CarouselEvent) + Send>;

/// Registry of external observers of carousel events.
///
/// The carousel knows nothing about its listeners beyond this list; pages
/// hook in captions, analytics and the like without the carousel depending
/// on them.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&CarouselEvent) + Send + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns whether a listener was removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn emit(&mut self, event: &CarouselEvent) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
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

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn changed(index: usize) -> CarouselEvent {
        CarouselEvent::SlideChanged { index, previous: 0 }
    }

    #[test]
    fn delivers_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::new();
        for tag in ["first", "second"] {
            let log = Arc::clone(&log);
            listeners.subscribe(move |event| log.lock().unwrap().push((tag, event.index())));
        }
        listeners.emit(&changed(3));
        assert_eq!(*log.lock().unwrap(), vec![("first", 3), ("second", 3)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::new();
        let id = {
            let count = Arc::clone(&count);
            listeners.subscribe(move |_| *count.lock().unwrap() += 1)
        };
        listeners.emit(&changed(1));
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&changed(2));
        assert_eq!(*count.lock().unwrap(), 1);
        assert!(listeners.is_empty());
    }
}
