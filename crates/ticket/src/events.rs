/// Notifications emitted by the ticket store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketEvent {
    /// Capability-dependent settings became usable for the first time.
    Initialize,
    /// Document metrics (page count, page size, printable area, margins)
    /// changed.
    DocumentChange,
    /// A ticket setting's value changed.
    TicketChange,
    /// A different destination's capabilities replaced the previous snapshot.
    CapabilitiesChange,
}

type Listener = Box<dyn FnMut()>;

/// Registry of subscriber callbacks, one list per event kind. Callbacks run
/// synchronously, in subscription order, after the triggering mutation has
/// fully completed.
#[derive(Default)]
pub struct ListenerRegistry {
    initialize: Vec<Listener>,
    document_change: Vec<Listener>,
    ticket_change: Vec<Listener>,
    capabilities_change: Vec<Listener>,
}

impl ListenerRegistry {
    pub fn add(&mut self, event: TicketEvent, listener: impl FnMut() + 'static) {
        self.list_mut(event).push(Box::new(listener));
    }

    pub fn notify(&mut self, event: TicketEvent) {
        for listener in self.list_mut(event) {
            listener();
        }
    }

    fn list_mut(&mut self, event: TicketEvent) -> &mut Vec<Listener> {
        match event {
            TicketEvent::Initialize => &mut self.initialize,
            TicketEvent::DocumentChange => &mut self.document_change,
            TicketEvent::TicketChange => &mut self.ticket_change,
            TicketEvent::CapabilitiesChange => &mut self.capabilities_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn listeners_run_in_subscription_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            registry.add(TicketEvent::TicketChange, move || {
                order.lock().unwrap().push(tag);
            });
        }

        registry.notify(TicketEvent::TicketChange);
        registry.notify(TicketEvent::DocumentChange);

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }
}
