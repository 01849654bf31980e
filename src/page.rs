//! Page host: a document plus the event listeners subscribed to it.
//!
//! Events are dispatched synchronously; every listener runs to completion
//! before the next one is invoked.

use crate::document::{Document, ElementId};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Events delivered to page listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    /// The document became interactive.
    ContentLoaded,

    /// An element was activated (clicked, tapped, or triggered by keyboard).
    Click { target: ElementId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ContentLoaded,
    Click,
}

impl DomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomEvent::ContentLoaded => EventKind::ContentLoaded,
            DomEvent::Click { .. } => EventKind::Click,
        }
    }
}

/// Something that reacts to page events.
pub trait EventListener {
    fn handle_event(&mut self, document: &mut Document, event: &DomEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&mut Document, &DomEvent),
{
    fn handle_event(&mut self, document: &mut Document, event: &DomEvent) {
        self(document, event)
    }
}

/// Handle returned by [`Page::add_listener`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Subscription {
    id: ListenerId,
    kind: EventKind,
    listener: Rc<RefCell<dyn EventListener>>,
}

pub struct Page {
    document: Document,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Subscribe `listener` to events of `kind`.
    pub fn add_listener(
        &mut self,
        kind: EventKind,
        listener: Rc<RefCell<dyn EventListener>>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, listener });
        id
    }

    /// Unsubscribe a listener. Returns `false` if it was already removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Deliver `event` to every listener subscribed to its kind, in
    /// subscription order. Returns how many listeners ran.
    pub fn dispatch(&mut self, event: DomEvent) -> usize {
        let listeners: Vec<_> = self
            .subscriptions
            .iter()
            .filter(|subscription| subscription.kind == event.kind())
            .map(|subscription| Rc::clone(&subscription.listener))
            .collect();

        let mut delivered = 0;
        for listener in listeners {
            match listener.try_borrow_mut() {
                Ok(mut listener) => {
                    listener.handle_event(&mut self.document, &event);
                    delivered += 1;
                }
                Err(_) => warn!("Listener busy, dropping re-entrant {:?}", event),
            }
        }

        debug!("Dispatched {:?} to {} listener(s)", event, delivered);
        delivered
    }

    /// Shorthand for dispatching [`DomEvent::ContentLoaded`].
    pub fn load(&mut self) -> usize {
        self.dispatch(DomEvent::ContentLoaded)
    }

    /// Shorthand for dispatching a click on `target`.
    pub fn click(&mut self, target: ElementId) -> usize {
        debug!("Click on <{}>", self.document.tag(target).unwrap_or("detached"));
        self.dispatch(DomEvent::Click { target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<RefCell<usize>>, Rc<RefCell<dyn EventListener>>) {
        let count = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&count);
        let listener: Rc<RefCell<dyn EventListener>> =
            Rc::new(RefCell::new(move |_: &mut Document, _: &DomEvent| {
                *seen.borrow_mut() += 1;
            }));
        (count, listener)
    }

    #[test]
    fn test_dispatch_only_matching_kind() {
        let mut page = Page::new(Document::new());
        let (loads, listener) = counter();
        page.add_listener(EventKind::ContentLoaded, listener);

        let target = page.document().root();
        assert_eq!(page.click(target), 0);
        assert_eq!(page.load(), 1);
        assert_eq!(*loads.borrow(), 1);
    }

    #[test]
    fn test_remove_listener_stops_delivery() {
        let mut page = Page::new(Document::new());
        let (clicks, listener) = counter();
        let id = page.add_listener(EventKind::Click, listener);

        let target = page.document().root();
        page.click(target);
        assert!(page.remove_listener(id));
        assert!(!page.remove_listener(id));
        page.click(target);

        assert_eq!(*clicks.borrow(), 1);
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_mutate_document() {
        let mut page = Page::new(Document::new());
        let listener: Rc<RefCell<dyn EventListener>> =
            Rc::new(RefCell::new(|doc: &mut Document, _: &DomEvent| {
                let root = doc.root();
                doc.set_text(root, "loaded");
            }));
        page.add_listener(EventKind::ContentLoaded, listener);
        page.load();
        assert_eq!(page.document().text(page.document().root()), Some("loaded"));
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let mut page = Page::new(Document::new());
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second"] {
            let order = Rc::clone(&order);
            let listener: Rc<RefCell<dyn EventListener>> =
                Rc::new(RefCell::new(move |_: &mut Document, _: &DomEvent| {
                    order.borrow_mut().push(name);
                }));
            page.add_listener(EventKind::ContentLoaded, listener);
        }
        page.load();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
