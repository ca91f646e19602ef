//! `<touch-pad>` element
//!
//! Host element wrapper: tracks drags that start anywhere inside the host
//! and dispatches notifications on the host itself. The embedding runtime
//! calls the lifecycle callbacks when the host enters or leaves the document.

use std::rc::Rc;

use touchpad_dom::{Document, DomError, NodeId};

use crate::{PointerTracker, TouchPadError};

/// `<touch-pad>` custom element
#[derive(Debug)]
pub struct TouchPadElement {
    document: Rc<Document>,
    host: NodeId,
    tracker: Option<PointerTracker>,
}

impl TouchPadElement {
    pub const TAG_NAME: &'static str = "touch-pad";

    /// Create a detached `<touch-pad>` element
    pub fn create(document: Rc<Document>) -> Self {
        let host = document.create_element(Self::TAG_NAME);
        Self {
            document,
            host,
            tracker: None,
        }
    }

    /// Wrap an existing element
    pub fn upgrade(document: Rc<Document>, host: NodeId) -> Result<Self, TouchPadError> {
        if document.tag_name(host).is_none() {
            return Err(DomError::NotAnElement(host).into());
        }
        Ok(Self {
            document,
            host,
            tracker: None,
        })
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn document(&self) -> &Rc<Document> {
        &self.document
    }

    /// Host inserted into a document: start tracking
    pub fn connected_callback(&mut self) {
        if self.tracker.is_some() {
            return;
        }
        let tracker = PointerTracker::new(Rc::clone(&self.document), self.host);
        tracker.attach();
        self.tracker = Some(tracker);
    }

    /// Host removed from its document: stop tracking
    pub fn disconnected_callback(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            tracker.detach();
        }
    }

    /// Whether a tracker is attached
    pub fn is_tracking(&self) -> bool {
        self.tracker.as_ref().is_some_and(PointerTracker::is_attached)
    }

    pub fn tracker(&self) -> Option<&PointerTracker> {
        self.tracker.as_ref()
    }
}
