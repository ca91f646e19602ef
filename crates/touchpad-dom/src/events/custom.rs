//! Custom Events
//!
//! Type-erased detail payload for application-defined events.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Custom event detail
#[derive(Clone)]
pub struct CustomEvent {
    detail: Rc<dyn Any>,
}

impl CustomEvent {
    pub fn new<T: Any>(detail: T) -> Self {
        Self { detail: Rc::new(detail) }
    }

    /// Detail downcast to `T`
    pub fn detail<T: Any>(&self) -> Option<&T> {
        self.detail.downcast_ref()
    }
}

impl fmt::Debug for CustomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomEvent").finish_non_exhaustive()
    }
}
