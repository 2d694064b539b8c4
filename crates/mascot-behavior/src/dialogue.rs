//! Dialogue hook.  The core only asks for a line; it never interprets one.

use std::cell::RefCell;
use std::rc::Rc;

use crate::PageElement;

/// Host seam receiving dialogue requests.
pub trait DialogueSink {
    fn request(&mut self, context: &str, hint: Option<&PageElement>);
}

/// Drops every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDialogue;

impl DialogueSink for NoDialogue {
    fn request(&mut self, _context: &str, _hint: Option<&PageElement>) {}
}

/// A recorded request.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueRequest {
    pub context: String,
    pub hint:    Option<PageElement>,
}

/// Keeps every request in a shared log.  Clones share the same log, so a
/// test can hand one clone to the mascot and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingDialogue {
    log: Rc<RefCell<Vec<DialogueRequest>>>,
}

impl RecordingDialogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<DialogueRequest> {
        self.log.borrow().clone()
    }

    /// Contexts only, in request order.
    pub fn contexts(&self) -> Vec<String> {
        self.log.borrow().iter().map(|r| r.context.clone()).collect()
    }
}

impl DialogueSink for RecordingDialogue {
    fn request(&mut self, context: &str, hint: Option<&PageElement>) {
        self.log.borrow_mut().push(DialogueRequest {
            context: context.to_owned(),
            hint:    hint.copied(),
        });
    }
}
