//! A document owns the element tree and the click listeners attached to it.
//!
//! Listeners are keyed by element id and run synchronously. A click bubbles
//! from its target up to the root, so a listener on a `th` also fires for a
//! click on a `span` inside it.

use std::collections::HashMap;

use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::query::{element_at, path_to};

/// Error returned by a listener. Reported, never propagated to the caller.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Click handler. Receives the document root for in-place mutation.
pub type Listener = Box<dyn FnMut(&mut Element) -> Result<(), ListenerError>>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DispatchError {
    #[error("Event target '{target}' is not in the document")]
    UnknownTarget { target: String },
}

/// Summary of one dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatched {
    /// Listeners that ran and returned `Ok`.
    pub handled: usize,
    /// Listeners that returned an error (logged).
    pub failed: usize,
}

impl Dispatched {
    pub fn invoked(&self) -> usize {
        self.handled + self.failed
    }
}

pub struct Document {
    root: Element,
    listeners: HashMap<String, Vec<Listener>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            listeners: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Attach a click listener to the element with `id`.
    ///
    /// The id is not checked against the tree; a listener for an id that
    /// never appears simply never fires.
    pub fn on_click<F>(&mut self, id: impl Into<String>, listener: F)
    where
        F: FnMut(&mut Element) -> Result<(), ListenerError> + 'static,
    {
        self.listeners
            .entry(id.into())
            .or_default()
            .push(Box::new(listener));
    }

    pub fn listener_count(&self, id: &str) -> usize {
        self.listeners.get(id).map_or(0, Vec::len)
    }

    /// Deliver an event. Only primary-button clicks fire click listeners.
    ///
    /// Listener errors are logged and do not stop the remaining listeners.
    pub fn dispatch(&mut self, event: &Event) -> Result<Dispatched, DispatchError> {
        let Event::Click { button, .. } = event;

        let Some(target) = event.target() else {
            return Ok(Dispatched::default());
        };

        let Some(path) = path_to(&self.root, target) else {
            return Err(DispatchError::UnknownTarget {
                target: target.to_string(),
            });
        };

        if *button != MouseButton::Left {
            return Ok(Dispatched::default());
        }

        // Bubble order: target first, root last
        let chain: Vec<String> = (0..=path.len())
            .rev()
            .filter_map(|depth| element_at(&self.root, &path[..depth]))
            .map(|element| element.id.clone())
            .collect();

        let mut outcome = Dispatched::default();
        for id in chain {
            let Some(listeners) = self.listeners.get_mut(&id) else {
                continue;
            };
            for listener in listeners.iter_mut() {
                match listener(&mut self.root) {
                    Ok(()) => outcome.handled += 1,
                    Err(e) => {
                        log::error!("click listener on '{id}' failed: {e}");
                        outcome.failed += 1;
                    }
                }
            }
        }

        Ok(outcome)
    }

    /// Primary-button click on the element with `id`.
    pub fn click(&mut self, id: &str) -> Result<Dispatched, DispatchError> {
        self.dispatch(&Event::click(id))
    }
}
