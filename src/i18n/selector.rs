//! Language selector dropdown: a two-state open/closed machine.
//!
//! The controller owns the state; the dropdown element's `hidden` class is a
//! mirror of it, written after every transition when the element exists.

use crate::document::{Document, ElementId};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    #[default]
    Closed,
    Open,
}

/// Handles to the three elements making up the selector widget.
///
/// Any of them may be absent; the controller skips whatever it cannot find.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorWidget {
    /// Toggle button showing the current language
    pub button: Option<ElementId>,
    /// Dropdown listing the available languages
    pub dropdown: Option<ElementId>,
    /// Widget root, used for click-outside detection
    pub root: Option<ElementId>,
}

impl SelectorWidget {
    /// Locate the widget elements by their `id` attributes.
    pub fn locate(document: &Document, button_id: &str, dropdown_id: &str, root_id: &str) -> Self {
        Self {
            button: document.element_by_id(button_id),
            dropdown: document.element_by_id(dropdown_id),
            root: document.element_by_id(root_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectorController {
    state: SelectorState,
    widget: SelectorWidget,
    hidden_class: String,
}

impl SelectorController {
    pub fn new(widget: SelectorWidget, hidden_class: impl Into<String>) -> Self {
        Self {
            state: SelectorState::Closed,
            widget,
            hidden_class: hidden_class.into(),
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SelectorState::Open
    }

    pub fn widget(&self) -> &SelectorWidget {
        &self.widget
    }

    /// Point the controller at freshly located elements and mirror the
    /// current state onto them.
    pub fn bind(&mut self, document: &mut Document, widget: SelectorWidget) {
        self.widget = widget;
        self.sync(document);
    }

    /// Closed → Open, Open → Closed.
    pub fn toggle(&mut self, document: &mut Document) -> SelectorState {
        self.state = match self.state {
            SelectorState::Closed => SelectorState::Open,
            SelectorState::Open => SelectorState::Closed,
        };
        debug!("Language selector toggled to {:?}", self.state);
        self.sync(document);
        self.state
    }

    /// Force the dropdown closed.
    pub fn close(&mut self, document: &mut Document) {
        self.state = SelectorState::Closed;
        self.sync(document);
    }

    /// Whether `target` lies inside the widget root.
    pub fn contains(&self, document: &Document, target: ElementId) -> bool {
        self.widget
            .root
            .map(|root| document.contains(root, target))
            .unwrap_or(false)
    }

    /// Whether `target` is the toggle button or inside it.
    pub fn is_toggle(&self, document: &Document, target: ElementId) -> bool {
        self.widget
            .button
            .map(|button| document.contains(button, target))
            .unwrap_or(false)
    }

    /// Close the dropdown if `target` is outside the widget.
    ///
    /// Needs both the root and the dropdown to be present; otherwise the
    /// click is ignored. Returns whether a close happened.
    pub fn handle_outside_click(&mut self, document: &mut Document, target: ElementId) -> bool {
        let present = |id: Option<ElementId>| id.map(|id| document.exists(id)).unwrap_or(false);
        if !self.is_open() || !present(self.widget.root) || !present(self.widget.dropdown) {
            return false;
        }
        if self.contains(document, target) {
            return false;
        }

        debug!("Click outside language selector, closing");
        self.close(document);
        true
    }

    fn sync(&self, document: &mut Document) {
        let Some(dropdown) = self.widget.dropdown else {
            return;
        };
        match self.state {
            SelectorState::Open => document.remove_class(dropdown, &self.hidden_class),
            SelectorState::Closed => document.add_class(dropdown, &self.hidden_class),
        }
    }
}
