//! Collaborator seams between the insertion engine and the editing surface.
//!
//! The engine never owns the document or the framework picker. It reads the
//! active framework through [`ActiveFramework`] and hands finished fragments
//! to an [`EditorInsert`]. [`DocumentBuffer`] is a plain in-memory editor
//! used by the CLI and tests.

use crate::framework::Framework;
use std::cell::Cell;

/// Receives finished fragments.
pub trait EditorInsert {
    /// Insert `text` at the caret on its own line(s).
    fn insert_block(&mut self, text: &str);
}

impl<T: EditorInsert + ?Sized> EditorInsert for &mut T {
    fn insert_block(&mut self, text: &str) {
        (**self).insert_block(text);
    }
}

/// Reports the framework selected in the UI at the moment of the call.
pub trait ActiveFramework {
    fn active_framework(&self) -> Framework;
}

impl ActiveFramework for Framework {
    fn active_framework(&self) -> Framework {
        *self
    }
}

impl ActiveFramework for Cell<Framework> {
    fn active_framework(&self) -> Framework {
        self.get()
    }
}

impl<T: ActiveFramework + ?Sized> ActiveFramework for &T {
    fn active_framework(&self) -> Framework {
        (**self).active_framework()
    }
}

/// Text plus a caret, with block insertion semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentBuffer {
    text: String,
    caret: usize,
}

impl DocumentBuffer {
    /// Buffer holding `text` with the caret at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self { text, caret }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret, snapping back to the nearest char boundary.
    pub fn set_caret(&mut self, position: usize) {
        let mut position = position.min(self.text.len());
        while !self.text.is_char_boundary(position) {
            position -= 1;
        }
        self.caret = position;
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl EditorInsert for DocumentBuffer {
    /// Starts a new line first unless the caret already sits at a line start,
    /// always ends with a newline, and leaves the caret after the insertion.
    fn insert_block(&mut self, text: &str) {
        let needs_break = self.caret > 0 && !self.text[..self.caret].ends_with('\n');
        let mut insertion = String::with_capacity(text.len() + 2);
        if needs_break {
            insertion.push('\n');
        }
        insertion.push_str(text);
        insertion.push('\n');

        self.text.insert_str(self.caret, &insertion);
        self.caret += insertion.len();
    }
}
