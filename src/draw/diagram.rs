//! Committed element list for one drawing session.

use super::element::DrawingElement;

/// Container for all committed elements in the current drawing session.
///
/// Elements are kept in draw order (first = bottom, last = top). The list only
/// grows by appending; the two bulk mutations are [`Diagram::undo`] and
/// [`Diagram::clear`].
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    elements: Vec<DrawingElement>,
}

impl Diagram {
    /// Creates a new empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element on top of existing ones.
    pub fn push(&mut self, element: DrawingElement) {
        self.elements.push(element);
    }

    /// Removes and returns the most recently appended element, if any.
    pub fn undo(&mut self) -> Option<DrawingElement> {
        self.elements.pop()
    }

    /// Removes every element, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.elements.len();
        self.elements.clear();
        removed
    }

    pub fn elements(&self) -> &[DrawingElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::DIAGRAM_BLUE;
    use crate::draw::{ElementId, Point};

    fn note(id: u64) -> DrawingElement {
        DrawingElement::text(ElementId(id), Point::new(0.0, 0.0), "n", DIAGRAM_BLUE)
    }

    #[test]
    fn undo_pops_in_reverse_order() {
        let mut diagram = Diagram::new();
        diagram.push(note(1));
        diagram.push(note(2));

        assert_eq!(diagram.undo().map(|e| e.id()), Some(ElementId(2)));
        assert_eq!(diagram.len(), 1);
        assert_eq!(diagram.elements()[0].id(), ElementId(1));
    }

    #[test]
    fn undo_on_empty_is_none() {
        let mut diagram = Diagram::new();
        assert!(diagram.undo().is_none());
        assert!(diagram.is_empty());
    }

    #[test]
    fn clear_reports_removed_count() {
        let mut diagram = Diagram::new();
        diagram.push(note(1));
        diagram.push(note(2));
        diagram.push(note(3));

        assert_eq!(diagram.clear(), 3);
        assert!(diagram.is_empty());
        assert_eq!(diagram.clear(), 0);
    }
}
