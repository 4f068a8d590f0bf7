//! Form field value objects

use crate::catalog::{Catalog, ProjectId};
use crate::state::Direction;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// A project picked from the catalog, or none
    Project(Option<ProjectId>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    /// Message key of the label
    pub label_key: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label_key: &'static str, is_multiline: bool) -> Self {
        Self {
            label_key,
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new project picker
    pub fn project(label_key: &'static str) -> Self {
        Self {
            label_key,
            value: FieldValue::Project(None),
            is_multiline: false,
        }
    }

    /// Text value (empty for project pickers)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Project(_) => "",
        }
    }

    pub fn as_project(&self) -> Option<ProjectId> {
        match &self.value {
            FieldValue::Project(p) => *p,
            FieldValue::Text(_) => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if c != '\n' || self.is_multiline {
                s.push(c);
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Project(p) => *p = None,
        }
    }

    /// Cycle a project picker through the catalog; none sits between the
    /// last and the first project
    pub fn cycle_project(&mut self, catalog: &Catalog, direction: Direction) {
        let FieldValue::Project(current) = &mut self.value else {
            return;
        };
        let ids: Vec<ProjectId> = catalog.projects().iter().map(|p| p.id).collect();
        if ids.is_empty() {
            return;
        }
        let position = current.and_then(|id| ids.iter().position(|p| *p == id));
        *current = match (position, direction) {
            (None, Direction::Forward) => ids.first().copied(),
            (None, Direction::Backward) => ids.last().copied(),
            (Some(i), Direction::Forward) => ids.get(i + 1).copied(),
            (Some(0), Direction::Backward) => None,
            (Some(i), Direction::Backward) => ids.get(i - 1).copied(),
        };
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Project(p) => *p = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, catalog: &Catalog) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Project(p) => p
                .and_then(|id| catalog.project(id))
                .map(|project| project.title.clone()),
        }
    }
}
