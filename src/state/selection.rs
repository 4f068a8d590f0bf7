//! Per-project unit and interior selection

use crate::catalog::{Catalog, ProjectId, StatsView};
use std::collections::HashMap;

/// Selection record for a single project.
///
/// An interior image is only ever held alongside a unit selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    unit: Option<String>,
    interior: Option<String>,
}

impl ProjectSelection {
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn interior(&self) -> Option<&str> {
        self.interior.as_deref()
    }
}

/// Selection table keyed by project id
#[derive(Debug, Clone, Default)]
pub struct SelectionTable {
    rows: HashMap<ProjectId, ProjectSelection>,
}

impl SelectionTable {
    pub fn get(&self, project: ProjectId) -> Option<&ProjectSelection> {
        self.rows.get(&project)
    }

    /// Selected unit type for a project
    pub fn unit(&self, project: ProjectId) -> Option<&str> {
        self.get(project).and_then(ProjectSelection::unit)
    }

    /// Selected interior image for a project
    pub fn interior(&self, project: ProjectId) -> Option<&str> {
        self.get(project).and_then(ProjectSelection::interior)
    }

    /// Select a unit type. Always drops the interior selection.
    ///
    /// Returns false (and changes nothing) for project 0 or an empty name.
    /// Unknown unit names are accepted.
    pub fn select_unit(&mut self, project: ProjectId, unit: &str) -> bool {
        if project == 0 || unit.is_empty() {
            return false;
        }
        self.rows.insert(
            project,
            ProjectSelection {
                unit: Some(unit.to_string()),
                interior: None,
            },
        );
        true
    }

    /// Clear both the unit and interior selection for a project
    pub fn clear_unit(&mut self, project: ProjectId) {
        self.rows.remove(&project);
    }

    /// Select an interior image. No-op unless a unit is selected.
    pub fn select_interior(&mut self, project: ProjectId, image: &str) -> bool {
        match self.rows.get_mut(&project) {
            Some(row) if row.unit.is_some() && !image.is_empty() => {
                row.interior = Some(image.to_string());
                true
            }
            _ => false,
        }
    }

    /// Image to show behind a project: the selected interior, else the
    /// selected unit's image, else the project's default image.
    pub fn resolve_background_image<'a>(
        &'a self,
        catalog: &'a Catalog,
        project: ProjectId,
    ) -> Option<&'a str> {
        if let Some(interior) = self.interior(project) {
            return Some(interior);
        }
        self.unit(project)
            .and_then(|unit| catalog.unit_image(project, unit))
            .or_else(|| catalog.default_image(project))
    }

    /// Stats for the selected unit, or placeholders
    pub fn stats<'a>(&self, catalog: &'a Catalog, project: ProjectId) -> StatsView<'a> {
        catalog.stats(project, self.unit(project))
    }

    /// Whether any project currently holds a selection
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
