//! Immutable project catalog
//!
//! Projects, unit-type entries, interior galleries and the home-page gallery
//! are declarative content. Every lookup is total: an unknown project or
//! unit resolves to `None`, an empty slice, or a placeholder stat.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Project identifier (small positive integer, 0 is never a valid id)
pub type ProjectId = u32;

/// Text shown in place of a stat that is not defined for a unit type
pub const PLACEHOLDER_STAT: &str = "—";

const BUILTIN_CATALOG: &str = include_str!("../content/catalog.json");

/// Errors raised while loading catalog content
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project id 0 is reserved (project \"{0}\")")]
    ZeroProjectId(String),
    #[error("duplicate project id {0}")]
    DuplicateProject(ProjectId),
}

/// A project shown in the story section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub unit_types: Vec<String>,
    pub default_image: String,
}

/// Stats for a unit type; all values are free-form display strings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnitStats {
    #[serde(rename = "m2")]
    pub area_range: String,
    #[serde(rename = "banyo")]
    pub bathrooms: String,
    #[serde(rename = "yatak")]
    pub bedrooms: String,
}

/// Catalog entry for a (project, unit type) pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitTypeEntry {
    pub image: Option<String>,
    pub stats: Option<UnitStats>,
}

/// Image in the home-page gallery carousel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub caption: String,
}

/// Display-ready stats, with placeholders for anything missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView<'a> {
    pub area_range: &'a str,
    pub bathrooms: &'a str,
    pub bedrooms: &'a str,
}

impl<'a> StatsView<'a> {
    pub fn placeholder() -> Self {
        Self {
            area_range: PLACEHOLDER_STAT,
            bathrooms: PLACEHOLDER_STAT,
            bedrooms: PLACEHOLDER_STAT,
        }
    }

    fn from_stats(stats: &'a UnitStats) -> Self {
        Self {
            area_range: &stats.area_range,
            bathrooms: &stats.bathrooms,
            bedrooms: &stats.bedrooms,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UnitRecord {
    project: ProjectId,
    name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    stats: Option<UnitStats>,
    #[serde(default)]
    interiors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    projects: Vec<Project>,
    #[serde(default)]
    units: Vec<UnitRecord>,
    #[serde(default)]
    gallery: Vec<GalleryImage>,
}

/// Immutable content catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    units: HashMap<ProjectId, HashMap<String, UnitTypeEntry>>,
    interiors: HashMap<ProjectId, HashMap<String, Vec<String>>>,
    gallery: Vec<GalleryImage>,
}

impl Catalog {
    /// Catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a catalog from JSON content
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;

        let mut seen = Vec::with_capacity(file.projects.len());
        for project in &file.projects {
            if project.id == 0 {
                return Err(CatalogError::ZeroProjectId(project.title.clone()));
            }
            if seen.contains(&project.id) {
                return Err(CatalogError::DuplicateProject(project.id));
            }
            seen.push(project.id);
        }

        let mut units: HashMap<ProjectId, HashMap<String, UnitTypeEntry>> = HashMap::new();
        let mut interiors: HashMap<ProjectId, HashMap<String, Vec<String>>> = HashMap::new();
        for record in file.units {
            if !record.interiors.is_empty() {
                interiors
                    .entry(record.project)
                    .or_default()
                    .insert(record.name.clone(), record.interiors);
            }
            units.entry(record.project).or_default().insert(
                record.name,
                UnitTypeEntry {
                    image: record.image,
                    stats: record.stats,
                },
            );
        }

        Ok(Self {
            projects: file.projects,
            units,
            interiors,
            gallery: file.gallery,
        })
    }

    /// All projects in display order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn default_image(&self, id: ProjectId) -> Option<&str> {
        self.project(id).map(|p| p.default_image.as_str())
    }

    pub fn unit(&self, id: ProjectId, unit: &str) -> Option<&UnitTypeEntry> {
        self.units.get(&id).and_then(|units| units.get(unit))
    }

    /// Representative image for a unit type, if one is defined
    pub fn unit_image(&self, id: ProjectId, unit: &str) -> Option<&str> {
        self.unit(id, unit).and_then(|entry| entry.image.as_deref())
    }

    /// Stats for a unit type, falling back to placeholders
    pub fn stats(&self, id: ProjectId, unit: Option<&str>) -> StatsView<'_> {
        unit.and_then(|unit| self.unit(id, unit))
            .and_then(|entry| entry.stats.as_ref())
            .map(StatsView::from_stats)
            .unwrap_or_else(StatsView::placeholder)
    }

    /// Interior images for a unit type (empty when none are defined)
    pub fn interiors(&self, id: ProjectId, unit: &str) -> &[String] {
        self.interiors
            .get(&id)
            .and_then(|units| units.get(unit))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery
    }
}
