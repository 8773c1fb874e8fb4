//! Project metadata intake.
//! Values are gathered from stdin JSON and command-line flags, completed with
//! defaults and validated once before anything touches the filesystem.

use crate::constants::DEFAULT_DESCRIPTION;
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::Read;

const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Validated metadata of the project being generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    project_name: String,
    theme_name: String,
    author: String,
    description: String,
}

impl ProjectMetadata {
    /// Validates and builds the metadata record.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the project name is empty or contains
    ///   characters other than letters, digits, `-` and `_`, if the theme name
    ///   is empty, or if any value contains a line break or control character
    pub fn new<S: Into<String>>(
        project_name: S,
        theme_name: S,
        author: S,
        description: S,
    ) -> Result<Self> {
        let metadata = Self {
            project_name: project_name.into(),
            theme_name: theme_name.into(),
            author: author.into(),
            description: description.into(),
        };

        validate_project_name(&metadata.project_name)?;
        if metadata.theme_name.trim().is_empty() {
            return Err(Error::ValidationError("theme name must not be empty".to_string()));
        }
        validate_single_line("theme name", &metadata.theme_name)?;
        validate_single_line("author", &metadata.author)?;
        validate_single_line("description", &metadata.description)?;

        Ok(metadata)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Checks the project name against `[A-Za-z0-9_-]+`.
pub fn validate_project_name(name: &str) -> Result<()> {
    let pattern =
        Regex::new(PROJECT_NAME_PATTERN).map_err(|e| Error::ValidationError(e.to_string()))?;
    if !pattern.is_match(name) {
        return Err(Error::ValidationError(format!(
            "project name '{name}' may only include letters, numbers, dashes, and underscores"
        )));
    }
    Ok(())
}

fn validate_single_line(field: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_control) {
        return Err(Error::ValidationError(format!(
            "{field} must be a single line without control characters"
        )));
    }
    Ok(())
}

/// Theme name derived from the project name, e.g. `my-wp-site` → `My Wp Site`.
///
/// Only `-` separates words. Each word gets an uppercase first letter and
/// keeps the rest as typed, so `my_site` → `My_site` and `myWP` → `MyWP`.
pub fn default_theme_name(project_name: &str) -> String {
    project_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Partially filled metadata, as read from stdin or the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct MetadataInput {
    #[serde(default, alias = "projectName")]
    pub project_name: Option<String>,
    #[serde(default, alias = "themeName")]
    pub theme_name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MetadataInput {
    /// Parses a JSON object; blank input yields an empty record.
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(content)
            .map_err(|e| Error::ValidationError(format!("invalid metadata JSON: {e}")))
    }

    /// Reads a JSON object from `reader` (usually stdin).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer).map_err(Error::IoError)?;
        Self::from_json(&buffer)
    }

    /// Fields set in `other` win over fields set in `self`.
    pub fn merge(self, other: MetadataInput) -> Self {
        Self {
            project_name: other.project_name.or(self.project_name),
            theme_name: other.theme_name.or(self.theme_name),
            author: other.author.or(self.author),
            description: other.description.or(self.description),
        }
    }

    /// Fills in defaults and validates.
    ///
    /// # Errors
    /// * `Error::ValidationError` if no project name was given or validation fails
    pub fn resolve(self) -> Result<ProjectMetadata> {
        let project_name = self
            .project_name
            .ok_or_else(|| Error::ValidationError("project name is required".to_string()))?;
        let theme_name = self.theme_name.unwrap_or_else(|| default_theme_name(&project_name));
        let author = self.author.unwrap_or_default();
        let description = self.description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        ProjectMetadata::new(project_name, theme_name, author, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_name() {
        assert_eq!(default_theme_name("my-wp-site"), "My Wp Site");
        assert_eq!(default_theme_name("my_site"), "My_site");
        assert_eq!(default_theme_name("myWP"), "MyWP");
        assert_eq!(default_theme_name("blog-2024"), "Blog 2024");
    }

    #[test]
    fn test_merge_prefers_other() {
        let stdin = MetadataInput {
            project_name: Some("from-stdin".to_string()),
            author: Some("Stdin Author".to_string()),
            ..Default::default()
        };
        let flags = MetadataInput {
            project_name: Some("from-flags".to_string()),
            ..Default::default()
        };

        let merged = stdin.merge(flags);
        assert_eq!(merged.project_name.as_deref(), Some("from-flags"));
        assert_eq!(merged.author.as_deref(), Some("Stdin Author"));
    }
}
