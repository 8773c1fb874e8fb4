//! Personalizes a freshly copied project.
//! Rewrites the designated fields of the manifest, the stylesheet header and
//! the HTML entry point. Every step is best effort: problems are returned as
//! [`FieldFailure`] entries rather than raised.

use crate::constants::{
    AUTHOR_LABEL, DESCRIPTION_LABEL, HEADER_FILE, HTML_FILE, MANIFEST_FILE, OG_TITLE_CLOSE,
    OG_TITLE_OPEN, THEME_NAME_LABEL, TITLE_CLOSE, TITLE_OPEN,
};
use crate::error::{Error, Result};
use crate::metadata::ProjectMetadata;
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub mod header;
pub mod html;
pub mod manifest;

/// Replace the value found after `marker` with `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRule<'a> {
    pub marker: &'a str,
    pub replacement: &'a str,
}

impl<'a> SubstitutionRule<'a> {
    pub fn new(marker: &'a str, replacement: &'a str) -> Self {
        Self { marker, replacement }
    }
}

/// Delimiters around a replaceable region of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    /// Name used when reporting the field
    pub name: String,
    pub open: String,
    pub close: String,
}

impl Bounds {
    pub fn new<S: Into<String>>(name: S, open: S, close: S) -> Self {
        Self { name: name.into(), open: open.into(), close: close.into() }
    }
}

/// Which files get customized and where their fields are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationTargets {
    /// Manifest path relative to the project root
    pub manifest: PathBuf,
    /// Stylesheet carrying `Label: value` header lines
    pub header: PathBuf,
    /// HTML entry point
    pub html: PathBuf,
    pub theme_name_label: String,
    pub author_label: String,
    pub description_label: String,
    pub title: Bounds,
    pub og_title: Bounds,
}

impl Default for CustomizationTargets {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(MANIFEST_FILE),
            header: PathBuf::from(HEADER_FILE),
            html: PathBuf::from(HTML_FILE),
            theme_name_label: THEME_NAME_LABEL.to_string(),
            author_label: AUTHOR_LABEL.to_string(),
            description_label: DESCRIPTION_LABEL.to_string(),
            title: Bounds::new("title", TITLE_OPEN, TITLE_CLOSE),
            og_title: Bounds::new("og:title", OG_TITLE_OPEN, OG_TITLE_CLOSE),
        }
    }
}

/// The customized file a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Manifest,
    Header,
    Html,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Manifest => write!(f, "manifest"),
            Artifact::Header => write!(f, "style header"),
            Artifact::Html => write!(f, "HTML entry"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The file exists but the field's marker or tag is absent
    MarkerMissing,
    /// The manifest is not well-formed
    Unparsable(String),
    /// The file could not be read or written
    Unwritable(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MarkerMissing => write!(f, "marker not found"),
            FailureReason::Unparsable(e) | FailureReason::Unwritable(e) => write!(f, "{e}"),
        }
    }
}

impl From<&Error> for FailureReason {
    fn from(err: &Error) -> Self {
        match err {
            Error::ParseError { .. } => FailureReason::Unparsable(err.to_string()),
            _ => FailureReason::Unwritable(err.to_string()),
        }
    }
}

/// A customization field that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub artifact: Artifact,
    pub field: String,
    pub reason: FailureReason,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field '{}': {}", self.artifact, self.field, self.reason)
    }
}

/// Edits `path` in place with `edit`, which returns the new content and the
/// fields it could not find.
///
/// An absent file is skipped without failures. Any error fails every field
/// in `fields`. The file is only written when its content changes.
fn edit_file<F>(artifact: Artifact, path: &Path, fields: &[&str], edit: F) -> Vec<FieldFailure>
where
    F: FnOnce(&str) -> Result<(String, Vec<String>)>,
{
    if !path.exists() {
        debug!("Skipping {artifact}: '{}' does not exist", path.display());
        return Vec::new();
    }

    let edited = fs::read_to_string(path).map_err(Error::IoError).and_then(|content| {
        let (updated, missing) = edit(&content)?;
        if updated != content {
            fs::write(path, updated).map_err(Error::IoError)?;
            debug!("Customized '{}'", path.display());
        }
        Ok(missing)
    });

    match edited {
        Ok(missing) => missing
            .into_iter()
            .map(|field| {
                warn!("No '{field}' marker in '{}'", path.display());
                FieldFailure { artifact, field, reason: FailureReason::MarkerMissing }
            })
            .collect(),
        Err(err) => {
            warn!("Could not customize '{}': {err}", path.display());
            let reason = FailureReason::from(&err);
            fields
                .iter()
                .map(|field| FieldFailure {
                    artifact,
                    field: field.to_string(),
                    reason: reason.clone(),
                })
                .collect()
        }
    }
}

/// Assigns `name`, `description` and `author` in the manifest.
pub fn customize_manifest(
    project_root: &Path,
    targets: &CustomizationTargets,
    metadata: &ProjectMetadata,
) -> Vec<FieldFailure> {
    let path = project_root.join(&targets.manifest);
    let rules = [
        SubstitutionRule::new("name", metadata.project_name()),
        SubstitutionRule::new("description", metadata.description()),
        SubstitutionRule::new("author", metadata.author()),
    ];
    let fields: Vec<&str> = rules.iter().map(|rule| rule.marker).collect();

    edit_file(Artifact::Manifest, &path, &fields, |content| {
        let updated = manifest::assign_fields(content, &rules)
            .map_err(|source| Error::ParseError { path: path.clone(), source })?;
        Ok((updated, Vec::new()))
    })
}

/// Rewrites the theme name, author and description header lines.
pub fn customize_header(
    project_root: &Path,
    targets: &CustomizationTargets,
    metadata: &ProjectMetadata,
) -> Vec<FieldFailure> {
    let path = project_root.join(&targets.header);
    let rules = [
        SubstitutionRule::new(&targets.theme_name_label, metadata.theme_name()),
        SubstitutionRule::new(&targets.author_label, metadata.author()),
        SubstitutionRule::new(&targets.description_label, metadata.description()),
    ];
    let fields: Vec<&str> = rules.iter().map(|rule| rule.marker).collect();

    edit_file(Artifact::Header, &path, &fields, |content| Ok(header::substitute(content, &rules)))
}

/// Sets the document title and the `og:title` meta value to the theme name.
pub fn customize_html(
    project_root: &Path,
    targets: &CustomizationTargets,
    metadata: &ProjectMetadata,
) -> Vec<FieldFailure> {
    let path = project_root.join(&targets.html);
    let value = html::escape(metadata.theme_name());
    let rules = [(&targets.title, value.as_str()), (&targets.og_title, value.as_str())];
    let fields: Vec<&str> = rules.iter().map(|(bounds, _)| bounds.name.as_str()).collect();

    edit_file(Artifact::Html, &path, &fields, |content| Ok(html::substitute(content, &rules)))
}
