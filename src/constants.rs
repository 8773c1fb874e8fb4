//! Common constants used throughout create-wp-theme.

/// Entries never copied out of the template: build output, VCS and OS
/// metadata, logs and lint caches.
pub const IGNORED_PATTERNS: [&str; 7] = [
    "node_modules",
    ".git",
    "dist",
    ".DS_Store",
    "Thumbs.db",
    "*.log",
    ".eslintcache",
];

/// Manifest file, relative to the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Theme stylesheet carrying the WordPress header block
pub const HEADER_FILE: &str = "public/style.css";

/// HTML entry point
pub const HTML_FILE: &str = "index.html";

pub const THEME_NAME_LABEL: &str = "Theme Name";
pub const AUTHOR_LABEL: &str = "Author";
pub const DESCRIPTION_LABEL: &str = "Description";

pub const TITLE_OPEN: &str = "<title>";
pub const TITLE_CLOSE: &str = "</title>";
pub const OG_TITLE_OPEN: &str = r#"<meta property="og:title" content=""#;
pub const OG_TITLE_CLOSE: &str = "\"";

pub const DEFAULT_DESCRIPTION: &str = "A custom WordPress theme built with React and Vite";

/// Directory name of the bundled template
pub const TEMPLATE_DIR: &str = "template";

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";
