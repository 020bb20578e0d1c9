use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

const DATA_FILE: &str = "supported-versions.json";

/// Versions checked when the catalog can't be loaded.
pub const FALLBACK_VERSIONS: &[&str] = &["3.14", "3.15", "3.16", "3.17"];

/// Enterprise Server release used when nothing better is known.
pub const DEFAULT_ENTERPRISE: &str = "3.17";

/// Printed by `--list-versions` when the catalog can't be loaded.
pub const LISTING_FALLBACK: &str = "3.11, 3.12, 3.13, 3.14, 3.15, 3.16, 3.17";

const ENTERPRISE_SERVER_PREFIX: &str = "enterprise-server@";

/// Catalog of supported GitHub Enterprise Server releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportedVersions {
    pub last_updated: String,
    pub supported_versions: Vec<String>,
    pub latest_version: String,
}

impl SupportedVersions {
    pub fn supports(&self, version: &str) -> bool {
        self.supported_versions.iter().any(|v| v == version)
    }
}

/// Where the catalog comes from.
pub trait VersionSource {
    fn load(&self) -> Result<SupportedVersions>;
}

/// Reads `supported-versions.json` from the first data directory that has it.
#[derive(Debug, Clone)]
pub struct DataFileVersions {
    candidates: Vec<PathBuf>,
}

impl DataFileVersions {
    /// Search next to the executable, then the per-user data directory, then
    /// `./data` for development checkouts.
    pub fn new() -> Self {
        let mut candidates = Vec::new();
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(dir.join("data").join(DATA_FILE));
        }
        if let Some(dirs) = ProjectDirs::from("", "", "gh-search-docs") {
            candidates.push(dirs.data_dir().join(DATA_FILE));
        }
        candidates.push(Path::new("data").join(DATA_FILE));
        Self { candidates }
    }

    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn load_from(path: &Path) -> Result<SupportedVersions> {
        let data =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl Default for DataFileVersions {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for DataFileVersions {
    fn load(&self) -> Result<SupportedVersions> {
        let path = self
            .candidates
            .iter()
            .find(|path| path.is_file())
            .with_context(|| format!("{DATA_FILE} not found"))?;
        debug!("loading supported versions from {}", path.display());
        Self::load_from(path)
    }
}

/// Map a `--version` value to an identifier the search API accepts.
///
/// Unsupported Enterprise Server releases fall back to the latest one, and
/// unknown tokens fall back to `free-pro-team`.
pub fn normalize_version(requested: &str, catalog: Option<&SupportedVersions>) -> String {
    match requested {
        "free-pro-team" | "enterprise-cloud" => return requested.to_string(),
        _ => {}
    }

    let Some(release) = requested.strip_prefix(ENTERPRISE_SERVER_PREFIX) else {
        debug!("unknown version {requested:?}, using free-pro-team");
        return "free-pro-team".to_string();
    };

    let supported = match catalog {
        Some(catalog) => catalog.supports(release),
        None => FALLBACK_VERSIONS.contains(&release),
    };
    if supported {
        return requested.to_string();
    }

    let latest = catalog
        .map(|catalog| catalog.latest_version.as_str())
        .filter(|latest| !latest.is_empty())
        .unwrap_or(DEFAULT_ENTERPRISE);
    debug!("unsupported enterprise server release {release:?}, using {latest}");
    format!("{ENTERPRISE_SERVER_PREFIX}{latest}")
}

/// The `--list-versions` report.
pub fn format_version_listing(catalog: &SupportedVersions) -> String {
    let mut out = String::from("Supported GitHub Enterprise Server versions:\n");
    for version in &catalog.supported_versions {
        if *version == catalog.latest_version {
            out.push_str(&format!("  {version} (latest)\n"));
        } else {
            out.push_str(&format!("  {version}\n"));
        }
    }
    out.push_str(&format!("\nLast updated: {}\n", catalog.last_updated));
    out.push_str("\nUsage: gh search-docs --version enterprise-server@<version> <query>\n");
    out
}
