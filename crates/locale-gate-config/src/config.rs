// crates/locale-gate-config/src/config.rs
// ============================================================================
// Module: Locale Gate Configuration
// Description: Configuration loading and validation for the locale gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: locale-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. Missing
//! or inconsistent configuration fails closed: the gate refuses to run on a
//! policy it cannot fully trust.
//!
//! ## Invariants
//! - The canonical locale never appears in a coverage tier.
//! - A locale belongs to at most one coverage tier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use locale_gate_core::CoverageTier;
use locale_gate_core::LocaleCode;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "locale-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "LOCALE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;

/// Default canonical locale.
const DEFAULT_BASE_LOCALE: &str = "en";
/// Default catalog directory.
const DEFAULT_MESSAGES_DIR: &str = "messages";
/// Default sentinel prefix marking machine-inserted placeholders.
const DEFAULT_SENTINEL_PREFIX: &str = "[TODO_TRANSLATE] ";
/// Default source tree scanned for usage keys.
const DEFAULT_SOURCE_DIR: &str = "src";
/// Default report artifact path.
const DEFAULT_REPORT_PATH: &str = "qa-i18n/i18n-report.md";
/// Default deficiency tolerance for thresholded locales.
const DEFAULT_THRESHOLD: usize = 50;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Sections
// ============================================================================

/// Canonical catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Canonical (source-of-truth) locale.
    pub base_locale: LocaleCode,
    /// Directory holding per-locale `<locale>.json` catalogs.
    pub messages_dir: PathBuf,
    /// Prefix written into machine-inserted placeholder values.
    pub sentinel_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_locale: LocaleCode::new(DEFAULT_BASE_LOCALE),
            messages_dir: PathBuf::from(DEFAULT_MESSAGES_DIR),
            sentinel_prefix: DEFAULT_SENTINEL_PREFIX.to_string(),
        }
    }
}

/// Source-scan settings for the key extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Root of the application source tree.
    pub dir: PathBuf,
    /// File extensions included in the scan.
    pub extensions: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            extensions: vec![".ts".to_string(), ".tsx".to_string()],
        }
    }
}

/// Tiered coverage policy settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Zero-tolerance locales; any deficiency fails the gate.
    pub blocking: Vec<LocaleCode>,
    /// Threshold-tolerant locales; deficiencies warn up to `threshold`.
    pub thresholded: Vec<LocaleCode>,
    /// Maximum tolerated deficiency count for thresholded locales.
    pub threshold: Option<usize>,
    /// Optional JSON file of `"locale:key"` allowlist entries.
    pub allowlist_path: Option<PathBuf>,
}

/// Strict-validation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrictConfig {
    /// Optional JSON file of curated business-critical keys.
    pub critical_keys_path: Option<PathBuf>,
    /// Keys allowed to match the canonical value verbatim.
    pub brand_keys: Vec<String>,
}

/// Report artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Markdown report path, written on every run.
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Root configuration for one gate run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Canonical catalog settings.
    pub catalog: CatalogConfig,
    /// Source-scan settings.
    pub source: SourceConfig,
    /// Tiered coverage policy.
    pub policy: PolicyConfig,
    /// Strict-validation settings.
    pub strict: StrictConfig,
    /// Report artifact settings.
    pub report: ReportConfig,
}

impl GateConfig {
    /// Loads and validates configuration from the given path.
    ///
    /// Falls back to `LOCALE_GATE_CONFIG`, then to `locale-gate.toml`, when
    /// no path is provided.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on read, parse, or validation failure.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path);
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.base_locale.as_str().is_empty() {
            return Err(ConfigError::Invalid("base_locale must not be empty".to_string()));
        }
        if self.catalog.sentinel_prefix.is_empty() {
            return Err(ConfigError::Invalid("sentinel_prefix must not be empty".to_string()));
        }
        if self.source.extensions.is_empty() {
            return Err(ConfigError::Invalid("source.extensions must not be empty".to_string()));
        }

        let mut seen: BTreeSet<&LocaleCode> = BTreeSet::new();
        for locale in self.policy.blocking.iter().chain(&self.policy.thresholded) {
            if locale == &self.catalog.base_locale {
                return Err(ConfigError::Invalid(format!(
                    "canonical locale {locale} must not appear in a coverage tier"
                )));
            }
            if !seen.insert(locale) {
                return Err(ConfigError::Invalid(format!(
                    "locale {locale} assigned to more than one coverage tier"
                )));
            }
        }
        Ok(())
    }

    /// Returns the effective deficiency threshold for thresholded locales.
    #[must_use]
    pub fn effective_threshold(&self) -> usize {
        self.policy.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Returns all target locales with their tier, in report order.
    ///
    /// Blocking locales come first, then thresholded locales, each in
    /// configured order.
    #[must_use]
    pub fn targets(&self) -> Vec<(LocaleCode, CoverageTier)> {
        self.policy
            .blocking
            .iter()
            .map(|locale| (locale.clone(), CoverageTier::Blocking))
            .chain(
                self.policy
                    .thresholded
                    .iter()
                    .map(|locale| (locale.clone(), CoverageTier::Thresholded)),
            )
            .collect()
    }

    /// Returns the catalog file path for one locale.
    #[must_use]
    pub fn catalog_path(&self, locale: &LocaleCode) -> PathBuf {
        self.catalog.messages_dir.join(format!("{locale}.json"))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_CONFIG_NAME)
}
