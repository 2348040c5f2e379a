// crates/locale-gate-extract/src/lib.rs
// ============================================================================
// Module: Locale Gate Key Extractor
// Description: Regex-heuristic scan of a source tree for translation keys.
// Purpose: Produce the set of translation keys the application references.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! The extractor walks a source tree and applies pattern heuristics to find
//! translation-accessor bindings and the string-literal keys passed to them.
//! Template-literal calls contribute only their static namespace prefix. The
//! result is a deduplicated usage-key set; by construction it may under- or
//! over-approximate fully dynamic key construction.
//!
//! ## Invariants
//! - A missing source directory yields an empty result, not an error.
//! - Unrelated syntax never aborts a scan; only I/O failures do.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use regex::Regex;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Extraction failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// I/O failure while walking or reading source files.
    #[error("source io error for {}: {message}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error description.
        message: String,
    },
    /// A scan pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),
}

// ============================================================================
// SECTION: Options
// ============================================================================

/// Scan options controlling accessor names, extensions, and key filtering.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Factory functions whose bindings become translation accessors.
    pub accessor_factories: Vec<String>,
    /// Fallback binding name when a file declares no accessor bindings.
    pub default_binding: String,
    /// File extensions included in the walk.
    pub extensions: Vec<String>,
    /// Known false-positive tokens rejected by the key-validity filter.
    pub key_blocklist: BTreeSet<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            accessor_factories: vec!["useTranslations".to_string(), "getTranslations".to_string()],
            default_binding: "t".to_string(),
            extensions: vec![".ts".to_string(), ".tsx".to_string()],
            key_blocklist: ["limit", "offset", "host", "callbackUrl", "next-intl/server"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

// ============================================================================
// SECTION: Usage Records
// ============================================================================

/// One accepted translation call found in source.
///
/// Records are transient: they exist only to be qualified and unioned into
/// the usage-key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    /// Namespace bound to the accessor, when one was declared.
    pub namespace: Option<String>,
    /// Raw key literal (or static template prefix) passed to the accessor.
    pub raw_key: String,
    /// Source file the call was found in.
    pub source_file: PathBuf,
}

impl UsageRecord {
    /// Returns the namespace-qualified flat key.
    #[must_use]
    pub fn qualified(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{}", self.raw_key),
            None => self.raw_key.clone(),
        }
    }
}

// ============================================================================
// SECTION: Key Validity
// ============================================================================

/// Returns true when a captured literal plausibly is a translation key.
fn is_valid_key(key: &str, blocklist: &BTreeSet<String>) -> bool {
    if key.len() < 2 {
        return false;
    }
    if key.chars().any(char::is_whitespace) {
        return false;
    }
    if key.contains('/') || key.contains('@') || key.contains(':') {
        return false;
    }
    if key.contains("${") {
        return false;
    }
    if key.starts_with("http") {
        return false;
    }
    !blocklist.contains(key)
}

// ============================================================================
// SECTION: Scanner
// ============================================================================

/// Compiled scan patterns shared across files.
struct Scanner {
    /// Matches accessor bindings with an optional namespace argument.
    binding_re: Regex,
    /// Per-binding call and template-literal patterns, compiled on demand.
    call_cache: BTreeMap<String, (Regex, Regex)>,
    /// Scan options.
    options: ExtractOptions,
}

impl Scanner {
    /// Compiles the binding pattern for the configured factories.
    fn new(options: ExtractOptions) -> Result<Self, ExtractError> {
        let factories = options
            .accessor_factories
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r#"(?:const|let|var)\s+(\w+)\s*=\s*(?:await\s+)?(?:{factories})\s*\(\s*(?:\{{\s*(?:locale,\s*)?namespace:\s*)?["']([^"']*)["'](?:\s*\}})?\s*\)"#
        );
        let binding_re = Regex::new(&pattern).map_err(|err| ExtractError::Pattern(err.to_string()))?;
        Ok(Self {
            binding_re,
            call_cache: BTreeMap::new(),
            options,
        })
    }

    /// Returns the call and template patterns for one binding name.
    fn patterns_for(&mut self, binding: &str) -> Result<&(Regex, Regex), ExtractError> {
        if !self.call_cache.contains_key(binding) {
            let escaped = regex::escape(binding);
            let call = Regex::new(&format!(r#"\b{escaped}\s*\(\s*["']([^"']*)["']"#))
                .map_err(|err| ExtractError::Pattern(err.to_string()))?;
            let template = Regex::new(&format!(r"\b{escaped}\s*\(\s*`([^`$]+)\.\$\{{"))
                .map_err(|err| ExtractError::Pattern(err.to_string()))?;
            self.call_cache.insert(binding.to_string(), (call, template));
        }
        self.call_cache
            .get(binding)
            .ok_or_else(|| ExtractError::Pattern(format!("missing pattern for {binding}")))
    }

    /// Scans one file's content for accepted translation calls.
    fn scan_content(&mut self, content: &str, file: &Path) -> Result<Vec<UsageRecord>, ExtractError> {
        let mut bindings: BTreeMap<String, Option<String>> = BTreeMap::new();
        for capture in self.binding_re.captures_iter(content) {
            let name = capture[1].to_string();
            let namespace = capture[2].to_string();
            bindings.insert(name, (!namespace.is_empty()).then_some(namespace));
        }
        if bindings.is_empty() {
            bindings.insert(self.options.default_binding.clone(), None);
        }

        let blocklist = self.options.key_blocklist.clone();
        let mut records = Vec::new();
        for (binding, namespace) in &bindings {
            let (call_re, template_re) = self.patterns_for(binding)?;
            for capture in call_re.captures_iter(content) {
                let key = capture[1].to_string();
                if is_valid_key(&key, &blocklist) {
                    records.push(UsageRecord {
                        namespace: namespace.clone(),
                        raw_key: key,
                        source_file: file.to_path_buf(),
                    });
                }
            }
            // Dynamic suffixes: only the static prefix is knowable.
            for capture in template_re.captures_iter(content) {
                records.push(UsageRecord {
                    namespace: namespace.clone(),
                    raw_key: capture[1].to_string(),
                    source_file: file.to_path_buf(),
                });
            }
        }
        Ok(records)
    }
}

// ============================================================================
// SECTION: File Walk
// ============================================================================

/// Recursively collects files matching the configured extensions.
fn collect_files(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> Result<(), ExtractError> {
    let entries = fs::read_dir(dir).map_err(|err| ExtractError::Io {
        path: dir.to_path_buf(),
        message: err.to_string(),
    })?;
    for entry in entries {
        let entry = entry.map_err(|err| ExtractError::Io {
            path: dir.to_path_buf(),
            message: err.to_string(),
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, extensions, out)?;
        } else if path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
        {
            out.push(path);
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Scans the source tree and returns the deduplicated usage-key set.
///
/// A missing `root` directory yields an empty set so partial checkouts do not
/// fail the gate spuriously.
///
/// # Errors
///
/// Returns [`ExtractError`] on unreadable files or an invalid scan pattern.
pub fn extract_usage(root: &Path, options: ExtractOptions) -> Result<BTreeSet<String>, ExtractError> {
    let mut keys = BTreeSet::new();
    if !root.is_dir() {
        return Ok(keys);
    }

    let extensions = options.extensions.clone();
    let mut scanner = Scanner::new(options)?;
    let mut files = Vec::new();
    collect_files(root, &extensions, &mut files)?;
    files.sort();

    for file in files {
        let content = fs::read_to_string(&file).map_err(|err| ExtractError::Io {
            path: file.clone(),
            message: err.to_string(),
        })?;
        for record in scanner.scan_content(&content, &file)? {
            keys.insert(record.qualified());
        }
    }
    Ok(keys)
}

/// Scans a single content buffer, for callers that manage their own walk.
///
/// # Errors
///
/// Returns [`ExtractError`] when a scan pattern fails to compile.
pub fn scan_source(
    content: &str,
    file: &Path,
    options: ExtractOptions,
) -> Result<Vec<UsageRecord>, ExtractError> {
    Scanner::new(options)?.scan_content(content, file)
}
