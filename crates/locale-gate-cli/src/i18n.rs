// crates/locale-gate-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings; a translation gate should not ship
//          hardcoded console copy itself.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The locale-gate CLI stores its user-facing strings in a small translation
//! catalog. All runtime output should be routed through the
//! [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Spanish.
    Es,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries loaded into the localized message bundle.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "locale-gate {version}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'es'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine translated and may be inaccurate.",
    ),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("lists.load_failed", "Failed to load policy list: {error}"),
    ("canonical.load_failed", "Failed to load canonical catalog {locale}: {error}"),
    ("canonical.missing", "Canonical catalog {locale} not found under {dir}."),
    ("audit.extract_failed", "Source scan failed: {error}"),
    ("audit.scan.summary", "Found {count} unique translation keys in source."),
    ("audit.patch.none", "Canonical catalog already covers every usage key."),
    (
        "audit.patch.applied",
        "Inserted {count} placeholder keys into {path}. Translate them before release.",
    ),
    ("audit.save_failed", "Failed to write canonical catalog: {error}"),
    ("report.written", "Report written to {path}."),
    ("report.write_failed", "Failed to write report {path}: {error}"),
    ("coverage.pass", "Coverage gate PASS."),
    (
        "coverage.warn.item",
        "Warning: {locale} has {count} missing/untranslated keys (threshold {threshold}).",
    ),
    ("coverage.fail.header", "Coverage gate FAIL:"),
    ("coverage.fail.item", "  - {detail}"),
    ("strict.none", "No critical keys configured; nothing to validate."),
    ("strict.pass", "Strict gate PASS: all critical keys are strictly translated."),
    ("strict.fail", "Strict gate FAIL: {count} validation errors."),
];

/// Static Spanish catalog entries.
const CATALOG_ES: &[(&str, &str)] = &[
    ("main.version", "locale-gate {version}"),
    (
        "i18n.lang.invalid_env",
        "Valor no válido para {env}: {value}. Se esperaba 'en' o 'es'.",
    ),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la salida que no está en inglés se traduce automáticamente y puede ser inexacta.",
    ),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "salida"),
    ("output.write_failed", "No se pudo escribir en {stream}: {error}"),
    ("config.load_failed", "No se pudo cargar la configuración: {error}"),
    ("lists.load_failed", "No se pudo cargar la lista de políticas: {error}"),
    (
        "canonical.load_failed",
        "No se pudo cargar el catálogo canónico {locale}: {error}",
    ),
    ("canonical.missing", "El catálogo canónico {locale} no existe en {dir}."),
    ("audit.extract_failed", "Falló el escaneo del código fuente: {error}"),
    ("audit.scan.summary", "Se encontraron {count} claves de traducción únicas en el código."),
    ("audit.patch.none", "El catálogo canónico ya cubre todas las claves usadas."),
    (
        "audit.patch.applied",
        "Se insertaron {count} claves de marcador de posición en {path}. Tradúcelas antes del \
         lanzamiento.",
    ),
    ("audit.save_failed", "No se pudo escribir el catálogo canónico: {error}"),
    ("report.written", "Informe escrito en {path}."),
    ("report.write_failed", "No se pudo escribir el informe {path}: {error}"),
    ("coverage.pass", "Puerta de cobertura APROBADA."),
    (
        "coverage.warn.item",
        "Aviso: a {locale} le faltan {count} claves sin traducir (umbral {threshold}).",
    ),
    ("coverage.fail.header", "Puerta de cobertura RECHAZADA:"),
    ("coverage.fail.item", "  - {detail}"),
    ("strict.none", "No hay claves críticas configuradas; nada que validar."),
    (
        "strict.pass",
        "Puerta estricta APROBADA: todas las claves críticas están traducidas.",
    ),
    ("strict.fail", "Puerta estricta RECHAZADA: {count} errores de validación."),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_ES_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Es => CATALOG_ES_MAP.get_or_init(|| CATALOG_ES.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let locale = current_locale();
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
