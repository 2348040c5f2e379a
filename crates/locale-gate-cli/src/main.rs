// crates/locale-gate-cli/src/main.rs
// ============================================================================
// Module: Locale Gate CLI Entry Point
// Description: Command dispatcher for translation audit and gate workflows.
// Purpose: Provide a localized CLI for auditing, coverage gating, and strict
//          validation of message catalogs.
// Dependencies: clap, locale-gate-config, locale-gate-core, locale-gate-extract
// ============================================================================

//! ## Overview
//! The locale-gate CLI wires the key extractor, canonical patcher, coverage
//! evaluator, and strict validator into three subcommands. All user-facing
//! strings are routed through the i18n catalog. The Markdown report artifact
//! is written before any failing exit so CI always has the full picture.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use locale_gate_cli::FsCatalogStore;
use locale_gate_cli::i18n::Locale;
use locale_gate_cli::i18n::set_locale;
use locale_gate_cli::t;
use locale_gate_config::GateConfig;
use locale_gate_config::load_allowlist;
use locale_gate_config::load_critical_keys;
use locale_gate_core::CatalogStore;
use locale_gate_core::CoveragePolicy;
use locale_gate_core::GateStatus;
use locale_gate_core::MessageTree;
use locale_gate_core::StrictPolicy;
use locale_gate_core::StrictReport;
use locale_gate_core::evaluate_coverage;
use locale_gate_core::patch_canonical;
use locale_gate_core::render_coverage_markdown;
use locale_gate_core::render_strict_markdown;
use locale_gate_core::validate_strict;
use locale_gate_extract::ExtractOptions;
use locale_gate_extract::extract_usage;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "LOCALE_GATE_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "locale-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `LOCALE_GATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Path to `locale-gate.toml` (overrides `LOCALE_GATE_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan source for translation keys and patch the canonical catalog.
    Audit,
    /// Evaluate per-locale coverage against the tiered release policy.
    Coverage,
    /// Run zero-tolerance content checks over the critical-key list.
    Strict,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Es => Self::Es,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = GateConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;

    match command {
        Commands::Audit => command_audit(&config),
        Commands::Coverage => command_coverage(&config),
        Commands::Strict => command_strict(&config),
    }
}

// ============================================================================
// SECTION: Audit Command
// ============================================================================

/// Executes the `audit` command: extract usage keys, patch the canonical
/// catalog, and persist it when anything was inserted.
fn command_audit(config: &GateConfig) -> CliResult<ExitCode> {
    let options = ExtractOptions {
        extensions: config.source.extensions.clone(),
        ..ExtractOptions::default()
    };
    let usage = extract_usage(&config.source.dir, options)
        .map_err(|err| CliError::new(t!("audit.extract_failed", error = err)))?;
    write_stdout_line(&t!("audit.scan.summary", count = usage.len()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;

    let mut store = FsCatalogStore::new(config.catalog.messages_dir.clone());
    let mut canonical = load_canonical(&store, config)?;

    let outcome = patch_canonical(&mut canonical, &usage, &config.catalog.sentinel_prefix)
        .map_err(|err| CliError::new(t!("audit.save_failed", error = err)))?;
    if !outcome.changed() {
        write_stdout_line(&t!("audit.patch.none"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    store
        .save(&config.catalog.base_locale, &canonical)
        .map_err(|err| CliError::new(t!("audit.save_failed", error = err)))?;
    let path = config.catalog_path(&config.catalog.base_locale);
    write_stdout_line(&t!(
        "audit.patch.applied",
        count = outcome.inserted.len(),
        path = path.display()
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Coverage Command
// ============================================================================

/// Executes the `coverage` command: diff every target locale, write the
/// report artifact, and gate on the tiered policy.
fn command_coverage(config: &GateConfig) -> CliResult<ExitCode> {
    let store = FsCatalogStore::new(config.catalog.messages_dir.clone());
    let canonical = load_canonical(&store, config)?;
    let allowlist = load_allowlist(config.policy.allowlist_path.as_deref())
        .map_err(|err| CliError::new(t!("lists.load_failed", error = err)))?;

    let policy = CoveragePolicy {
        targets: config.targets(),
        threshold: config.effective_threshold(),
        allowlist,
        sentinel_prefix: config.catalog.sentinel_prefix.clone(),
    };
    let report = evaluate_coverage(&canonical, &store, &policy);

    write_report(&config.report.path, &render_coverage_markdown(&report))?;

    for entry in &report.locales {
        if entry.status == GateStatus::Warn {
            write_stderr_line(&t!(
                "coverage.warn.item",
                locale = entry.locale,
                count = entry.deficiencies.len(),
                threshold = policy.threshold
            ))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
        }
    }

    if report.passed() {
        write_stdout_line(&t!("coverage.pass"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    write_stderr_line(&t!("coverage.fail.header"))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    for detail in report.failures() {
        write_stderr_line(&t!("coverage.fail.item", detail = detail))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    Ok(ExitCode::FAILURE)
}

// ============================================================================
// SECTION: Strict Command
// ============================================================================

/// Executes the `strict` command: run the content check battery over the
/// curated critical keys for every target locale.
fn command_strict(config: &GateConfig) -> CliResult<ExitCode> {
    let store = FsCatalogStore::new(config.catalog.messages_dir.clone());
    let canonical = load_canonical(&store, config)?;
    let critical_keys = load_critical_keys(config.strict.critical_keys_path.as_deref())
        .map_err(|err| CliError::new(t!("lists.load_failed", error = err)))?;
    if critical_keys.is_empty() {
        // The artifact is overwritten on every run; a stale verdict from a
        // previous gate must never survive an empty key list.
        write_report(&config.report.path, &render_strict_markdown(&StrictReport::default()))?;
        write_stdout_line(&t!("strict.none"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let policy = StrictPolicy {
        critical_keys,
        brand_keys: config.strict.brand_keys.iter().cloned().collect(),
    };
    let targets: Vec<_> = config.targets().into_iter().map(|(locale, _)| locale).collect();
    let report = validate_strict(&canonical, &store, &targets, &policy);

    write_report(&config.report.path, &render_strict_markdown(&report))?;

    if report.passed() {
        write_stdout_line(&t!("strict.pass"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    write_stderr_line(&t!("strict.fail", count = report.errors.len()))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    Ok(ExitCode::FAILURE)
}

// ============================================================================
// SECTION: Shared Helpers
// ============================================================================

/// Loads the canonical catalog, treating absence or malformation as fatal.
///
/// Every subcommand compares against the canonical catalog; without it no
/// result would be meaningful, so the whole run aborts.
fn load_canonical(store: &FsCatalogStore, config: &GateConfig) -> CliResult<MessageTree> {
    let locale = &config.catalog.base_locale;
    match store.load(locale) {
        Ok(Some(tree)) => Ok(tree),
        Ok(None) => Err(CliError::new(t!(
            "canonical.missing",
            locale = locale,
            dir = config.catalog.messages_dir.display()
        ))),
        Err(err) => Err(CliError::new(t!("canonical.load_failed", locale = locale, error = err))),
    }
}

/// Writes the Markdown report artifact, creating parent directories.
fn write_report(path: &Path, content: &str) -> CliResult<()> {
    let result = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| fs::write(path, content));
    result.map_err(|err| {
        CliError::new(t!("report.write_failed", path = path.display(), error = err))
    })?;
    write_stdout_line(&t!("report.written", path = path.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Resolves the output locale from the CLI flag or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Prints top-level CLI help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Writes a line to stdout using an explicit handle.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr using an explicit handle.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
