mod render;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use classort_edit::{EditError, apply_file_edit, edit_for, preview_patch};
use classort_engine::validate;
use classort_scan::{ScanConfig, scan_source};
use classort_types::report::ToolInfo;
use fs_err as fs;
use render::{FileFindings, build_report, render_text};
use std::collections::BTreeSet;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

#[derive(Debug, Parser)]
#[command(
    name = "classort",
    version,
    about = "Category-order linter and fixer for utility-class combinator calls."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report category-order violations without changing anything.
    Check(CheckArgs),
    /// Rewrite out-of-order call sites (dry-run unless --write).
    Fix(FixArgs),
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Files or directories to scan (default: current directory).
    #[arg(default_value = ".")]
    paths: Vec<Utf8PathBuf>,

    /// Combiner function names to inspect.
    #[arg(long = "combiner", default_value = "cn")]
    combiners: Vec<String>,

    /// Variant-builder function names to inspect.
    #[arg(long = "builder", default_value = "cva")]
    builders: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the JSON report to this path.
    #[arg(long)]
    report: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Files or directories to fix (default: current directory).
    #[arg(default_value = ".")]
    paths: Vec<Utf8PathBuf>,

    /// Combiner function names to inspect.
    #[arg(long = "combiner", default_value = "cn")]
    combiners: Vec<String>,

    /// Variant-builder function names to inspect.
    #[arg(long = "builder", default_value = "cva")]
    builders: Vec<String>,

    /// Write changes to disk. If omitted, prints the unified diff instead.
    #[arg(long, default_value_t = false)]
    write: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:?}", e);
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Fix(args) => cmd_fix(args),
    }
}

fn scan_config(combiners: Vec<String>, builders: Vec<String>) -> ScanConfig {
    ScanConfig {
        combiners,
        builders,
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<u8> {
    let config = scan_config(args.combiners, args.builders);
    let files = discover_files(&args.paths)?;
    let findings: Vec<FileFindings> = files
        .iter()
        .map(|path| inspect_file(path, &config))
        .collect::<anyhow::Result<_>>()?;

    let report = build_report(tool_info(), &findings);

    match args.format {
        OutputFormat::Text => {
            for file in &findings {
                print!("{}", render_text(file));
            }
            println!(
                "{} finding(s), {} fixable, in {} file(s)",
                report.summary.findings_total,
                report.summary.fixable,
                report.summary.files_scanned
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(path) = &args.report {
        fs::write(
            path.as_std_path(),
            serde_json::to_string_pretty(&report)?,
        )
        .with_context(|| format!("write report {path}"))?;
    }

    Ok(if report.summary.findings_total > 0 { 2 } else { 0 })
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<u8> {
    let config = scan_config(args.combiners, args.builders);
    let files = discover_files(&args.paths)?;

    let mut changed = 0usize;
    for path in &files {
        let findings = inspect_file(path, &config)?;
        let fixes: Vec<_> = findings
            .diagnostics
            .iter()
            .filter_map(|d| d.fix.clone())
            .collect();
        if fixes.is_empty() {
            continue;
        }

        let edit = edit_for(
            camino::Utf8Path::new(&findings.path),
            &findings.source,
            fixes,
        );
        let change = match apply_file_edit(&edit, !args.write) {
            Ok(change) => change,
            Err(err @ EditError::PolicyBlock(_)) => {
                eprintln!("blocked: {err}");
                return Ok(err.exit_code());
            }
            Err(EditError::Runtime(e)) => return Err(e),
        };

        if change.is_noop() {
            continue;
        }
        changed += 1;
        if args.write {
            println!("fixed {}", change.path);
        } else {
            print!("{}", preview_patch(&change));
        }
    }

    if changed == 0 {
        println!("nothing to fix");
    } else if !args.write {
        println!("{changed} file(s) would change; rerun with --write to apply");
    }
    Ok(0)
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "classort".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

/// Walk the given paths and collect source files, sorted and deduplicated so
/// output order never depends on filesystem iteration order.
fn discover_files(paths: &[Utf8PathBuf]) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut files = BTreeSet::new();
    for path in paths {
        if path.as_std_path().is_file() {
            files.insert(path.clone());
            continue;
        }
        for ext in SOURCE_EXTENSIONS {
            let pattern = format!("{path}/**/*.{ext}");
            for entry in glob::glob(&pattern).with_context(|| format!("glob {pattern}"))? {
                let found = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
                match Utf8PathBuf::from_path_buf(found) {
                    Ok(utf8) => {
                        files.insert(utf8);
                    }
                    Err(skipped) => {
                        debug!(path = %skipped.display(), "skipping non-UTF-8 path");
                    }
                }
            }
        }
    }
    Ok(files.into_iter().collect())
}

fn inspect_file(path: &Utf8PathBuf, config: &ScanConfig) -> anyhow::Result<FileFindings> {
    let source =
        fs::read_to_string(path.as_std_path()).with_context(|| format!("read {path}"))?;

    let sequences = scan_source(&source, config);
    debug!(path = %path, sequences = sequences.len(), "scanned file");

    let mut diagnostics = Vec::new();
    for sequence in &sequences {
        diagnostics.extend(validate(sequence, &source).diagnostics);
    }
    diagnostics.sort_by_key(|d| (d.span.start, d.span.end));

    Ok(FileFindings {
        path: path.to_string(),
        source,
        diagnostics,
        sequences_checked: sequences.len(),
    })
}
