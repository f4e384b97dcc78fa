//! Command-line interface for vcxcheck.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use walkdir::WalkDir;

use crate::checker::Checker;
use crate::reprioritize::{self, FREQUENCY_THRESHOLD};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Project descriptor files end in this suffix (`.vcxproj`, `.proj`, ...).
const PROJECT_SUFFIX: &str = "proj";

/// Static checks for MSBuild C++ projects.
///
/// `check` walks a directory tree for project descriptors, applies a fixed
/// set of rules to each project's declared files and build settings, and
/// emits one pipe-delimited issue record per finding on stdout.
/// `reprioritize` reads such records on stdin and bumps rare rules to
/// top priority.
#[derive(Parser)]
#[command(name = "vcxcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree for C++ projects and report rule violations
    Check(CheckArgs),
    /// Rewrite priorities of low-frequency rules in a record stream
    #[command(visible_alias = "reprio")]
    Reprioritize(ReprioritizeArgs),
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Root directory to scan recursively for project files
    pub root: PathBuf,

    /// Report declared files that are missing from disk (UD#1)
    #[arg(long)]
    pub report_missing: bool,
}

/// Arguments for the reprioritize command. Input is stdin, output stdout.
#[derive(Parser)]
pub struct ReprioritizeArgs {}

/// Find all project descriptor files under `root`.
fn collect_projects(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut projects = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            let name = entry.file_name().to_string_lossy();
            if name.ends_with(PROJECT_SUFFIX) {
                projects.push(entry.path().to_path_buf());
            }
        }
    }

    Ok(projects)
}

/// Run the check command.
///
/// The checker is advisory tooling that must not break a build step: any
/// fault, including a failed directory walk, is printed to stderr and the
/// command still exits successfully.
pub fn run_check(args: &CheckArgs) -> i32 {
    if let Err(e) = check(args) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
    }
    EXIT_SUCCESS
}

fn check(args: &CheckArgs) -> anyhow::Result<()> {
    let projects = collect_projects(&args.root)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let checker = Checker::new().report_missing(args.report_missing);

    for project in &projects {
        // A malformed descriptor fails this project only.
        match checker.run(project) {
            Ok(records) => {
                for record in records {
                    writeln!(out, "{record}")?;
                }
            }
            Err(e) => {
                eprintln!("{} {}", "warning:".yellow().bold(), e);
            }
        }
    }
    out.flush()?;

    eprintln!("{} project(s) checked", projects.len());
    Ok(())
}

/// Run the reprioritize command: stdin in, stdout out.
pub fn run_reprioritize() -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let outcome = reprioritize::reprioritize(stdin.lock(), &mut out)
        .and_then(|()| out.flush().map_err(Into::into));

    match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            show_reprioritize_usage();
            EXIT_FAILURE
        }
    }
}

fn show_reprioritize_usage() {
    eprintln!();
    eprintln!("Usage: <input> | vcxcheck reprioritize");
    eprintln!(
        "    re-prioritize rules that have at most {} issues to top priority",
        FREQUENCY_THRESHOLD
    );
}
