/*!
 * Command-line interface for skukozh
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use skukozh::config::{Args, Command, TraversalOptions};
use skukozh::error::{Result, ResultExt, SkukozhError};
use skukozh::report::{AnalysisReport, ReportFormat, Reporter};
use skukozh::scanner::Scanner;
use skukozh::utils::{FILE_LIST_NAME, RESULT_NAME};
use skukozh::writer::ContentWriter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        process::exit(1);
    };

    match command {
        Command::Find {
            directory,
            ext,
            no_ignore,
            hidden,
            verbose,
        } => run_find(&directory, &ext, no_ignore, hidden, verbose),
        Command::Gen { directory } => run_gen(&directory),
        Command::Analyze { count } => run_analyze(count),
    }
}

fn run_find(
    directory: &str,
    ext: &[String],
    no_ignore: bool,
    hidden: bool,
    verbose: bool,
) -> Result<()> {
    let options = TraversalOptions {
        extension_allow_list: TraversalOptions::normalize_extensions(ext),
        include_hidden: hidden,
        bypass_default_ignores: no_ignore,
        verbose,
    };

    let scanner = Scanner::new(options);
    let files = scanner.discover(Path::new(directory))?;

    // Zero matches is not a failure; nudge the user towards relaxing filters
    if files.is_empty() {
        if hidden {
            println!("No files found even with hidden files included.");
        } else {
            println!("No files found! Use --hidden flag to include all files and override .gitignore.");
        }
        return Ok(());
    }

    fs::write(FILE_LIST_NAME, files.join("\n"))
        .with_context(|| format!("failed to write file list {FILE_LIST_NAME}"))?;

    println!(
        "Found {} files. File list saved to {}",
        files.len(),
        FILE_LIST_NAME
    );

    Ok(())
}

fn run_gen(directory: &str) -> Result<()> {
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {pos}/{len} {wide_msg:.dim.white}")
            .map_err(|e| SkukozhError::Unexpected(e.to_string()))?,
    );

    let writer = ContentWriter::new(PathBuf::from(directory), Arc::new(progress));
    let result = writer.generate()?;

    writer.progress.finish_and_clear();

    fs::write(RESULT_NAME, result)
        .with_context(|| format!("failed to write result file {RESULT_NAME}"))?;

    println!("Content file saved to {}", RESULT_NAME);

    Ok(())
}

fn run_analyze(count: usize) -> Result<()> {
    let content = fs::read_to_string(RESULT_NAME).map_err(|source| SkukozhError::ResultRead {
        path: PathBuf::from(RESULT_NAME),
        source,
    })?;

    let report = AnalysisReport::parse(&content);
    let reporter = Reporter::new(ReportFormat::ConsoleTable, count);
    reporter.print_report(&report);

    Ok(())
}
