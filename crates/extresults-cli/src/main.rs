//! CLI entry point for extresults.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `extresults-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use extresults_app::{
    ExplainOutput, ParseInput, read_receipt, render_annotations, render_markdown, run_explain,
    run_parse, runtime_error_receipt, to_renderable, verdict_exit_code, write_receipt, write_text,
};
use extresults_settings::Overrides;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "extresults",
    version,
    about = "Best-effort parser for externally generated results documents"
)]
struct Cli {
    /// Path to extresults config TOML (missing file means defaults).
    #[arg(long, default_value = "extresults.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|lenient|audit).
    #[arg(long)]
    profile: Option<String>,

    /// Override the data source identifier recorded in the results.
    #[arg(long)]
    data_source: Option<String>,

    /// Override maximum diagnostics to emit.
    #[arg(long)]
    max_diagnostics: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a results document and write a receipt.
    Parse {
        /// The results XML file.
        file: Utf8PathBuf,

        /// Where to write the JSON receipt.
        #[arg(long, default_value = "artifacts/extresults/receipt.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/extresults/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing receipt.
    Md {
        /// Path to the JSON receipt.
        #[arg(long, default_value = "artifacts/extresults/receipt.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing receipt.
    Annotations {
        /// Path to the JSON receipt.
        #[arg(long, default_value = "artifacts/extresults/receipt.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a diagnostic kind with remediation guidance.
    Explain {
        /// The kind label (e.g. "ambiguity").
        kind: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.cmd {
        Commands::Parse {
            file,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_parse(&cli, file, report_out, *write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { kind } => cmd_explain(kind),
    }
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(path = %path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
}

fn cmd_parse(
    cli: &Cli,
    file: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;
        let overrides = Overrides {
            profile: cli.profile.clone(),
            data_source: cli.data_source.clone(),
            max_diagnostics: cli.max_diagnostics,
        };

        let output = run_parse(ParseInput {
            results_file: file,
            config_text: &cfg_text,
            overrides,
        })?;

        write_receipt(report_out, &output.receipt).context("write receipt json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.receipt));
            write_text(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.receipt.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let receipt = runtime_error_receipt(file.as_str(), &format!("{err:#}"));
            let _ = write_receipt(report_out, &receipt);
            eprintln!("extresults error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let receipt = read_receipt(report_path)?;
    let md = render_markdown(&to_renderable(&receipt));

    if let Some(out_path) = output {
        write_text(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let receipt = read_receipt(report_path)?;
    for annotation in render_annotations(&to_renderable(&receipt), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(kind: &str) -> anyhow::Result<()> {
    match run_explain(kind) {
        ExplainOutput::Found(exp) => {
            print!("{}", extresults_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_kinds,
        } => {
            eprint!(
                "{}",
                extresults_app::format_not_found(&identifier, available_kinds)
            );
            std::process::exit(1);
        }
    }
}
