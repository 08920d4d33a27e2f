use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use opt_schema_core::{SchemaFile, SchemaMap, SchemaSummary};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// Output format for `show`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "opt-schema")]
#[command(about = "Validate and inspect command-line option schemas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile one or more declaration files, stopping at the first error.
    Check(CheckArgs),
    /// Print the compiled option map of a declaration file.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Declaration files (.json, .yml, .yaml).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Declaration file (.json, .yml, .yaml).
    input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::Show(args) => run_show(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn compile_file(path: &Path) -> Result<(SchemaFile, SchemaMap), String> {
    debug!(path = %path.display(), "Loading declaration file");
    let file = SchemaFile::load(path).map_err(|err| format!("{}: {err}", path.display()))?;
    let map = file
        .compile()
        .map_err(|err| format!("{}: {err}", path.display()))?;
    Ok((file, map))
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    for path in &args.inputs {
        let (file, map) = compile_file(path)?;
        println!(
            "Compiled {} option token(s) for {} option(s) from {}.",
            map.len(),
            file.options.len(),
            path.display()
        );
    }
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), String> {
    let (_, map) = compile_file(&args.input)?;
    let summary = map.summary();

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&summary)
            .map_err(|err| format!("Failed to serialize summary: {err}"))?,
        OutputFormat::Yaml => serde_yaml::to_string(&summary)
            .map_err(|err| format!("Failed to serialize summary: {err}"))?,
        OutputFormat::Table => render_table(&summary),
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn render_table(summary: &SchemaSummary) -> String {
    let rows: Vec<[String; 3]> = summary
        .options
        .iter()
        .map(|opt| {
            let arg = match (opt.arg_accepted, opt.arg_required) {
                (true, true) => "required",
                (true, false) => "optional",
                _ => "none",
            };
            let filter = if opt.has_filter { "custom" } else { "identity" };
            [opt.names.join(", "), arg.to_string(), filter.to_string()]
        })
        .collect();

    let header = ["NAMES", "ARG", "FILTER"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: [&str; 3]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };
    push_row(header);
    for row in &rows {
        push_row([row[0].as_str(), row[1].as_str(), row[2].as_str()]);
    }
    out
}
