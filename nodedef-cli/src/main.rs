//! # nodedef
//!
//! Render node-definition schemas.
//!
//! ## Usage
//!
//! ```bash
//! # Pretty-print a schema to stdout
//! nodedef render --input schema.json
//!
//! # Emit the TypeScript instance expression into ./generated/nodes.ts
//! nodedef render --input schema.json --renderer instance --out-dir ./generated
//!
//! # Emit one TypeScript class per node kind
//! nodedef declarations --out-dir ./generated
//!
//! # List the available renderers
//! nodedef renderers
//!
//! # Initialize configuration
//! nodedef init
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use nodedef::{RendererRegistry, Schema};
use nodedef_cli::{
    config::{CliArgs, Config, ConfigManager, IndentConfig, CONFIG_FILENAME},
    error::{CliError, CliResult},
    input::load_schema,
    logging,
    pipeline::{self, Rendered},
    writer::{Outcome, OutputWriter},
};

#[derive(Parser)]
#[command(name = "nodedef")]
#[command(author, version, about = "Render node-definition schemas", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a schema document
    Render {
        /// JSON schema document
        #[arg(short, long)]
        input: PathBuf,

        /// Renderer id (pretty, instance, declarations)
        #[arg(short, long)]
        renderer: Option<String>,

        /// Output directory; prints to stdout when unset
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output file name without extension
        #[arg(long)]
        file: Option<String>,

        /// Indentation (spaces2, spaces4, tabs)
        #[arg(long)]
        indent: Option<IndentConfig>,

        /// Bind the instance expression to a named constant
        #[arg(long)]
        binding: Option<String>,

        /// Preview output without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Emit the TypeScript class declarations for every node kind
    Declarations {
        /// Output directory; prints to stdout when unset
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output file name without extension
        #[arg(long)]
        file: Option<String>,

        /// Preview output without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the available renderers
    Renderers,

    /// Initialize a new nodedef configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Render {
            input,
            renderer,
            out_dir,
            file,
            indent,
            binding,
            dry_run,
            config,
        } => {
            let args = CliArgs {
                out_dir,
                file,
                renderer,
                indent,
                binding,
            };
            cmd_render(input, &args, dry_run, config)
        }

        Commands::Declarations {
            out_dir,
            file,
            dry_run,
            config,
        } => {
            let args = CliArgs {
                out_dir,
                file,
                renderer: Some("declarations".to_string()),
                ..Default::default()
            };
            cmd_declarations(&args, dry_run, config)
        }

        Commands::Renderers => cmd_renderers(),

        Commands::Init { output, force } => cmd_init(output, force),
    }
}

/// Render command implementation.
fn cmd_render(
    input: PathBuf,
    args: &CliArgs,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> CliResult<()> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(config, args);

    let schema = load_schema(&input)?;
    let rendered = pipeline::render(&schema, &config)?;
    emit(&config, &rendered, dry_run)
}

/// Declarations command implementation.
fn cmd_declarations(args: &CliArgs, dry_run: bool, config_path: Option<PathBuf>) -> CliResult<()> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(config, args);

    let rendered = pipeline::render(&Schema::default(), &config)?;
    emit(&config, &rendered, dry_run)
}

/// Print rendered text to stdout or write it to the configured output file.
fn emit(config: &Config, rendered: &Rendered, dry_run: bool) -> CliResult<()> {
    let target = config.output_path(rendered.extension);
    let mut writer = OutputWriter::new(std::io::stdout().lock(), dry_run);

    match writer.emit(rendered, target.as_deref())? {
        Outcome::Printed { .. } => {}
        Outcome::Written { path, bytes } => {
            eprintln!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        Outcome::Previewed { path, bytes } => {
            eprintln!("{}", "─".repeat(60).dimmed());
            eprintln!(
                "{} Would write {} bytes to {}",
                "[dry-run]".yellow(),
                bytes,
                path.display()
            );
        }
    }

    Ok(())
}

/// Renderers command implementation.
fn cmd_renderers() -> CliResult<()> {
    let registry = RendererRegistry::builtin(&Config::default().render_options());
    for renderer in registry.iter() {
        println!(
            "{:<14} {} (.{})",
            renderer.id().green(),
            renderer.name(),
            renderer.file_extension()
        );
    }
    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> CliResult<()> {
    if output.exists() && !force {
        return Err(CliError::AlreadyExists(output));
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
