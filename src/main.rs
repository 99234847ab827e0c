//! variant-engine: dimension analysis and best-match resolution for
//! screenshot variant sets.

use anyhow::{bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use variant_engine::{
    cli,
    config::{self, AppConfig, ConfigPreset, Validatable},
    error::VariantError,
    pipeline::exit_codes,
    reports::ReportFormat,
};

#[derive(Parser)]
#[command(name = "variant-engine")]
#[command(version)]
#[command(about = "Dimension analysis and best-match resolution for screenshot variants", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  resolve: no variant carries the requested value
    2  Error occurred

EXAMPLES:
    # Which dimensions vary across a set of screenshots
    variant-engine analyze comparisons.json

    # Switch to firefox while keeping viewport and theme if possible
    variant-engine resolve comparisons.json --dimension browser --value firefox --current 12

    # Pill summary as JSON
    variant-engine summary comparisons.json -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output flags shared by the data commands
#[derive(Args)]
struct OutputArgs {
    /// Output format (defaults to the config file setting, then summary)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

/// Arguments for the `analyze` subcommand
#[derive(Args)]
struct AnalyzeArgs {
    /// Variant document (JSON or YAML)
    file: PathBuf,

    /// Dimension to analyze in addition to the defaults (repeatable)
    #[arg(short, long = "dimension")]
    dimensions: Vec<String>,

    /// Configuration preset (default, breadcrumb, strip)
    #[arg(long)]
    preset: Option<String>,

    /// Only report dimensions with more than one value
    #[arg(long)]
    multiple_only: bool,

    /// Disable dimension discovery
    #[arg(long)]
    no_discover: bool,

    /// Longest displayed value before truncation
    #[arg(long)]
    max_length: Option<usize>,

    /// Prefix custom dimension values with their key
    #[arg(long)]
    include_key: bool,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `resolve` subcommand
#[derive(Args)]
struct ResolveCmdArgs {
    /// Variant document (JSON or YAML)
    file: PathBuf,

    /// Dimension being changed
    #[arg(short, long)]
    dimension: String,

    /// New value for the dimension
    #[arg(long)]
    value: String,

    /// Id of the currently selected variant
    #[arg(short, long)]
    current: Option<String>,

    /// Dimensions to compare (comma-separated; effective dimensions if omitted)
    #[arg(long, value_delimiter = ',')]
    dimensions: Option<Vec<String>>,

    /// Show which dimensions were kept and which changed
    #[arg(long)]
    explain: bool,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for commands that only take a document
#[derive(Args)]
struct DocumentArgs {
    /// Variant document (JSON or YAML)
    file: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List effective dimensions and their distinct values
    Analyze(AnalyzeArgs),

    /// Pick the variant to show after one dimension changes
    Resolve(ResolveCmdArgs),

    /// Print the flattened metadata of every variant
    Normalize(DocumentArgs),

    /// Summarize a variant group as pills
    Summary(DocumentArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .variant-engine.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(code) if code == exit_codes::SUCCESS => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let quiet = cli.quiet;

    match cli.command {
        Commands::Analyze(args) => {
            let mut config = load_config(cli.config.as_deref(), args.preset.as_deref(), quiet)?;
            let overrides = AppConfig::builder()
                .multiple_only(args.multiple_only)
                .auto_discover(!args.no_discover)
                .include_key(args.include_key)
                .build();
            config.merge(&overrides);
            if let Some(max_length) = args.max_length {
                config.display.max_value_length = max_length;
            }
            apply_output(&mut config, args.output)?;
            cli::run_analyze(&args.file, &args.dimensions, &config, quiet)
        }

        Commands::Resolve(args) => {
            let mut config = load_config(cli.config.as_deref(), None, quiet)?;
            apply_output(&mut config, args.output)?;
            let resolve = cli::ResolveArgs {
                path: args.file,
                dimension: args.dimension,
                value: args.value,
                current: args.current,
                dimensions: args.dimensions,
                explain: args.explain,
            };
            cli::run_resolve(resolve, &config, quiet)
        }

        Commands::Normalize(args) => {
            let mut config = load_config(cli.config.as_deref(), None, quiet)?;
            apply_output(&mut config, args.output)?;
            cli::run_normalize(&args.file, &config, quiet)
        }

        Commands::Summary(args) => {
            let mut config = load_config(cli.config.as_deref(), None, quiet)?;
            apply_output(&mut config, args.output)?;
            cli::run_summary(&args.file, &config, quiet)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "variant-engine", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(&action, cli.config.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Discovered config file, optionally layered with a preset, then validated.
fn load_config(explicit: Option<&Path>, preset: Option<&str>, quiet: bool) -> Result<AppConfig> {
    let (mut config, loaded_from) = config::load_or_default(explicit);
    if let Some(path) = &loaded_from {
        if !quiet {
            tracing::info!("Using config file: {}", path.display());
        }
    }

    if let Some(name) = preset {
        let Some(preset) = ConfigPreset::from_name(name) else {
            let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            bail!("Unknown preset '{name}'. Valid options: {}", valid.join(", "));
        };
        config.merge(&AppConfig::from_preset(preset));
    }

    ensure_valid(&config)?;
    Ok(config)
}

fn apply_output(config: &mut AppConfig, args: OutputArgs) -> Result<()> {
    if let Some(format) = args.output {
        config.output.format = format;
    }
    if args.output_file.is_some() {
        config.output.file = args.output_file;
    }
    if args.pretty {
        config.output.pretty = true;
    }
    ensure_valid(config)
}

fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(VariantError::config(messages.join("; ")).into())
}

fn run_config_action(action: &ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir().ok().map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("variant-engine").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!("  (git repository root is searched after the current directory)");
            eprintln!();
            match config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".variant-engine.yaml");
            if target.exists() {
                bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
