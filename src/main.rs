// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use pagegen::app_config::{self, Config};
use pagegen::app_controller::{Controller, GenerateOutcome};
use pagegen::recipe::PageRecipe;

mod interactive;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a page interactively (default command)
    Build,

    /// Generate a page from a JSON recipe
    Render(RenderArgs),

    /// List pages already generated in the output directory
    List,

    /// Generate shell completions for pagegen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Recipe file describing the page and its sections
    #[arg(value_name = "RECIPE")]
    recipe_path: PathBuf,

    /// Use this banner index instead of a random one
    #[arg(short, long)]
    banner_index: Option<u32>,

    /// Print the page to stdout instead of writing it
    #[arg(short, long)]
    dry_run: bool,
}

/// pagegen - Next.js page generator
///
/// Assemble headings, paragraphs, lists and code blocks into a Next.js page
/// with a header, a banner and a footer.
#[derive(Parser, Debug)]
#[command(name = "pagegen")]
#[command(version)]
#[command(about = "Interactive Next.js page generator")]
#[command(long_about = "pagegen assembles content sections into a Next.js page template.

EXAMPLES:
    pagegen                                  # Build a page interactively
    pagegen render about.json                # Generate a page from a recipe
    pagegen render about.json -b 5 --dry-run # Print the page with banner 5
    pagegen -o site/app list                 # List pages under site/app
    pagegen completions bash > pagegen.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in pagegen.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pagegen.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Directory receiving generated pages
    #[arg(short, long, global = true)]
    output_dir: Option<String>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and marker for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "x"),
            Level::Warn => ("1;33", "!"),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "?"),
            Level::Trace => ("1;35", "."),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, marker) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                marker,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "pagegen", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    match cli.command {
        Some(Commands::Render(args)) => run_render(&controller, args),
        Some(Commands::List) => run_list(&controller),
        Some(Commands::Build) | None => interactive::run_builder(&controller),
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

// Load or create configuration, then apply CLI overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }

    Ok(config)
}

fn run_render(controller: &Controller, args: RenderArgs) -> Result<()> {
    let recipe = PageRecipe::from_file(&args.recipe_path)?;
    let session = recipe.replay();
    let meta = recipe.meta();

    info!(
        "Loaded recipe '{}' with {} section(s)",
        meta.page_name,
        session.len()
    );

    if args.dry_run {
        match controller.preview(&session, &meta, args.banner_index, &mut rand::rng())? {
            Some(page) => print!("{}", page.document),
            None => warn!("No sections added yet, nothing to render"),
        }
        return Ok(());
    }

    let outcome = match args.banner_index {
        Some(index) => controller.generate_with_banner(&session, &meta, index)?,
        None => controller.generate(&session, &meta, &mut rand::rng())?,
    };

    if let GenerateOutcome::Written { path, .. } = outcome {
        println!("{}", path.display());
    }

    Ok(())
}

fn run_list(controller: &Controller) -> Result<()> {
    let pages = controller
        .list_generated_pages()
        .context("Could not list generated pages")?;

    if pages.is_empty() {
        info!("No pages found in {}", controller.config().output_dir);
        return Ok(());
    }

    for page in pages {
        println!("{}", page.display());
    }

    Ok(())
}
