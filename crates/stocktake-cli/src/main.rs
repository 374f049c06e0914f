#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "stocktake: asset lifecycle registry and reporting",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for --format json).
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags, env, and the TTY.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Lifecycle",
        about = "Initialize a stocktake project",
        after_help = "EXAMPLES:\n    # Create .stocktake/ with a default config and empty store\n    stk init"
    )]
    Init(cmd::init::InitArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Register a new asset",
        after_help = "EXAMPLES:\n    # Register a laptop\n    stk register --code IT-24001 --name \"MacBook Pro 16 M3\" \\\n        --owner \"영업1팀 김철수\" --purchased 2024-01-15 --price 3500000\n\n    # Hold an incomplete entry back from reporting\n    stk register --code SW-24001 --name \"Sketch License\" --category software \\\n        --purchased 2024-03-02 --price 120000 --draft"
    )]
    Register(cmd::register::RegisterArgs),

    #[command(
        next_help_heading = "Read",
        about = "List and search assets",
        after_help = "EXAMPLES:\n    # Active assets, filtered\n    stk list --department 영업1팀 --category it_device\n\n    # Free-text search over code and owner\n    stk list --search IT-24\n\n    # The drafts partition\n    stk list --drafts"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Read",
        about = "Show one asset with derived fields",
        after_help = "EXAMPLES:\n    stk show 7 --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Transition an asset's status",
        long_about = "Transition an asset's status. Entering returned_resigned, disposed,\nsold, lost, or in_storage clears the owner in the same update.",
        after_help = "EXAMPLES:\n    stk status 7 lost\n    stk status 7 in_repair"
    )]
    Status(cmd::status::StatusArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Publish a draft into the active view",
        after_help = "EXAMPLES:\n    stk publish 7"
    )]
    Publish(cmd::publish::PublishArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Replace every editable field of an asset",
        after_help = "EXAMPLES:\n    stk update 7 --code IT-24001 --name \"MacBook Pro 16 M3\" \\\n        --category it_device --owner \"기획팀 정지영\" \\\n        --purchased 2024-01-15 --price 3200000"
    )]
    Update(cmd::update::UpdateArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Delete an asset",
        after_help = "EXAMPLES:\n    stk delete 7"
    )]
    Delete(cmd::delete::DeleteArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "KPIs, department rollups, and insights",
        after_help = "EXAMPLES:\n    # Whole-fleet dashboard\n    stk dashboard\n\n    # Narrowed to one department\n    stk dashboard --department 재무팀 --json"
    )]
    Dashboard(cmd::dashboard::DashboardArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "Export the filtered snapshot as CSV",
        after_help = "EXAMPLES:\n    # Everything active, to a file\n    stk export --output assets.csv\n\n    # A filtered view, to stdout\n    stk export --category vehicle"
    )]
    Export(cmd::export::ExportArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Add randomized sample assets",
        after_help = "EXAMPLES:\n    stk seed --count 80"
    )]
    Seed(cmd::seed::SeedArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    stk completions bash\n    stk completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env("STOCKTAKE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if quiet {
            "error"
        } else if verbose || env::var("DEBUG").is_ok() {
            "stocktake=debug,info"
        } else {
            "stocktake=info,warn"
        })
    });

    let format = env::var("STOCKTAKE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let cwd = env::current_dir()?;
    let project_root = stocktake_core::config::discover_root(&cwd);
    let output = cli.output_mode();

    match cli.command {
        Commands::Init(args) => cmd::init::run_init(&args, output, &project_root),
        Commands::Register(ref args) => cmd::register::run_register(args, output, &project_root),
        Commands::List(ref args) => cmd::list::run_list(args, output, &project_root),
        Commands::Show(ref args) => cmd::show::run_show(args, output, &project_root),
        Commands::Status(ref args) => cmd::status::run_status(args, output, &project_root),
        Commands::Publish(ref args) => cmd::publish::run_publish(args, output, &project_root),
        Commands::Update(ref args) => cmd::update::run_update(args, output, &project_root),
        Commands::Delete(ref args) => cmd::delete::run_delete(args, output, &project_root),
        Commands::Dashboard(ref args) => {
            cmd::dashboard::run_dashboard(args, output, &project_root)
        }
        Commands::Export(ref args) => cmd::export::run_export(args, &project_root),
        Commands::Seed(ref args) => cmd::seed::run_seed(args, output, &project_root),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_sets_output_mode() {
        let cli = Cli::parse_from(["stk", "--json", "list"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["stk", "list", "--json"]);
        assert!(cli.json);
    }

    #[test]
    fn status_subcommand_parses_positionals() {
        let cli = Cli::parse_from(["stk", "status", "7", "lost"]);
        match cli.command {
            Commands::Status(args) => {
                assert_eq!(args.id, 7);
                assert_eq!(args.status, "lost");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verify_cli_definition() {
        Cli::command().debug_assert();
    }
}
