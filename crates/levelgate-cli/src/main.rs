use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use levelgate_cli::commands::{emit, init, levels, pipe};
use levelgate_cli::config::{Config, Overrides};
use levelgate_cli::OutputFormat;
use levelgate_core::Severity;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "levelgate", version, about = "Leveled logging facade over tracing")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Minimum severity forwarded to the backend
    #[arg(long, global = true)]
    level: Option<Severity>,

    /// Append log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Shortcut for --level debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(default_value = "levelgate.toml")]
        path: String,
    },
    #[command(flatten)]
    Run(RunCommand),
}

/// Commands that run with logging installed
#[derive(Subcommand)]
enum RunCommand {
    /// Emit a single record
    Emit(EmitArgs),
    /// Forward stdin line by line through the byte sink
    Pipe,
    /// Show the severity table and the active threshold
    Levels,
}

#[derive(Args)]
struct EmitArgs {
    #[arg(short, long, default_value = "info")]
    severity: Severity,
    #[arg(long)]
    module: String,
    #[arg(long)]
    method: String,
    #[arg(long)]
    msg: String,
    #[arg(long, default_value_t = 0)]
    req_id: u32,
    /// Extra field as key=value, repeatable
    #[arg(long = "arg")]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Init { path } => return init::execute_init(&path),
        Commands::Run(command) => command,
    };

    let config = match &cli.config {
        Some(path) => Config::load(path, None)?,
        None => Config::default(),
    };
    let overrides = Overrides {
        level: cli.level,
        file: cli.log_file.clone(),
        format: cli.format.map(Into::into),
        verbose: cli.verbose,
    };
    levelgate_core::init(config.logging_config(&overrides)?)?;

    let logger = levelgate_core::std_logger();
    levelgate_cli::log_startup(logger, cli.config.as_deref());

    match command {
        RunCommand::Emit(args) => {
            let accepted = emit::execute_emit(
                logger,
                args.severity,
                &args.module,
                &args.method,
                &args.msg,
                args.req_id,
                &args.args,
            )?;
            if !accepted {
                levelgate_cli::log_dropped(logger, args.severity);
            }
        }
        RunCommand::Pipe => {
            let stdin = std::io::stdin();
            let count = pipe::execute_pipe(stdin.lock(), logger)?;
            levelgate_cli::log_forwarded(logger, count);
        }
        RunCommand::Levels => levels::execute_levels(logger.level()),
    }

    Ok(())
}
