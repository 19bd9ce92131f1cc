mod cli;
mod cmd;

use bodybook::output;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction};
use std::process;

fn init_tracing() {
    // Diagnostics go to stderr; stdout carries the JSON envelope.
    let filter = std::env::var("BODYBOOK_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let command = cli.command.name();

    let result = match cli.command {
        Commands::Init => cmd::init::run(),
        Commands::Log {
            weight,
            exercise,
            diet,
            recovery,
            score,
            comments,
        } => cmd::log::run(
            cmd::log::LogArgs {
                weight,
                exercise,
                diet,
                recovery,
                score,
                comments,
            },
            cli.date,
            cli.human,
        ),
        Commands::Show { last } => cmd::show::run(last, cli.date, cli.human),
        Commands::Delete { day } => cmd::delete::run(day, cli.human),
        Commands::Stats { range } => cmd::stats::run(range.as_deref(), cli.date, cli.human),
        Commands::Chart { range } => cmd::chart::run(range.as_deref(), cli.date, cli.human),
        Commands::Tags { field, exclude } => {
            cmd::tags::run(field.as_deref(), exclude.as_deref(), cli.human)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Doctor { restore } => cmd::doctor::run(restore, cli.human),
        Commands::Reset { yes } => cmd::doctor::run_reset(yes, cli.human),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bodybook", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        let err = output::error(command, "general_error", &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
