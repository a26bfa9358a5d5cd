use clap::Parser;
use moviedb::cli::{Cli, Commands};
use moviedb::cli_handlers;
use std::process;

fn main() {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cli_handlers::handle_demo(&cli.db),
        Commands::Add(args) => cli_handlers::handle_add(&cli.db, args),
        Commands::Update(args) => cli_handlers::handle_update(&cli.db, args),
        Commands::Delete { name } => cli_handlers::handle_delete(&cli.db, &name),
        Commands::List { json } => cli_handlers::handle_list(&cli.db, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
