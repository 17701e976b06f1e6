use clap::Parser;
use grades::cli::{Cli, Commands};
use grades::cli_handlers;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = cli.db.as_path();

    let result = match cli.command {
        Commands::Add {
            student,
            subject,
            grade,
        } => cli_handlers::handle_add(db, &student, &subject, &grade),
        Commands::List { json } => cli_handlers::handle_list(db, json),
        Commands::Show { id } => cli_handlers::handle_show(db, id),
        Commands::Update {
            id,
            student,
            subject,
            grade,
        } => cli_handlers::handle_update(
            db,
            id,
            student.as_deref(),
            subject.as_deref(),
            grade.as_deref(),
        ),
        Commands::Delete { id } => cli_handlers::handle_delete(db, id),
        Commands::Export { format, output } => cli_handlers::handle_export(db, format, output),
        Commands::Chart {
            average,
            svg,
            width,
        } => cli_handlers::handle_chart(db, average, svg.as_deref(), width),
        Commands::Stats => cli_handlers::handle_stats(db),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
