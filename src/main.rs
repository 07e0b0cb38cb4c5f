use clap::Parser;
use petlabels::{
    Cli, OutputFormatter, OutputMode, PetLabels, PetLabelsError, UserFriendlyError,
};
use std::io::ErrorKind;
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    setup_logging(&cli);

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let petlabels = match PetLabels::from_cli(&cli) {
        Ok(petlabels) => petlabels,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    tracing::debug!(version = petlabels::version_info(), "starting petlabels");

    match petlabels.extract() {
        Ok(report) => {
            petlabels.print_report(&report);
            0
        }
        Err(e) => {
            petlabels.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &PetLabelsError) -> i32 {
    match error {
        PetLabelsError::Io(err) if err.kind() == ErrorKind::NotFound => 3,
        PetLabelsError::Io(err) if err.kind() == ErrorKind::PermissionDenied => 7,
        PetLabelsError::Report { .. } | PetLabelsError::Serialization { .. } => 9,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "petlabels.toml".to_string());

    match PetLabels::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  petlabels --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &PetLabelsError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

fn setup_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_directive())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
