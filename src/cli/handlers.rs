//! Command orchestration and exit-code mapping

use crate::cli::commands::CliArgs;
use crate::fs::RealFileSystem;
use crate::sync::{run_sync, SyncConfig};
use chrono::Local;
use clap::CommandFactory;
use tracing::{debug, error, info};

/// Run the synchronization described by the parsed arguments.
///
/// Missing `-i`/`-o` is not an error: the help text is printed and the run
/// exits successfully without touching any file.
pub fn handle_sync(args: &CliArgs) -> i32 {
    let output = match &args.output {
        Some(output) if !args.input.is_empty() => output.clone(),
        _ => {
            let mut command = CliArgs::command();
            if let Err(e) = command.print_help() {
                error!("Failed to print help: {}", e);
                return 1;
            }
            return 0;
        }
    };

    let config = SyncConfig {
        inputs: args.input.clone(),
        output,
    };
    info!(
        "Synchronizing {} compose file(s) into '{}'",
        config.inputs.len(),
        config.output.display()
    );

    let fs = RealFileSystem::new();
    match run_sync(&fs, &config, Local::now()) {
        Ok(report) => {
            debug!(
                "Appended {} variable(s), {} removable",
                report.appended.len(),
                report.removable.len()
            );
            for name in &report.removable {
                println!(
                    "The variable '{}' is no longer used by the specified compose files. \
                     It can be removed.",
                    name
                );
            }
            println!(
                "The new environment variables (if any) were written to '{}'.",
                config.output.display()
            );
            0
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const WEB_COMPOSE: &str = r#"
services:
  web:
    environment:
      DB_HOST: "$DB_HOST"
      DEBUG: "true"
"#;

    #[test]
    fn test_missing_arguments_print_help_and_succeed() {
        let args = CliArgs::parse_from(["env-from-compose"]);
        assert_eq!(handle_sync(&args), 0);
    }

    #[test]
    fn test_missing_output_prints_help_and_succeeds() {
        let args = CliArgs::parse_from(["env-from-compose", "-i", "docker-compose.yml"]);
        assert_eq!(handle_sync(&args), 0);
    }

    #[test]
    fn test_sync_writes_declared_variables() {
        let dir = TempDir::new().unwrap();
        let compose = dir.path().join("docker-compose.yml");
        let output = dir.path().join(".env.example");
        std::fs::write(&compose, WEB_COMPOSE).unwrap();

        let args = CliArgs::parse_from([
            "env-from-compose",
            "-i",
            compose.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        assert_eq!(handle_sync(&args), 0);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.contains("DB_HOST=\n"));
        assert!(!contents.contains("DEBUG="));
    }

    #[test]
    fn test_missing_input_fails_without_touching_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join(".env.example");

        let args = CliArgs::parse_from([
            "env-from-compose",
            "-i",
            dir.path().join("missing.yml").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        assert_eq!(handle_sync(&args), 1);
        assert!(!output.exists());
    }
}
