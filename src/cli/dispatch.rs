// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{load_config_with, CommitMsgConfig};
use crate::error::{CommitMsgError, Result, ResultExt};
use crate::lang::{builtin, load_language};
use crate::message::read_message;
use crate::report::Report;
use crate::rules::validate;
use crate::state::Verdict;

use super::args::Cli;

/// Run the CLI with the given arguments and return the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    let mut config = load_config_with(cli.config.as_deref())?;
    if let Some(ref lang) = cli.lang {
        config.lang = lang.clone();
    }

    if cli.show_config {
        return run_show_config(&config);
    }

    let verdict = run_validate(cli, &config);
    let lang = load_language(&config.lang);
    let report = Report::new(&verdict, &lang, &config.rules.types_list());
    report.print(cli.format);

    Ok(report.exit_code)
}

/// Obtain the message and validate it.
fn run_validate(cli: &Cli, config: &CommitMsgConfig) -> Verdict {
    tracing::debug!("Validating {:?} with rules: {:?}", cli.file, config.rules);

    match read_message(cli.file.as_deref()) {
        Ok(message) => {
            let verdict = validate(&message, &config.rules);
            tracing::debug!("Verdict: {:?}", verdict);
            verdict
        }
        Err(e) => {
            tracing::debug!("Failed to obtain commit message: {}", e);
            e.verdict()
        }
    }
}

/// Print the effective configuration.
fn run_show_config(config: &CommitMsgConfig) -> Result<i32> {
    let json = serde_json::to_string_pretty(config).context("show-config")?;
    println!("{}", json);
    Ok(0)
}

/// Report an error that escaped [`run`] as `UndefinedError`.
pub fn report_failure(cli: &Cli, err: &CommitMsgError) -> i32 {
    tracing::error!("{}", err);

    let verdict = Verdict::UndefinedError;
    let types = CommitMsgConfig::default().rules.types_list();
    Report::new(&verdict, &builtin::en(), &types).print(cli.format);
    verdict.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OutcomeState;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_validate_missing_argument() {
        let cli = Cli::parse_from(["commit-msg"]);
        let verdict = run_validate(&cli, &CommitMsgConfig::default());
        assert_eq!(verdict, Verdict::ArgumentMissing);
    }

    #[test]
    fn test_run_validate_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "Feat: wrong case\n").unwrap();

        let cli = Cli::parse_from(["commit-msg", path.to_str().unwrap()]);
        let verdict = run_validate(&cli, &CommitMsgConfig::default());
        assert_eq!(verdict.state(), OutcomeState::WrongType);
    }

    #[test]
    fn test_run_with_explicit_config() {
        let dir = TempDir::new().unwrap();
        let message = dir.path().join("COMMIT_EDITMSG");
        let config = dir.path().join("strict.json");
        fs::write(&message, "feat: no body").unwrap();
        fs::write(&config, r#"{"bodyRequired": true}"#).unwrap();

        let cli = Cli::parse_from([
            "commit-msg",
            "--config",
            config.to_str().unwrap(),
            message.to_str().unwrap(),
        ]);
        assert_eq!(run(&cli).unwrap(), OutcomeState::BodyMissing.exit_code());
    }

    #[test]
    fn test_run_with_missing_explicit_config() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "commit-msg",
            "--config",
            dir.path().join("absent.json").to_str().unwrap(),
        ]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_report_failure_exit_code() {
        let cli = Cli::parse_from(["commit-msg"]);
        let err = CommitMsgError::WithContext {
            context: "test".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(report_failure(&cli, &err), 14);
    }
}
