//! Remap command implementation
//!
//! Splits an animation list into idle and action groups and writes the
//! remapped document.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use spriteremap_core::{remap, Destination, RemapConfig, RemapReport};
use std::process::ExitCode;

use super::json_output::{JsonError, RemapOutput};

/// Run the remap command
///
/// # Arguments
/// * `config` - Pipeline settings resolved from the command line
/// * `json_output` - Whether to print a machine-readable JSON report
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(config: &RemapConfig, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(config);
    }

    // Status lines move to stderr when stdout carries the document.
    let to_stdout = config.destination() == Destination::Stdout;
    let status = |line: String| {
        if to_stdout {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    status(format!(
        "{} {}",
        "Remapping:".cyan().bold(),
        config.input.display()
    ));

    let report = remap(config)
        .with_context(|| format!("Failed to remap {}", config.input.display()))?;

    for line in report_lines(&report) {
        status(line);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_json(config: &RemapConfig) -> Result<ExitCode> {
    if config.destination() == Destination::Stdout {
        bail!("--json cannot be combined with writing the document to stdout");
    }

    let (output, code) = match remap(config) {
        Ok(report) => (RemapOutput::success(report), ExitCode::SUCCESS),
        Err(e) => (
            RemapOutput::failure(vec![JsonError::from(&e)]),
            ExitCode::from(1),
        ),
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(code)
}

fn report_lines(report: &RemapReport) -> Vec<String> {
    let summary = &report.summary;
    let mut lines = vec![
        format!(
            "  {} {} idle, {} action",
            "animations:".dimmed(),
            summary.idle_animations,
            summary.action_animations
        ),
        format!(
            "  {} {} (total duration {})",
            "frames:".dimmed(),
            summary.total_frames,
            summary.total_duration
        ),
    ];
    if let Some(sheet) = summary.sprite_sheet_info {
        lines.push(format!(
            "  {} {} x {}",
            "sprite sheet:".dimmed(),
            sheet.columns,
            sheet.rows
        ));
    }
    lines.push(format!(
        "{} Wrote {} ({})",
        "SUCCESS".green().bold(),
        report.output,
        report.format
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use spriteremap_core::{OutputProfile, SchemaVariant};
    use std::fs;

    fn write_input(dir: &std::path::Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("animations.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_run_writes_document() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_input(
            tmp.path(),
            r#"[{"Name": "IdleWalk", "Frames": [{"dur": 5, "col": 1, "row": 0}]}]"#,
        );
        let output = tmp.path().join("animations_.json");
        let config = RemapConfig {
            input,
            output: Some(Destination::File(output.clone())),
            ..RemapConfig::default()
        };

        let code = run(&config, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "idle": [{"name": "Walk", "frames": [{"duration": 5, "column": 1, "row": 0}]}],
                "action": []
            })
        );
    }

    #[test]
    fn test_run_propagates_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_input(tmp.path(), "{}");
        let config = RemapConfig {
            input,
            output: Some(Destination::File(tmp.path().join("out.json"))),
            ..RemapConfig::default()
        };

        let err = run(&config, false).unwrap_err();
        assert!(format!("{:#}", err).contains("expected a list at the top level"));
    }

    #[test]
    fn test_run_json_reports_failure_with_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let config = RemapConfig {
            input: tmp.path().join("missing.json"),
            output: Some(Destination::File(tmp.path().join("out.yaml"))),
            profile: OutputProfile::Yaml,
            schema: SchemaVariant::Source,
            ..RemapConfig::default()
        };

        let code = run(&config, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!tmp.path().join("out.yaml").exists());
    }

    #[test]
    fn test_run_json_rejects_stdout_document() {
        let config = RemapConfig {
            output: Some(Destination::Stdout),
            ..RemapConfig::default()
        };
        assert!(run(&config, true).is_err());
    }

    #[test]
    fn test_report_lines_mention_sprite_sheet() {
        colored::control::set_override(false);
        let report = RemapReport {
            input: "animations.json".to_string(),
            output: "config.yaml".to_string(),
            profile: OutputProfile::Yaml,
            format: spriteremap_core::OutputFormat::Yaml,
            schema: SchemaVariant::Source,
            summary: spriteremap_core::DocumentSummary {
                idle_animations: 2,
                action_animations: 3,
                total_frames: 9,
                total_duration: 900,
                sprite_sheet_info: Some(spriteremap_core::DEFAULT_SPRITE_SHEET),
            },
        };

        let lines = report_lines(&report);
        assert_eq!(lines[0], "  animations: 2 idle, 3 action");
        assert_eq!(lines[2], "  sprite sheet: 27 x 34");
        assert_eq!(lines[3], "SUCCESS Wrote config.yaml (yaml)");
    }
}
