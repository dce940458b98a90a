//! spriteremap CLI - remaps exported sprite animation lists
//!
//! Splits animations into idle and action groups, normalizes their frames,
//! and writes the result as JSON or YAML.

use clap::{Parser, Subcommand};
use colored::Colorize;
use spriteremap_core::{
    Destination, OutputFormat, OutputProfile, RemapConfig, SchemaVariant, SpriteSheetInfo,
    DEFAULT_INPUT,
};
use std::path::PathBuf;
use std::process::ExitCode;

use spriteremap_cli::commands;
use spriteremap_cli::commands::inspect::SheetSize;
use spriteremap_cli::logging;

/// spriteremap - Sprite animation remapper
#[derive(Parser)]
#[command(name = "spriteremap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an animation list into idle and action groups
    Remap {
        /// Path to the exported animation list (JSON)
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        /// Output file path, or - for stdout (default: depends on profile)
        #[arg(short, long)]
        output: Option<String>,

        /// Output profile (json: plain JSON; yaml: YAML with sprite sheet grid)
        #[arg(long, default_value = "json")]
        profile: OutputProfile,

        /// Override the profile's output format (json, yaml)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Input field names (source: Name/Frames/dur/col/row; canonical: name/frames/duration/column/row)
        #[arg(long, default_value = "source")]
        schema: SchemaVariant,

        /// Sprite sheet columns (overrides the profile's grid)
        #[arg(long, requires = "rows")]
        columns: Option<u32>,

        /// Sprite sheet rows (overrides the profile's grid)
        #[arg(long, requires = "columns")]
        rows: Option<u32>,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Summarize a remapped document
    Inspect {
        /// Path to the remapped document (.json, .yaml or .yml)
        #[arg(short, long)]
        document: String,

        /// Sprite sheet image width in pixels (reports the cell size)
        #[arg(long, requires = "sheet_height")]
        sheet_width: Option<u32>,

        /// Sprite sheet image height in pixels
        #[arg(long, requires = "sheet_width")]
        sheet_height: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Remap {
            input,
            output,
            profile,
            format,
            schema,
            columns,
            rows,
            json,
        } => {
            let config = RemapConfig {
                input: PathBuf::from(input),
                output: output.as_deref().map(Destination::from_arg),
                profile,
                format,
                schema,
                sprite_sheet: columns.zip(rows).map(|(c, r)| SpriteSheetInfo::new(c, r)),
            };
            commands::remap::run(&config, json)
        }
        Commands::Inspect {
            document,
            sheet_width,
            sheet_height,
            json,
        } => {
            let sheet = sheet_width
                .zip(sheet_height)
                .map(|(width, height)| SheetSize { width, height });
            commands::inspect::run(&PathBuf::from(document), sheet, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_remap_defaults() {
        let cli = Cli::try_parse_from(["spriteremap", "remap"]).unwrap();
        match cli.command {
            Commands::Remap {
                input,
                output,
                profile,
                format,
                schema,
                columns,
                rows,
                json,
            } => {
                assert_eq!(input, "animations.json");
                assert_eq!(output, None);
                assert_eq!(profile, OutputProfile::Json);
                assert_eq!(format, None);
                assert_eq!(schema, SchemaVariant::Source);
                assert_eq!(columns, None);
                assert_eq!(rows, None);
                assert!(!json);
            }
            _ => panic!("expected remap command"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_remap_yaml_profile() {
        let cli = Cli::try_parse_from([
            "spriteremap",
            "remap",
            "-i",
            "assets/animations.json",
            "-o",
            "assets/config.yaml",
            "--profile",
            "yaml",
            "--columns",
            "8",
            "--rows",
            "4",
            "-v",
        ])
        .unwrap();
        match cli.command {
            Commands::Remap {
                input,
                output,
                profile,
                columns,
                rows,
                ..
            } => {
                assert_eq!(input, "assets/animations.json");
                assert_eq!(output.as_deref(), Some("assets/config.yaml"));
                assert_eq!(profile, OutputProfile::Yaml);
                assert_eq!(columns, Some(8));
                assert_eq!(rows, Some(4));
            }
            _ => panic!("expected remap command"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_columns_without_rows() {
        assert!(Cli::try_parse_from(["spriteremap", "remap", "--columns", "8"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_profile() {
        assert!(Cli::try_parse_from(["spriteremap", "remap", "--profile", "toml"]).is_err());
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from([
            "spriteremap",
            "inspect",
            "--document",
            "config.yaml",
            "--sheet-width",
            "3348",
            "--sheet-height",
            "3162",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Inspect {
                document,
                sheet_width,
                sheet_height,
                json,
            } => {
                assert_eq!(document, "config.yaml");
                assert_eq!(sheet_width, Some(3348));
                assert_eq!(sheet_height, Some(3162));
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }
}
