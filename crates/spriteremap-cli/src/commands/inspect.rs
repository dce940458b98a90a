//! Inspect command implementation
//!
//! Reads a remapped document back and prints what it contains.

use anyhow::{Context, Result};
use colored::Colorize;
use spriteremap_core::{read_document, Category, OutputDocument};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{CellSize, InspectOutput, JsonError};

/// Pixel dimensions of the sprite sheet image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSize {
    pub width: u32,
    pub height: u32,
}

/// Run the inspect command
///
/// # Arguments
/// * `document_path` - Path to a remapped `.json` / `.yaml` document
/// * `sheet` - Sprite sheet image size, used to report the cell size
/// * `json_output` - Whether to print machine-readable JSON
pub fn run(document_path: &Path, sheet: Option<SheetSize>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(document_path, sheet);
    }

    println!(
        "{} {}",
        "Inspecting:".cyan().bold(),
        document_path.display()
    );

    let document = read_document(document_path)
        .with_context(|| format!("Failed to read document {}", document_path.display()))?;
    let cell = cell_size(&document, sheet)?;

    print_document(&document, cell);
    Ok(ExitCode::SUCCESS)
}

fn run_json(document_path: &Path, sheet: Option<SheetSize>) -> Result<ExitCode> {
    let result = read_document(document_path)
        .and_then(|document| Ok((document.summary(), cell_size(&document, sheet)?)));

    let (output, code) = match result {
        Ok((summary, cell)) => (InspectOutput::success(summary, cell), ExitCode::SUCCESS),
        Err(e) => (
            InspectOutput::failure(vec![JsonError::from(&e)]),
            ExitCode::from(1),
        ),
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize summary")?;
    println!("{}", json);
    Ok(code)
}

/// Cell size is only known when both the image size and the grid are.
fn cell_size(
    document: &OutputDocument,
    sheet: Option<SheetSize>,
) -> spriteremap_core::Result<Option<CellSize>> {
    match (document.sprite_sheet_info, sheet) {
        (Some(grid), Some(sheet)) => {
            let (width, height) = grid.cell_size(sheet.width, sheet.height)?;
            Ok(Some(CellSize { width, height }))
        }
        _ => Ok(None),
    }
}

fn print_document(document: &OutputDocument, cell: Option<CellSize>) {
    let summary = document.summary();

    for category in [Category::Idle, Category::Action] {
        let animations = document.category(category);
        println!(
            "\n{} ({})",
            format!("{}:", category).bold(),
            animations.len()
        );
        for animation in animations {
            println!(
                "  {:<24} {:>3} frames, duration {}",
                animation.name,
                animation.frames.len(),
                animation.total_duration()
            );
        }
    }

    println!();
    println!(
        "  {} {} (total duration {})",
        "frames:".dimmed(),
        summary.total_frames,
        summary.total_duration
    );
    match summary.sprite_sheet_info {
        Some(grid) => println!(
            "  {} {} x {}",
            "sprite sheet:".dimmed(),
            grid.columns,
            grid.rows
        ),
        None => println!("  {} none", "sprite sheet:".dimmed()),
    }
    if let Some(cell) = cell {
        println!(
            "  {} {} x {} px",
            "cell size:".dimmed(),
            cell.width,
            cell.height
        );
    }
}
