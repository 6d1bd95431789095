//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Single operations
//!
//! ```text
//! blur: 640x480 → out/blur.bmp
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Input: photo.bmp (640x480)
//!     001 blur → out/blur.bmp
//!     002 grayscale → out/grayscale.bmp
//!     003 roberts → out/roberts.bmp
//!     004 prewitt → out/prewitt.bmp
//!     005 sobel → out/sobel.bmp
//!
//! Wrote 5 images
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::imaging::RasterImage;
use crate::pipeline::PipelineReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Single operations
// ============================================================================

/// One line describing an image written by a single command.
pub fn format_image_summary(label: &str, path: &Path, image: &RasterImage) -> Vec<String> {
    vec![format!(
        "{}: {}x{} → {}",
        label,
        image.width(),
        image.height(),
        path.display()
    )]
}

/// Print an image summary to stdout.
pub fn print_image_summary(label: &str, path: &Path, image: &RasterImage) {
    for line in format_image_summary(label, path, image) {
        println!("{}", line);
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Format a pipeline report: the input, each written stage in order, and a
/// closing count.
pub fn format_pipeline_output(report: &PipelineReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Input: {} ({}x{})",
        report.input.display(),
        report.width,
        report.height
    )];

    for (i, stage) in report.stages.iter().enumerate() {
        lines.push(format!(
            "    {} {} → {}",
            format_index(i + 1),
            stage.stage,
            stage.path.display()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Wrote {}", plural(report.stages.len(), "image")));
    lines
}

/// Print pipeline output to stdout.
pub fn print_pipeline_output(report: &PipelineReport) {
    for line in format_pipeline_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Stage, StageOutput};
    use std::path::PathBuf;

    fn stage(stage: Stage, dir: &str) -> StageOutput {
        StageOutput {
            stage,
            path: PathBuf::from(dir).join(stage.file_name()),
            width: 4,
            height: 2,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn plural_handles_one() {
        assert_eq!(plural(0, "image"), "0 images");
        assert_eq!(plural(1, "image"), "1 image");
        assert_eq!(plural(3, "image"), "3 images");
    }

    #[test]
    fn image_summary_line() {
        let img = RasterImage::new(640, 480).unwrap();
        let lines = format_image_summary("blur", Path::new("out/blur.bmp"), &img);
        assert_eq!(lines, vec!["blur: 640x480 → out/blur.bmp"]);
    }

    #[test]
    fn pipeline_output_lists_stages_in_order() {
        let report = PipelineReport {
            input: PathBuf::from("photo.bmp"),
            width: 4,
            height: 2,
            stages: vec![
                stage(Stage::Blur, "out"),
                stage(Stage::Grayscale, "out"),
                stage(Stage::Sobel, "out"),
            ],
        };
        let lines = format_pipeline_output(&report);
        assert_eq!(
            lines,
            vec![
                "Input: photo.bmp (4x2)",
                "    001 blur → out/blur.bmp",
                "    002 grayscale → out/grayscale.bmp",
                "    003 sobel → out/sobel.bmp",
                "",
                "Wrote 3 images",
            ]
        );
    }

    #[test]
    fn pipeline_output_with_no_stages() {
        let report = PipelineReport {
            input: PathBuf::from("in.bmp"),
            width: 1,
            height: 1,
            stages: vec![],
        };
        let lines = format_pipeline_output(&report);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Wrote 0 images");
    }
}
