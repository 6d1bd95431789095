//! Edge-detection pipeline.
//!
//! Decodes one bitmap, runs the configured stages in order, and writes each
//! stage's result next to a `manifest.json` describing the run.
//!
//! ## Stage Order
//!
//! ```text
//! input ─▶ blur ─▶ grayscale ─┬─▶ roberts
//!                             ├─▶ prewitt
//!                             └─▶ sobel
//! ```
//!
//! Blur and grayscale can each be switched off in [`PipelineConfig`]; the
//! edge operators then read whichever image came last.
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── manifest.json      # PipelineReport
//! ├── blur.bmp
//! ├── grayscale.bmp
//! ├── roberts.bmp
//! ├── prewitt.bmp
//! └── sobel.bmp
//! ```

use crate::config::PipelineConfig;
use crate::imaging::{
    CodecError, FilterError, Operator, RasterImage, Smoothing, decode, encode, smooth_with,
    to_grayscale,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the run report inside the output directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
}

/// One step of the pipeline. Each stage writes `<name>.bmp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Blur,
    Grayscale,
    Roberts,
    Prewitt,
    Sobel,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Blur => "blur",
            Stage::Grayscale => "grayscale",
            Stage::Roberts => Operator::Roberts.name(),
            Stage::Prewitt => Operator::Prewitt.name(),
            Stage::Sobel => Operator::Sobel.name(),
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.bmp", self.name())
    }
}

impl From<Operator> for Stage {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Roberts => Stage::Roberts,
            Operator::Prewitt => Stage::Prewitt,
            Operator::Sobel => Stage::Sobel,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A written stage result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Summary of a pipeline run, also written as `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub input: PathBuf,
    pub width: u32,
    pub height: u32,
    pub stages: Vec<StageOutput>,
}

/// Ordered list of stages `config` would run. Touches no images.
pub fn plan_stages(config: &PipelineConfig) -> Vec<Stage> {
    let mut stages = Vec::with_capacity(2 + config.operators.len());
    if config.smoothing.enabled {
        stages.push(Stage::Blur);
    }
    if config.grayscale {
        stages.push(Stage::Grayscale);
    }
    stages.extend(config.operators.iter().copied().map(Stage::from));
    stages
}

/// Run the full pipeline on `input`, writing every stage into `output_dir`.
pub fn run(
    input: &Path,
    output_dir: &Path,
    config: &PipelineConfig,
) -> Result<PipelineReport, PipelineError> {
    // Fail on bad parameters before doing any I/O.
    let smoothing = Smoothing::new(config.smoothing.kernel_size, config.smoothing.sigma)?;

    std::fs::create_dir_all(output_dir)?;
    let source = decode(input)?;

    let mut report = PipelineReport {
        input: input.to_path_buf(),
        width: source.width(),
        height: source.height(),
        stages: Vec::new(),
    };

    // Edge operators read from `current`; blur and grayscale replace it.
    let mut current = source;
    for stage in plan_stages(config) {
        let result = match stage {
            Stage::Blur => smooth_with(&current, &smoothing.kernel()),
            Stage::Grayscale => to_grayscale(&current),
            Stage::Roberts => Operator::Roberts.apply(&current),
            Stage::Prewitt => Operator::Prewitt.apply(&current),
            Stage::Sobel => Operator::Sobel.apply(&current),
        };
        report.stages.push(write_stage(stage, &result, output_dir)?);
        if matches!(stage, Stage::Blur | Stage::Grayscale) {
            current = result;
        }
    }

    let manifest_json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output_dir.join(MANIFEST_FILE_NAME), manifest_json)?;

    Ok(report)
}

fn write_stage(
    stage: Stage,
    image: &RasterImage,
    output_dir: &Path,
) -> Result<StageOutput, PipelineError> {
    let path = output_dir.join(stage.file_name());
    encode(image, &path)?;
    Ok(StageOutput {
        stage,
        path,
        width: image.width(),
        height: image.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{Color, encode, gaussian_smooth, sobel};
    use crate::test_helpers::{gradient_image, vertical_step};
    use std::fs;
    use tempfile::TempDir;

    fn write_input(tmp: &TempDir, image: &RasterImage) -> PathBuf {
        let path = tmp.path().join("input.bmp");
        encode(image, &path).unwrap();
        path
    }

    // =========================================================================
    // plan_stages tests
    // =========================================================================

    #[test]
    fn default_plan_runs_everything_in_order() {
        assert_eq!(
            plan_stages(&PipelineConfig::default()),
            vec![
                Stage::Blur,
                Stage::Grayscale,
                Stage::Roberts,
                Stage::Prewitt,
                Stage::Sobel
            ]
        );
    }

    #[test]
    fn plan_skips_disabled_stages() {
        let mut config = PipelineConfig::default();
        config.smoothing.enabled = false;
        config.grayscale = false;
        config.operators = vec![Operator::Sobel, Operator::Roberts];
        assert_eq!(plan_stages(&config), vec![Stage::Sobel, Stage::Roberts]);
    }

    #[test]
    fn plan_can_be_empty() {
        let mut config = PipelineConfig::default();
        config.smoothing.enabled = false;
        config.grayscale = false;
        config.operators.clear();
        assert!(plan_stages(&config).is_empty());
    }

    #[test]
    fn stage_names_match_file_names() {
        assert_eq!(Stage::Blur.file_name(), "blur.bmp");
        assert_eq!(Stage::from(Operator::Prewitt).file_name(), "prewitt.bmp");
        assert_eq!(Stage::Grayscale.to_string(), "grayscale");
    }

    // =========================================================================
    // run tests
    // =========================================================================

    #[test]
    fn run_writes_every_stage_and_manifest() {
        let tmp = TempDir::new().unwrap();
        let input = write_input(&tmp, &gradient_image(9, 7));
        let out = tmp.path().join("out");

        let report = run(&input, &out, &PipelineConfig::default()).unwrap();

        assert_eq!(report.input, input);
        assert_eq!((report.width, report.height), (9, 7));
        assert_eq!(report.stages.len(), 5);
        for stage in &report.stages {
            assert_eq!(stage.path, out.join(stage.stage.file_name()));
            assert!(stage.path.exists(), "missing {}", stage.path.display());
            assert_eq!((stage.width, stage.height), (9, 7));
            assert_eq!(decode(&stage.path).unwrap().dimensions(), (9, 7));
        }

        let manifest = fs::read_to_string(out.join(MANIFEST_FILE_NAME)).unwrap();
        let parsed: PipelineReport = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn blur_stage_matches_gaussian_smooth() {
        let tmp = TempDir::new().unwrap();
        let img = gradient_image(6, 5);
        let input = write_input(&tmp, &img);
        let out = tmp.path().join("out");

        let mut config = PipelineConfig::default();
        config.smoothing.kernel_size = 3;
        config.smoothing.sigma = 1.0;
        run(&input, &out, &config).unwrap();

        let expected = gaussian_smooth(&img, 3, 1.0).unwrap();
        assert_eq!(decode(&out.join("blur.bmp")).unwrap(), expected);
    }

    #[test]
    fn edges_read_grayscale_of_blur() {
        let tmp = TempDir::new().unwrap();
        let img = gradient_image(8, 8);
        let input = write_input(&tmp, &img);
        let out = tmp.path().join("out");

        run(&input, &out, &PipelineConfig::default()).unwrap();

        let gray = decode(&out.join("grayscale.bmp")).unwrap();
        assert_eq!(gray, to_grayscale(&gaussian_smooth(&img, 5, 20.0).unwrap()));
        assert_eq!(decode(&out.join("sobel.bmp")).unwrap(), sobel(&gray));
    }

    #[test]
    fn edges_only_read_input_directly() {
        let tmp = TempDir::new().unwrap();
        let img = vertical_step(5, 5, 2);
        let input = write_input(&tmp, &img);
        let out = tmp.path().join("out");

        let mut config = PipelineConfig::default();
        config.smoothing.enabled = false;
        config.grayscale = false;
        config.operators = vec![Operator::Sobel];
        let report = run(&input, &out, &config).unwrap();

        assert_eq!(report.stages.len(), 1);
        assert!(!out.join("blur.bmp").exists());
        assert!(!out.join("grayscale.bmp").exists());
        let edges = decode(&out.join("sobel.bmp")).unwrap();
        assert_eq!(edges, sobel(&img));
        assert_eq!(edges.pixel(2, 2), Color::WHITE);
    }

    #[test]
    fn empty_plan_still_writes_manifest() {
        let tmp = TempDir::new().unwrap();
        let input = write_input(&tmp, &gradient_image(3, 3));
        let out = tmp.path().join("out");

        let mut config = PipelineConfig::default();
        config.smoothing.enabled = false;
        config.grayscale = false;
        config.operators.clear();
        let report = run(&input, &out, &config).unwrap();

        assert!(report.stages.is_empty());
        assert!(out.join(MANIFEST_FILE_NAME).exists());
    }

    #[test]
    fn missing_input_is_codec_error() {
        let tmp = TempDir::new().unwrap();
        let result = run(
            &tmp.path().join("nope.bmp"),
            &tmp.path().join("out"),
            &PipelineConfig::default(),
        );
        assert!(matches!(result, Err(PipelineError::Codec(_))));
    }

    #[test]
    fn invalid_smoothing_fails_before_writing() {
        let tmp = TempDir::new().unwrap();
        let input = write_input(&tmp, &gradient_image(3, 3));
        let out = tmp.path().join("out");

        let mut config = PipelineConfig::default();
        config.smoothing.kernel_size = 4;
        let result = run(&input, &out, &config);

        assert!(matches!(
            result,
            Err(PipelineError::Filter(FilterError::InvalidKernelSize(4)))
        ));
        assert!(!out.exists());
    }
}
