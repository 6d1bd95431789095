//! End-to-end pipeline runs against real files on disk.

use edgekit::config::{CONFIG_FILE_NAME, PipelineConfig, load_config};
use edgekit::imaging::{Color, Operator, RasterImage, decode, encode};
use edgekit::pipeline::{MANIFEST_FILE_NAME, PipelineReport, Stage, run};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Dark square in the middle of a bright field.
fn square_on_field(size: u32, inset: u32) -> RasterImage {
    let mut pixels = Vec::new();
    for y in 0..size {
        for x in 0..size {
            let inside = (inset..size - inset).contains(&x) && (inset..size - inset).contains(&y);
            let c = if inside {
                Color::new(20, 30, 40)
            } else {
                Color::new(230, 220, 210)
            };
            pixels.extend_from_slice(&c.bgr());
        }
    }
    RasterImage::from_pixels(size, size, pixels).unwrap()
}

fn write_input(dir: &Path, image: &RasterImage) -> PathBuf {
    let path = dir.join("input.bmp");
    encode(image, &path).unwrap();
    path
}

#[test]
fn default_pipeline_outputs() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &square_on_field(16, 5));
    let out = tmp.path().join("out");

    let report = run(&input, &out, &PipelineConfig::default()).unwrap();

    let names: Vec<&str> = report.stages.iter().map(|s| s.stage.name()).collect();
    assert_eq!(names, ["blur", "grayscale", "roberts", "prewitt", "sobel"]);

    let gray = decode(&out.join("grayscale.bmp")).unwrap();
    assert!(
        gray.pixels()
            .chunks_exact(3)
            .all(|px| px[0] == px[1] && px[1] == px[2])
    );

    // The bottom-right pixel is outside every operator's computed region.
    for op in ["roberts", "prewitt", "sobel"] {
        let edges = decode(&out.join(format!("{op}.bmp"))).unwrap();
        assert_eq!(edges.dimensions(), (16, 16));
        assert_eq!(edges.pixel(15, 15), Color::BLACK, "{op}");
        assert!(
            edges.pixels().iter().any(|&b| b > 0),
            "{op} found no edges"
        );
    }

    let manifest: PipelineReport =
        serde_json::from_str(&fs::read_to_string(out.join(MANIFEST_FILE_NAME)).unwrap())
            .unwrap();
    assert_eq!(manifest, report);
}

#[test]
fn uniform_input_has_no_edges() {
    let tmp = TempDir::new().unwrap();
    let flat = RasterImage::solid(9, 6, Color::new(90, 160, 30)).unwrap();
    let input = write_input(tmp.path(), &flat);
    let out = tmp.path().join("out");

    run(&input, &out, &PipelineConfig::default()).unwrap();

    assert_eq!(decode(&out.join("blur.bmp")).unwrap(), flat);
    for op in Operator::ALL {
        let edges = decode(&out.join(Stage::from(op).file_name())).unwrap();
        assert!(edges.pixels().iter().all(|&b| b == 0), "{op}");
    }
}

#[test]
fn config_file_drives_the_run() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        r#"
operators = ["prewitt"]

[smoothing]
kernel_size = 3
sigma = 0.8
"#,
    )
    .unwrap();
    let config = load_config(tmp.path()).unwrap();

    let input = write_input(tmp.path(), &square_on_field(10, 3));
    let out = tmp.path().join("out");
    let report = run(&input, &out, &config).unwrap();

    let stages: Vec<Stage> = report.stages.iter().map(|s| s.stage).collect();
    assert_eq!(stages, [Stage::Blur, Stage::Grayscale, Stage::Prewitt]);
    assert!(!out.join("sobel.bmp").exists());
    assert!(!out.join("roberts.bmp").exists());
}

#[test]
fn tiny_image_survives_every_stage() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &RasterImage::solid(1, 1, Color::WHITE).unwrap());
    let out = tmp.path().join("out");

    let report = run(&input, &out, &PipelineConfig::default()).unwrap();
    for stage in &report.stages {
        assert_eq!(decode(&stage.path).unwrap().dimensions(), (1, 1));
    }
    let sobel = decode(&out.join("sobel.bmp")).unwrap();
    assert_eq!(sobel.pixel(0, 0), Color::BLACK);
}

#[test]
fn corrupt_input_fails_without_outputs() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("bad.bmp");
    fs::write(&input, b"PK\x03\x04 not a bitmap").unwrap();
    let out = tmp.path().join("out");

    assert!(run(&input, &out, &PipelineConfig::default()).is_err());
    assert!(!out.join(MANIFEST_FILE_NAME).exists());
    assert!(!out.join("blur.bmp").exists());
}
