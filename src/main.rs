use clap::{Parser, Subcommand};
use edgekit::imaging::{self, Axis, Color, Operator, RasterImage};
use edgekit::{config, output, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edgekit")]
#[command(about = "Smoothing and edge detection for 24-bit bitmaps")]
#[command(long_about = "\
Smoothing and edge detection for 24-bit bitmaps

Reads and writes uncompressed 24-bit .bmp files. The full pipeline blurs the
input, converts it to grayscale, then runs each edge detector:

  input.bmp
  └─▶ blur.bmp                      # Gaussian, 3 vertical + 3 horizontal passes
      └─▶ grayscale.bmp             # 0.114 B + 0.587 G + 0.299 R
          ├─▶ roberts.bmp           # 2x2 cross
          ├─▶ prewitt.bmp           # 3x3
          └─▶ sobel.bmp             # 3x3, center-weighted

Single steps are available as subcommands; 'convolve --axis' runs one
1-D Gaussian pass. Stages and parameters come from edgekit.toml in --config-dir.
Run 'edgekit gen-config' to generate a documented edgekit.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing edgekit.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a single-color image
    Solid {
        output: PathBuf,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        /// Fill color as R,G,B
        #[arg(long, default_value = "0,0,0")]
        color: Color,
    },
    /// Gaussian-smooth an image
    Blur {
        input: PathBuf,
        output: PathBuf,
        /// Kernel taps (odd). Defaults to the config value
        #[arg(long)]
        kernel_size: Option<usize>,
        /// Standard deviation. Defaults to the config value
        #[arg(long)]
        sigma: Option<f64>,
    },
    /// Run a single 1-D Gaussian pass along one axis
    Convolve {
        input: PathBuf,
        output: PathBuf,
        /// horizontal or vertical
        #[arg(long)]
        axis: Axis,
        /// Kernel taps (odd). Defaults to the config value
        #[arg(long)]
        kernel_size: Option<usize>,
        /// Standard deviation. Defaults to the config value
        #[arg(long)]
        sigma: Option<f64>,
    },
    /// Convert an image to grayscale
    Grayscale { input: PathBuf, output: PathBuf },
    /// Run one edge detector
    Edges {
        input: PathBuf,
        output: PathBuf,
        /// roberts, prewitt or sobel
        #[arg(long)]
        operator: Operator,
    },
    /// Run the full pipeline: blur → grayscale → edge detectors
    Run {
        input: PathBuf,
        /// Where stage images and manifest.json are written
        #[arg(long, default_value = "out")]
        output_dir: PathBuf,
    },
    /// Print a stock edgekit.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solid {
            output: out,
            width,
            height,
            color,
        } => {
            let image = RasterImage::solid(width, height, color)?;
            imaging::encode(&image, &out)?;
            output::print_image_summary("solid", &out, &image);
        }
        Command::Blur {
            input,
            output: out,
            kernel_size,
            sigma,
        } => {
            let config = config::load_config(&cli.config_dir)?;
            let smoothing = config.smoothing.params_with(kernel_size, sigma)?;
            let source = imaging::decode(&input)?;
            let image = imaging::smooth_with(&source, &smoothing.kernel());
            imaging::encode(&image, &out)?;
            output::print_image_summary("blur", &out, &image);
        }
        Command::Convolve {
            input,
            output: out,
            axis,
            kernel_size,
            sigma,
        } => {
            let config = config::load_config(&cli.config_dir)?;
            let smoothing = config.smoothing.params_with(kernel_size, sigma)?;
            let source = imaging::decode(&input)?;
            let image = imaging::convolve(&source, &smoothing.kernel(), axis);
            imaging::encode(&image, &out)?;
            output::print_image_summary(axis.name(), &out, &image);
        }
        Command::Grayscale { input, output: out } => {
            let image = imaging::to_grayscale(&imaging::decode(&input)?);
            imaging::encode(&image, &out)?;
            output::print_image_summary("grayscale", &out, &image);
        }
        Command::Edges {
            input,
            output: out,
            operator,
        } => {
            let image = operator.apply(&imaging::decode(&input)?);
            imaging::encode(&image, &out)?;
            output::print_image_summary(operator.name(), &out, &image);
        }
        Command::Run { input, output_dir } => {
            let config = config::load_config(&cli.config_dir)?;
            println!("==> Running pipeline on {}", input.display());
            let report = pipeline::run(&input, &output_dir, &config)?;
            output::print_pipeline_output(&report);
            println!("==> Done: {}", output_dir.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
