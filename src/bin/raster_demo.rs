//! raster-demo: render the reference drawings or a YAML scene to image files.
//!
//! Run: `cargo run --features cli --bin raster-demo -- --preview`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rasterkit::framebuffer::PixelBuffer;
use rasterkit::output::{PngEncoder, PpmEncoder, TerminalEncoder, TerminalMode};
use rasterkit::scene::{render_many, Scene};
use std::path::{Path, PathBuf};

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Portable Network Graphics
    Png,
    /// Binary portable pixmap (P6)
    Ppm,
}

impl Format {
    const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ppm => "ppm",
        }
    }

    fn write(self, buf: &PixelBuffer, path: &Path) -> rasterkit::Result<()> {
        match self {
            Self::Png => PngEncoder::write_to_file(buf, path),
            Self::Ppm => PpmEncoder::write_to_file(buf, path),
        }
    }
}

/// raster-demo: integer rasterization of lines, circles and triangles
#[derive(Parser, Debug)]
#[command(name = "raster-demo")]
#[command(version)]
#[command(about = "Render sample drawings or a YAML scene with integer rasterizers", long_about = None)]
struct Cli {
    /// Scene file (YAML). Without it the three sample drawings are rendered.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Image format
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Print a preview of every image to the terminal
    #[arg(long)]
    preview: bool,

    /// Use 24-bit ANSI colors for the preview instead of ASCII
    #[arg(long, requires = "preview")]
    color: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let jobs: Vec<(String, Scene)> = match &cli.scene {
        Some(path) => {
            let scene = Scene::load(path)
                .with_context(|| format!("failed to load scene {}", path.display()))?;
            let name = path
                .file_stem()
                .map_or_else(|| "scene".to_string(), |s| s.to_string_lossy().into_owned());
            vec![(name, scene)]
        }
        None => Scene::samples().into_iter().map(|(name, s)| (name.to_string(), s)).collect(),
    };

    let scenes: Vec<Scene> = jobs.iter().map(|(_, s)| s.clone()).collect();
    let buffers = render_many(&scenes).context("rendering failed")?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("cannot create {}", cli.output_dir.display()))?;

    let preview = TerminalEncoder::new().mode(if cli.color {
        TerminalMode::AnsiTrueColor
    } else {
        TerminalMode::Ascii
    });

    for ((name, _), buf) in jobs.iter().zip(&buffers) {
        let path = cli.output_dir.join(format!("{name}.{}", cli.format.extension()));
        cli.format
            .write(buf, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());

        if cli.preview {
            println!("{name}:");
            preview.print(buf);
        }
    }

    Ok(())
}
