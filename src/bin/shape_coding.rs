use anyhow::{Context, Result};
use env_logger::Env;
use log::{debug, info};

use multidim_viz::cli::parse_shape_coding_args;
use multidim_viz::render::RasterRenderer;
use multidim_viz::shape_coding::{Rgb, ShapeCoding, ShapeCodingConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ShapeCodingConfig::from(parse_shape_coding_args());
    debug!("Resolved config: {}", serde_json::to_string(&config)?);

    // Any load failure ends the run here, before anything is written.
    let coding = ShapeCoding::from_config(&config)
        .with_context(|| format!("Failed to build image from {:?}", config.input))?;
    info!(
        "Loaded {} record(s) from {:?}",
        coding.records().len(),
        config.input
    );

    coding.image().save_ppm(&config.output)?;
    println!("Image saved to {}", config.output.display());

    match &config.preview {
        Some(path) => {
            let image = coding.image();
            let mut renderer = RasterRenderer::new(image.width(), image.height(), Rgb::BLACK, 1);
            coding.redraw(&mut renderer)?;
            renderer.surface().save_ppm(path)?;
            println!("Window preview saved to {}", path.display());
        }
        None => info!("No display attached; pass --preview <path> to save the window contents"),
    }

    Ok(())
}
