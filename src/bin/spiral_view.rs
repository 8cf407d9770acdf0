use anyhow::{Context, Result};
use env_logger::Env;
use log::{debug, info};
use std::io::{self, Write};
use std::process::ExitCode;

use multidim_viz::cli::{parse_spiral_args, SpiralCli};
use multidim_viz::records::load_point_records;
use multidim_viz::render::RasterRenderer;
use multidim_viz::shape_coding::Rgb;
use multidim_viz::spiral::query::QUERY_PROMPT;
use multidim_viz::spiral::report::{write_sorted_json, write_sorted_table};
use multidim_viz::spiral::{Query, SpiralContext};

fn prompt_query() -> Result<Query> {
    print!("{}", QUERY_PROMPT);
    io::stdout().flush()?;
    let query = Query::read_from(io::stdin().lock())?;
    Ok(query)
}

fn run(cli: SpiralCli) -> Result<()> {
    let (config, query) = cli.into_parts();
    debug!("Resolved config: {}", serde_json::to_string(&config)?);

    let set = load_point_records(&config.input)?;
    info!("Loaded {} record(s) from {:?}", set.len(), config.input);

    let query = match query {
        Some(query) => query,
        None => prompt_query()?,
    };

    let window = (config.window_width, config.window_height);
    let context = SpiralContext::new(set, query, config.params, window);

    let stdout = io::stdout();
    if config.json {
        write_sorted_json(stdout.lock(), context.sorted())?;
    } else {
        write_sorted_table(stdout.lock(), context.sorted())?;
    }

    if let Some(path) = &config.snapshot {
        let mut renderer = RasterRenderer::new(window.0, window.1, Rgb::WHITE, config.point_size);
        context.redraw(&mut renderer)?;
        renderer
            .surface()
            .save_ppm(path)
            .with_context(|| format!("Failed to save snapshot to {:?}", path))?;
        println!("Snapshot saved to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(parse_spiral_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
