//! Command line interface.

use std::{path::PathBuf, time::Instant};

use clap::Parser;
use log::{debug, info};

use crate::{
    complex::Complex,
    error::Result,
    output,
    parse::{parse_complex, parse_size},
    render::render,
    screen,
    viewport::Viewport,
};

/// Render the Mandelbrot set to a greyscale image
#[derive(Parser, Debug)]
#[command(name = "mandelbrot", version, long_about = None)]
#[command(after_help = "Example: mandelbrot mandel.png 1000x750 -1.2+0.35j -1+0.2j")]
pub struct Args {
    /// Output image (.png, .bmp or .pgm; anything else is written as PNG)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Image size in pixels
    #[arg(value_name = "WIDTHxHEIGHT", value_parser = parse_size)]
    pub size: screen::Size,

    /// Upper left corner on the complex plane, e.g. -1.2+0.35j or -1.2,0.35
    #[arg(value_name = "UPPERLEFT", value_parser = parse_complex, allow_hyphen_values = true)]
    pub upper_left: Complex,

    /// Lower right corner on the complex plane, e.g. -1+0.2j or -1,0.2
    #[arg(value_name = "LOWERRIGHT", value_parser = parse_complex, allow_hyphen_values = true)]
    pub lower_right: Complex,
}

/// Render the image described by `args` and write it out.
pub fn run(args: &Args) -> Result<()> {
    debug!("{:?}", args);

    let viewport = Viewport::new(args.upper_left, args.lower_right)?;
    output::image_format(&args.file)?;

    let now = Instant::now();
    let intensities = render(args.size, viewport.upper_left, viewport.lower_right);
    info!("calculation took {:.3} seconds", now.elapsed().as_secs_f64());

    output::write_intensities(&args.file, &intensities)?;
    info!("wrote {}", args.file.display());

    Ok(())
}
