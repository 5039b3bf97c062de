//! Hue/Saturation command
//!
//! Recolors one document and writes the result.

use crate::HueArgs;
use anyhow::Result;
use ink_ops::{HueSaturation, StrokeModifier};
use tracing::{debug, info, trace};

pub fn run(args: HueArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "hue::run");

    let params = super::build_params(&args.adjust)?;
    let modifier = HueSaturation::new(params);
    debug!(hsv = ?modifier.params.hsv, mode = ?modifier.params.mode, "Resolved parameters");

    let mut document = super::load_document(&args.input)?;

    let stats = if args.sequential {
        modifier.bake(&mut document)
    } else {
        ink_ops::parallel::bulk_apply(&mut document, &modifier)
    };
    info!(
        visited = stats.visited,
        affected = stats.affected,
        "Applied {}",
        modifier.info().name
    );

    if verbose > 0 {
        println!(
            "Recolored {} of {} strokes in {}",
            stats.affected,
            stats.visited,
            args.input.display()
        );
    }

    super::save_document(&args.output, &document)?;

    if verbose > 0 {
        println!("Saved: {}", args.output.display());
    }

    Ok(())
}
