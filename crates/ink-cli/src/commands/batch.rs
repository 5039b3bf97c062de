//! Batch processing command
//!
//! Applies one set of Hue/Saturation parameters to every document matching a
//! glob pattern. Documents are processed in parallel.

use crate::BatchArgs;
use anyhow::{bail, Context, Result};
use ink_ops::{bulk_apply, BulkStats, HueSaturation};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, output_dir = %args.output_dir.display(), "batch::run");

    let files: Vec<PathBuf> = glob::glob(&args.input)
        .with_context(|| format!("Invalid pattern: {}", args.input))?
        .filter_map(|r| r.ok())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, "Starting batch processing");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    let modifier = HueSaturation::new(super::build_params(&args.adjust)?);
    std::fs::create_dir_all(&args.output_dir)?;

    // Files run in parallel, strokes within a file sequentially
    let results: Vec<Result<BulkStats>> = files
        .par_iter()
        .map(|input| process_file(input, &args.output_dir, &modifier))
        .collect();

    let mut success = 0;
    let mut failed = 0;
    let mut total = BulkStats::default();
    for (input, r) in files.iter().zip(results) {
        match r {
            Ok(stats) => {
                success += 1;
                total = total + stats;
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}: {:#}", input.display(), e);
            }
        }
    }

    info!(
        success = success,
        failed = failed,
        affected = total.affected,
        "Batch processing complete"
    );
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

fn process_file(input: &Path, output_dir: &Path, modifier: &HueSaturation) -> Result<BulkStats> {
    let name = input
        .file_name()
        .with_context(|| format!("Not a file: {}", input.display()))?;
    let output = output_dir.join(name);

    let mut document = super::load_document(input)?;
    let stats = bulk_apply(&mut document, modifier);
    super::save_document(&output, &document)?;

    debug!(input = %input.display(), output = %output.display(), affected = stats.affected, "Processed");
    Ok(stats)
}
