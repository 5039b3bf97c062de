//! Document info command.
//!
//! Summarizes layers, frames, strokes, points and materials.

use crate::InfoArgs;
use anyhow::Result;
use ink_core::Document;
use std::path::Path;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let document = super::load_document(path)?;

        if args.json {
            print_json(path, &document)?;
        } else {
            print_text(&args, path, &document, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(args: &InfoArgs, path: &Path, document: &Document, verbose: u8) {
    println!("{}", path.display());
    println!("  Layers:     {}", document.layers.len());
    println!("  Frames:     {}", document.frame_count());
    println!("  Strokes:    {}", document.stroke_count());
    println!("  Points:     {}", document.point_count());
    println!("  Materials:  {}", document.materials.len());

    if args.all || verbose > 0 {
        for layer in &document.layers {
            println!(
                "  Layer '{}': pass {}, {} frames, {} strokes",
                layer.name,
                layer.pass_index,
                layer.frames.len(),
                layer.stroke_count()
            );
        }
        for (i, m) in document.materials.iter().enumerate() {
            println!(
                "  Material {}: '{}' stroke {:?} fill {:?} pass {}",
                i,
                m.name,
                m.stroke_color.to_array(),
                m.fill_color.to_array(),
                m.pass_index
            );
        }
    }
}

/// Prints info as JSON.
fn print_json(path: &Path, document: &Document) -> Result<()> {
    let layers: Vec<_> = document
        .layers
        .iter()
        .map(|l| {
            serde_json::json!({
                "name": l.name,
                "pass_index": l.pass_index,
                "frames": l.frames.len(),
                "strokes": l.stroke_count(),
            })
        })
        .collect();
    let materials: Vec<_> = document.materials.iter().map(|m| m.name.as_str()).collect();

    let info = serde_json::json!({
        "path": path.display().to_string(),
        "layers": layers,
        "frames": document.frame_count(),
        "strokes": document.stroke_count(),
        "points": document.point_count(),
        "materials": materials,
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
