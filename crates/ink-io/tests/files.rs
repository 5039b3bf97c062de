//! File-level tests for documents and presets

use ink_core::{Document, Frame, Layer, MaterialStyle, MaterialTable, Point, Rgba, Stroke};
use ink_io::{read_document, read_preset, write_document, write_preset, IoError};
use ink_ops::{HueSaturationParams, ModifyColor};
use tempfile::tempdir;

#[test]
fn document_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");

    let doc = Document {
        layers: vec![Layer::new("Lines").with_pass_index(3).with_frame(
            Frame::new(12).with_stroke(
                Stroke::from_points(0, vec![Point::default().with_color(Rgba::new(0.1, 0.2, 0.3, 0.4))])
                    .with_fill(Rgba::opaque(0.9, 0.8, 0.7))
                    .with_pass_index(5),
            ),
        )],
        materials: MaterialTable::from(vec![MaterialStyle::new(
            "Ink",
            Rgba::opaque(0.0, 0.0, 0.0),
            Rgba::TRANSPARENT,
        )]),
    };

    write_document(&path, &doc).unwrap();
    assert_eq!(read_document(&path).unwrap(), doc);
}

#[test]
fn preset_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preset.yaml");

    let mut params = HueSaturationParams::default();
    params.hsv = [0.4, 1.25, 0.5];
    params.mode = ModifyColor::Stroke;
    params.filter.material_name = "Ink".into();
    params.filter.invert_material = true;

    write_preset(&path, &params).unwrap();
    assert_eq!(read_preset(&path).unwrap(), params);
}

#[test]
fn invalid_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(read_document(&path), Err(IoError::Json(_))));
}

#[test]
fn missing_preset_file() {
    let dir = tempdir().unwrap();
    let err = read_preset(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, IoError::NotFound { .. }));
    assert!(err.to_string().contains("nope.yaml"));
}
