use std::fs;
use std::path::Path;

use aspectnorm::{
    Error, NormalizeParams, TARGET_HEIGHT, TARGET_WIDTH, normalize_file_to_path, process_inputs,
};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

fn write_rgb(path: &Path, width: u32, height: u32, format: ImageFormat) {
    RgbImage::from_pixel(width, height, Rgb([90, 140, 210]))
        .save_with_format(path, format)
        .unwrap();
}

fn output_dims(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}

#[test]
fn single_wide_png_lands_at_00() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.png");
    let out = dir.path().join("out");
    write_rgb(&input, 2000, 1000, ImageFormat::Png);

    let report = process_inputs(&input, &out, &NormalizeParams::default()).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.outputs, vec![out.join("00.webp")]);
    assert_eq!(output_dims(&out.join("00.webp")), (TARGET_WIDTH, TARGET_HEIGHT));
}

#[test]
fn directory_order_follows_sorted_names() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::create_dir(&input).unwrap();

    // b.jpg is tall, a.png is wide; their outputs must follow name order
    write_rgb(&input.join("b.jpg"), 300, 900, ImageFormat::Jpeg);
    write_rgb(&input.join("a.png"), 900, 300, ImageFormat::Png);
    fs::write(input.join("notes.txt"), "ignored").unwrap();

    let report = process_inputs(&input, &out, &NormalizeParams::default()).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(
        report.outputs,
        vec![out.join("00.webp"), out.join("01.webp")]
    );
    for path in &report.outputs {
        assert_eq!(output_dims(path), (TARGET_WIDTH, TARGET_HEIGHT));
    }

    let mut written: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, ["00.webp", "01.webp"]);
}

#[test]
fn exact_target_size_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("frame.png");
    write_rgb(&input, TARGET_WIDTH, TARGET_HEIGHT, ImageFormat::Png);

    let first = dir.path().join("first.webp");
    normalize_file_to_path(&input, &first).unwrap();
    assert_eq!(output_dims(&first), (TARGET_WIDTH, TARGET_HEIGHT));

    // Feed the output back in
    let second = dir.path().join("second.webp");
    normalize_file_to_path(&first, &second).unwrap();
    assert_eq!(output_dims(&second), (TARGET_WIDTH, TARGET_HEIGHT));
}

#[test]
fn small_sources_are_upscaled() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tiny.png");
    write_rgb(&input, 32, 20, ImageFormat::Png);

    let out = dir.path().join("tiny.webp");
    normalize_file_to_path(&input, &out).unwrap();
    assert_eq!(output_dims(&out), (TARGET_WIDTH, TARGET_HEIGHT));
}

#[test]
fn transparent_png_is_flattened_without_compositing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("alpha.png");
    RgbaImage::from_pixel(160, 90, Rgba([200, 30, 30, 0]))
        .save_with_format(&input, ImageFormat::Png)
        .unwrap();

    let buffer = aspectnorm::normalize_file_to_buffer(&input).unwrap();
    assert_eq!(buffer.dimensions(), (TARGET_WIDTH, TARGET_HEIGHT));
    let px = buffer.get_pixel(640, 360).0;
    assert!(px[0].abs_diff(200) <= 1 && px[1].abs_diff(30) <= 1 && px[2].abs_diff(30) <= 1);
}

#[test]
fn missing_input_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    let err = process_inputs(&dir.path().join("missing"), &out, &NormalizeParams::default())
        .unwrap_err();

    assert!(matches!(err, Error::InputNotFound { .. }));
    assert!(!out.exists());
}

#[test]
fn empty_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("icon.svg"), "<svg/>").unwrap();

    let err =
        process_inputs(&input, &dir.path().join("out"), &NormalizeParams::default()).unwrap_err();
    assert!(matches!(err, Error::NoSupportedFiles { .. }));
}

#[test]
fn corrupt_file_stops_the_run() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("a.jpg"), b"not a jpeg").unwrap();
    write_rgb(&input.join("b.png"), 64, 64, ImageFormat::Png);

    let err = process_inputs(&input, &out, &NormalizeParams::default()).unwrap_err();

    assert!(matches!(err, Error::DecodeFailure { .. }));
    assert!(!out.join("01.webp").exists());
}

#[test]
fn keep_going_records_failures_without_shifting_names() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    fs::create_dir(&input).unwrap();
    write_rgb(&input.join("a.png"), 64, 64, ImageFormat::Png);
    fs::write(input.join("b.jpg"), b"not a jpeg").unwrap();
    write_rgb(&input.join("c.png"), 64, 64, ImageFormat::Png);

    let params = NormalizeParams {
        continue_on_error: true,
        ..Default::default()
    };
    let report = process_inputs(&input, &out, &params).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.errors, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, input.join("b.jpg"));
    assert_eq!(
        report.outputs,
        vec![out.join("00.webp"), out.join("02.webp")]
    );
    assert!(!out.join("01.webp").exists());
}

#[test]
fn existing_outputs_are_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.jpeg");
    let out = dir.path().join("out");
    write_rgb(&input, 400, 400, ImageFormat::Jpeg);
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("00.webp"), b"stale").unwrap();

    process_inputs(&input, &out, &NormalizeParams::default()).unwrap();
    assert_eq!(output_dims(&out.join("00.webp")), (TARGET_WIDTH, TARGET_HEIGHT));
}
