use image::{ImageBuffer, Luma, Rgb};

use super::{DisplayConfig, fit_within, render, render_with};
use crate::model::LoadedImage;

fn checkerboard(width: u32, height: u32) -> LoadedImage {
    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([255_u8, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    LoadedImage::from_rgb(buffer).expect("checkerboard")
}

#[test]
fn fit_prefers_width_when_it_fits() {
    assert_eq!(fit_within(200, 100, 400, 300), (400, 200));
    assert_eq!(fit_within(100, 200, 400, 300), (150, 300));
    assert_eq!(fit_within(1000, 1, 10, 10), (10, 1));
    assert_eq!(fit_within(1, 1000, 10, 10), (1, 10));
}

#[test]
fn downscaling_respects_box_and_aspect() {
    for (width, height) in [(640, 480), (333, 999), (1920, 1080), (50, 49)] {
        for (box_w, box_h) in [(320, 240), (100, 300), (37, 19)] {
            let (new_w, new_h) = fit_within(width, height, box_w, box_h);
            assert!(new_w <= box_w && new_h <= box_h);
            assert!(new_w.max(new_h) <= box_w.max(box_h));
            let expected_h = f64::from(new_w) * f64::from(height) / f64::from(width);
            let expected_w = f64::from(new_h) * f64::from(width) / f64::from(height);
            assert!(
                (expected_h - f64::from(new_h)).abs() <= 1.0
                    || (expected_w - f64::from(new_w)).abs() <= 1.0
            );
        }
    }
}

#[test]
fn zero_target_uses_fallback_size() {
    let image = checkerboard(80, 60);
    let bitmap = render(&image, 0, 200).expect("render");
    assert_eq!(bitmap.size(), [400, 300]);

    let config = DisplayConfig {
        fallback_width: 40,
        fallback_height: 40,
    };
    let bitmap = render_with(&config, &image, 120, 0).expect("render");
    assert_eq!(bitmap.size(), [40, 30]);
}

#[test]
fn render_is_repeatable_and_non_mutating() {
    let image = checkerboard(31, 17);
    let snapshot = image.clone();
    let first = render(&image, 64, 64).expect("render");
    let second = render(&image, 64, 64).expect("render");
    assert_eq!(first, second);
    assert_eq!(image, snapshot);
    assert_eq!(first.rgb.len(), first.width * first.height * 3);
}

#[test]
fn single_plane_expands_to_rgb() {
    let image =
        LoadedImage::from_gray(ImageBuffer::from_pixel(4, 4, Luma([77_u8]))).expect("gray");
    let bitmap = render(&image, 8, 8).expect("render");
    assert_eq!(bitmap.size(), [8, 8]);
    assert!(bitmap.rgb.chunks_exact(3).all(|pixel| pixel == [77, 77, 77]));
}
