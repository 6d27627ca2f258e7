use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage};
use imageproc::contrast::{ThresholdType, threshold};
use imageproc::filter::filter3x3;
use imageproc::morphology::{Mask, grayscale_dilate, grayscale_erode};
use serde_json::json;

use super::filter::gaussian_taps;
use super::{
    Arity, InvalidParameter, OpInputs, OpOutput, OpsError, ParamSpec, execute_operation,
    list_operations,
};
use crate::model::{LoadedImage, PlaneCount};

fn gradient_rgb(width: u32, height: u32) -> LoadedImage {
    let buffer: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 2) as u8, (y * 5) as u8, ((x + y) % 256) as u8])
    });
    LoadedImage::from_rgb(buffer).expect("rgb")
}

fn uniform_gray(width: u32, height: u32, value: u8) -> LoadedImage {
    LoadedImage::from_gray(ImageBuffer::from_pixel(width, height, Luma([value]))).expect("gray")
}

fn textured_gray(width: u32, height: u32) -> GrayImage {
    ImageBuffer::from_fn(width, height, |x, y| Luma([((x * 37 + y * 23) % 256) as u8]))
}

fn image_output(output: OpOutput) -> LoadedImage {
    match output {
        OpOutput::Image(image) => image,
        OpOutput::Histogram(_) => panic!("expected an image output"),
    }
}

#[test]
fn contains_required_operations() {
    let names = list_operations()
        .into_iter()
        .map(|schema| schema.name)
        .collect::<Vec<_>>();
    for expected in [
        "color.grayscale",
        "threshold.binary",
        "arith.brighten",
        "logic.and",
        "morphology.erode",
        "filter.gaussian",
        "edges.canny",
        "histogram.equalize",
        "histogram.compute",
    ] {
        assert!(names.contains(&expected.to_string()), "{expected}");
    }
}

#[test]
fn grayscale_uses_luma_weights() {
    let original = gradient_rgb(100, 50);
    let output = image_output(
        execute_operation("color.grayscale", OpInputs::Single(&original), &json!({}))
            .expect("grayscale"),
    );
    assert_eq!((output.width(), output.height()), (100, 50));
    assert_eq!(output.plane_count(), PlaneCount::Single);

    let rgb = original.to_rgb();
    for (pixel, gray) in rgb.pixels().zip(output.samples()) {
        assert_eq!(pixel.to_luma().0[0], *gray);
    }
}

#[test]
fn binary_threshold_saturates_bright_pixels() {
    let original = uniform_gray(8, 8, 200);
    let output = image_output(
        execute_operation(
            "threshold.binary",
            OpInputs::Single(&original),
            &json!({"threshold": 127}),
        )
        .expect("threshold"),
    );
    assert!(output.samples().iter().all(|value| *value == 255));

    let dark = uniform_gray(2, 2, 127);
    let output = image_output(
        execute_operation(
            "threshold.binary",
            OpInputs::Single(&dark),
            &json!({"threshold": 127}),
        )
        .expect("threshold"),
    );
    assert!(output.samples().iter().all(|value| *value == 0));
}

#[test]
fn and_with_complement_is_zero() {
    let original = gradient_rgb(16, 9);
    let complement = image_output(
        execute_operation("logic.not", OpInputs::Single(&original), &json!({})).expect("not"),
    );
    let output = image_output(
        execute_operation(
            "logic.and",
            OpInputs::Pair(&original, &complement),
            &json!({}),
        )
        .expect("and"),
    );
    assert!(output.samples().iter().all(|value| *value == 0));

    let xor = image_output(
        execute_operation(
            "logic.xor",
            OpInputs::Pair(&original, &complement),
            &json!({}),
        )
        .expect("xor"),
    );
    assert!(xor.samples().iter().all(|value| *value == 255));
}

#[test]
fn pair_operations_reject_single_input_and_shape_mismatch() {
    let original = uniform_gray(4, 4, 10);
    let error = execute_operation("arith.add", OpInputs::Single(&original), &json!({}))
        .expect_err("needs two inputs");
    assert!(matches!(error, OpsError::ArityMismatch { expected: 2, .. }));

    let other = uniform_gray(4, 5, 10);
    let error = execute_operation("logic.or", OpInputs::Pair(&original, &other), &json!({}))
        .expect_err("shape mismatch");
    assert!(matches!(error, OpsError::ShapeMismatch { .. }));
}

#[test]
fn brightness_saturates_at_bounds() {
    let original = uniform_gray(3, 3, 240);
    let brighter = image_output(
        execute_operation(
            "arith.brighten",
            OpInputs::Single(&original),
            &json!({"delta": 50}),
        )
        .expect("brighten"),
    );
    assert!(brighter.samples().iter().all(|value| *value == 255));

    let darker = image_output(
        execute_operation(
            "arith.darken",
            OpInputs::Single(&original),
            &json!({"delta": 1000}),
        )
        .expect("darken"),
    );
    assert!(darker.samples().iter().all(|value| *value == 0));
}

#[test]
fn erosion_and_dilation_follow_square_neighborhood() {
    let mut buffer = ImageBuffer::from_pixel(7, 7, Luma([0_u8]));
    buffer.put_pixel(3, 3, Luma([200]));
    let spike = LoadedImage::from_gray(buffer).expect("spike");

    let dilated = image_output(
        execute_operation(
            "morphology.dilate",
            OpInputs::Single(&spike),
            &json!({"size": 3}),
        )
        .expect("dilate"),
    );
    let lit = dilated.samples().iter().filter(|value| **value == 200).count();
    assert_eq!(lit, 9);

    let eroded = image_output(
        execute_operation("morphology.erode", OpInputs::Single(&dilated), &json!({"size": 3}))
            .expect("erode"),
    );
    assert_eq!(eroded.samples(), spike.samples());
}

#[test]
fn smoothing_filters_preserve_flat_images() {
    let flat = uniform_gray(6, 4, 90);
    for name in ["filter.gaussian", "filter.sharpen"] {
        let output = image_output(
            execute_operation(name, OpInputs::Single(&flat), &json!({})).expect("filter"),
        );
        assert!(
            output.samples().iter().all(|value| value.abs_diff(90) <= 2),
            "{name}"
        );
    }

    let canny = image_output(
        execute_operation("edges.canny", OpInputs::Single(&flat), &json!({})).expect("canny"),
    );
    assert!(canny.samples().iter().all(|value| *value == 0));
}

#[test]
fn morphology_matches_square_mask_filters() {
    let buffer = textured_gray(13, 9);
    let textured = LoadedImage::from_gray(buffer.clone()).expect("textured");
    for (size, radius) in [(3, 1_u8), (5, 2)] {
        let eroded = image_output(
            execute_operation(
                "morphology.erode",
                OpInputs::Single(&textured),
                &json!({"size": size}),
            )
            .expect("erode"),
        );
        let expected = grayscale_erode(&buffer, &Mask::square(radius));
        assert_eq!(eroded.samples(), expected.as_raw().as_slice(), "erode {size}");

        let dilated = image_output(
            execute_operation(
                "morphology.dilate",
                OpInputs::Single(&textured),
                &json!({"size": size}),
            )
            .expect("dilate"),
        );
        let expected = grayscale_dilate(&buffer, &Mask::square(radius));
        assert_eq!(dilated.samples(), expected.as_raw().as_slice(), "dilate {size}");
    }
}

#[test]
fn threshold_and_sharpen_match_library_filters() {
    let buffer = textured_gray(11, 7);
    let textured = LoadedImage::from_gray(buffer.clone()).expect("textured");

    let binary = image_output(
        execute_operation(
            "threshold.binary",
            OpInputs::Single(&textured),
            &json!({"threshold": 90}),
        )
        .expect("threshold"),
    );
    let expected = threshold(&buffer, 90, ThresholdType::Binary);
    assert_eq!(binary.samples(), expected.as_raw().as_slice());

    let sharpened = image_output(
        execute_operation("filter.sharpen", OpInputs::Single(&textured), &json!({}))
            .expect("sharpen"),
    );
    let kernel = [0.0_f32, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];
    let expected = filter3x3::<_, f32, u8>(&buffer, &kernel);
    assert_eq!(sharpened.samples(), expected.as_raw().as_slice());
}

#[test]
fn gaussian_kernel_size_sets_the_footprint() {
    let taps = gaussian_taps(5);
    assert_eq!(taps.len(), 5);
    assert!((taps.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    assert!(taps[2] > taps[1] && taps[1] > taps[0]);
    assert_eq!(gaussian_taps(1), vec![1.0]);

    let textured = LoadedImage::from_gray(textured_gray(9, 9)).expect("textured");
    let identity = image_output(
        execute_operation(
            "filter.gaussian",
            OpInputs::Single(&textured),
            &json!({"size": 1}),
        )
        .expect("gaussian"),
    );
    assert_eq!(identity.samples(), textured.samples());

    let mut buffer = ImageBuffer::from_pixel(15, 15, Luma([0_u8]));
    buffer.put_pixel(7, 7, Luma([255]));
    let spike = LoadedImage::from_gray(buffer).expect("spike");
    let blur = |size: i64| {
        image_output(
            execute_operation(
                "filter.gaussian",
                OpInputs::Single(&spike),
                &json!({"size": size}),
            )
            .expect("gaussian"),
        )
    };
    let narrow = blur(3);
    let wide = blur(9);
    let two_columns_over = 7 * 15 + 9;
    assert_eq!(narrow.samples()[two_columns_over], 0);
    assert!(wide.samples()[two_columns_over] > 0);
}

#[test]
fn histogram_matches_library_counts() {
    let buffer = textured_gray(10, 6);
    let textured = LoadedImage::from_gray(buffer.clone()).expect("textured");
    let output = execute_operation("histogram.compute", OpInputs::Single(&textured), &json!({}))
        .expect("histogram");
    let OpOutput::Histogram(histogram) = output else {
        panic!("expected histogram");
    };
    let expected = imageproc::stats::histogram(&buffer);
    assert_eq!(histogram.planes.len(), 1);
    assert_eq!(histogram.planes[0], expected.channels[0].to_vec());
}

#[test]
fn histogram_counts_every_plane() {
    let original = gradient_rgb(10, 10);
    let output = execute_operation("histogram.compute", OpInputs::Single(&original), &json!({}))
        .expect("histogram");
    let OpOutput::Histogram(histogram) = output else {
        panic!("expected histogram");
    };
    assert_eq!(histogram.planes.len(), 3);
    for bins in &histogram.planes {
        assert_eq!(bins.len(), 256);
        assert_eq!(bins.iter().sum::<u32>(), 100);
    }
}

#[test]
fn equalization_spreads_a_narrow_range() {
    let buffer = ImageBuffer::from_fn(16, 16, |x, _| Luma([100 + (x % 4) as u8]));
    let narrow = LoadedImage::from_gray(buffer).expect("narrow");
    let output = image_output(
        execute_operation("histogram.equalize", OpInputs::Single(&narrow), &json!({}))
            .expect("equalize"),
    );
    let max = output.samples().iter().copied().max().unwrap_or(0);
    assert_eq!(max, 255);
}

#[test]
fn operations_leave_inputs_untouched() {
    let original = gradient_rgb(12, 7);
    let snapshot = original.clone();
    for schema in list_operations() {
        let inputs = match schema.arity {
            Arity::Single => OpInputs::Single(&original),
            Arity::Pair => OpInputs::Pair(&original, &original),
        };
        execute_operation(&schema.name, inputs, &json!({})).expect("operation");
        assert_eq!(original, snapshot, "{}", schema.name);
    }
}

#[test]
fn prompt_text_resolution_falls_back_and_clamps() {
    let param = ParamSpec::integer("threshold", "level", 0, 255, 127);
    assert_eq!(param.resolve_text(" 42 "), (42, None));

    let (value, warning) = param.resolve_text("bright");
    assert_eq!(value, 127);
    assert!(matches!(warning, Some(InvalidParameter::NotNumeric { .. })));

    let (value, warning) = param.resolve_text("400");
    assert_eq!(value, 255);
    assert!(matches!(
        warning,
        Some(InvalidParameter::OutOfRange { clamped: 255, .. })
    ));

    let kernel = ParamSpec::odd_integer("size", "kernel", 1, 31, 3);
    let (value, warning) = kernel.resolve_text("4");
    assert_eq!(value, 5);
    assert!(matches!(
        warning,
        Some(InvalidParameter::EvenKernel { adjusted: 5, .. })
    ));
    assert_eq!(kernel.resolve_text("64").0, 31);
}
