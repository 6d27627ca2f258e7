use std::fs::{self, File};

use image::{ImageBuffer, ImageFormat, Luma, Rgb, Rgba};
use tempfile::tempdir;
use tiff::encoder::{TiffEncoder, colortype};

use super::{IoError, is_supported_path, read_image, write_image};
use crate::model::{LoadedImage, PlaneCount};

#[test]
fn png_and_bmp_decode_plane_mapping() {
    let dir = tempdir().expect("tempdir");
    let png_path = dir.path().join("color.png");
    let bmp_path = dir.path().join("gray.bmp");
    let mut color = ImageBuffer::<Rgb<u8>, Vec<u8>>::new(2, 1);
    color.put_pixel(0, 0, Rgb([255, 0, 0]));
    color.put_pixel(1, 0, Rgb([0, 255, 0]));
    color.save(&png_path).expect("save png");
    let gray = ImageBuffer::<Luma<u8>, Vec<u8>>::from_vec(2, 2, vec![0, 50, 100, 255])
        .expect("image");
    gray.save(&bmp_path).expect("save bmp");

    let png = read_image(&png_path).expect("read png");
    assert_eq!(png.plane_count(), PlaneCount::Triple);
    assert_eq!(png.samples(), &[255, 0, 0, 0, 255, 0]);
    assert_eq!(png.source(), Some(png_path.as_path()));

    let bmp = read_image(&bmp_path).expect("read bmp");
    assert_eq!((bmp.width(), bmp.height()), (2, 2));
}

#[test]
fn alpha_png_loads_as_three_planes() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("alpha.png");
    ImageBuffer::from_pixel(3, 3, Rgba([9_u8, 8, 7, 128]))
        .save(&path)
        .expect("save");
    let image = read_image(&path).expect("read");
    assert_eq!(image.plane_count(), PlaneCount::Triple);
    assert_eq!(&image.samples()[..3], &[9, 8, 7]);
}

#[test]
fn mislabeled_file_decodes_through_content_sniffing() {
    let dir = tempdir().expect("tempdir");
    let real = dir.path().join("real.png");
    let renamed = dir.path().join("photo.jpg");
    ImageBuffer::from_pixel(4, 4, Luma([77_u8]))
        .save_with_format(&real, ImageFormat::Png)
        .expect("save");
    fs::rename(&real, &renamed).expect("rename");
    let image = read_image(&renamed).expect("fallback decode");
    assert_eq!(image.samples(), &[77; 16]);
}

#[test]
fn float_tiff_uses_dedicated_reader() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("float.tiff");
    let file = File::create(&path).expect("create");
    let mut encoder = TiffEncoder::new(file).expect("encoder");
    encoder
        .write_image::<colortype::Gray32Float>(2, 2, &[0.0, 0.25, 0.5, 1.0])
        .expect("write");
    let image = read_image(&path).expect("read tiff");
    assert_eq!(image.plane_count(), PlaneCount::Single);
    assert_eq!(image.samples(), &[0, 64, 128, 255]);
}

#[test]
fn garbage_file_is_a_decode_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("noise.png");
    fs::write(&path, b"definitely not an image").expect("write");
    assert!(read_image(&path).is_err());
    assert!(read_image(dir.path().join("missing.png")).is_err());
}

#[test]
fn write_roundtrip_through_supported_extensions() {
    let dir = tempdir().expect("tempdir");
    let image = LoadedImage::from_gray(ImageBuffer::from_pixel(3, 2, Luma([120_u8])))
        .expect("image");
    for name in ["out.png", "out.bmp", "out.tiff", "out.gif"] {
        let path = dir.path().join(name);
        write_image(&path, &image).expect("write");
        let restored = read_image(&path).expect("read back");
        assert_eq!((restored.width(), restored.height()), (3, 2), "{name}");
    }
}

#[test]
fn unsupported_extension_errors() {
    let dir = tempdir().expect("tempdir");
    let image = LoadedImage::from_gray(ImageBuffer::from_pixel(1, 1, Luma([0_u8])))
        .expect("image");
    let error = write_image(dir.path().join("out.xyz"), &image).expect_err("must fail");
    assert!(matches!(error, IoError::UnsupportedFormat(ext) if ext == "xyz"));
    assert!(!is_supported_path(&dir.path().join("out.xyz")));
    assert!(is_supported_path(&dir.path().join("OUT.JPG")));
}
