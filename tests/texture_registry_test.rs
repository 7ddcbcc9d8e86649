use image::{DynamicImage, Rgb, RgbImage};
use scene_ngin::{
    SceneError,
    data_structures::texture::{TextureHandle, TextureRegistry},
    resources::texture::{Channels, DecodedImage, mip_level_count},
};

use crate::common::test_utils::{FakeTextures, TempAssets, decoded_rgb, png, rgb_image};

mod common;

#[test]
fn decodes_rgb_and_rgba_images() {
    let rgb = DecodedImage::from_bytes(&png(&rgb_image(4, 2)), "rgb", false).unwrap();
    assert_eq!(rgb.channels, Channels::Rgb);
    assert_eq!((rgb.width, rgb.height), (4, 2));
    assert_eq!(rgb.data.len(), 4 * 2 * 3);

    let rgba = DecodedImage::from_bytes(&png(&DynamicImage::new_rgba8(3, 3)), "rgba", false)
        .unwrap();
    assert_eq!(rgba.channels, Channels::Rgba);
    assert_eq!(rgba.data.len(), 3 * 3 * 4);
}

#[test]
fn rejects_grayscale_images() {
    for (img, channels) in [
        (DynamicImage::new_luma8(2, 2), 1),
        (DynamicImage::new_luma_a8(2, 2), 2),
    ] {
        match DecodedImage::from_bytes(&png(&img), "gray", false) {
            Err(SceneError::UnsupportedChannels { channels: c, .. }) => assert_eq!(c, channels),
            other => panic!("expected unsupported channels, got {other:?}"),
        }
    }
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let result = DecodedImage::from_bytes(b"definitely not an image", "junk", false);
    assert!(matches!(result, Err(SceneError::Decode { .. })));
}

#[test]
fn flips_rows_when_asked() {
    let mut img = RgbImage::new(1, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(0, 1, Rgb([0, 0, 255]));
    let img = DynamicImage::ImageRgb8(img);

    let kept = DecodedImage::from_image(img.clone(), "kept", false).unwrap();
    assert_eq!(&kept.data[..3], &[255, 0, 0]);

    let flipped = DecodedImage::from_image(img, "flipped", true).unwrap();
    assert_eq!(&flipped.data[..3], &[0, 0, 255]);
}

#[test]
fn rgb_expands_to_opaque_rgba() {
    let rgba = decoded_rgb(2, 2).to_rgba();
    assert_eq!(rgba.dimensions(), (2, 2));
    assert!(rgba.pixels().all(|px| px.0[3] == u8::MAX));
}

#[test]
fn mip_chain_halves_down_to_one_pixel() {
    let chain = decoded_rgb(8, 4).mip_chain();
    let sizes: Vec<_> = chain.iter().map(|level| level.dimensions()).collect();
    assert_eq!(sizes, vec![(8, 4), (4, 2), (2, 1), (1, 1)]);
    assert_eq!(mip_level_count(8, 4), chain.len() as u32);
    assert_eq!(mip_level_count(1, 1), 1);

    let odd = decoded_rgb(5, 3).mip_chain();
    assert_eq!(odd.len(), 3);
    assert_eq!(odd.last().map(|level| level.dimensions()), Some((1, 1)));
    assert_eq!(mip_level_count(5, 3), odd.len() as u32);
}

#[test]
fn loads_supported_files_and_registers_each_once() {
    let assets = TempAssets::new("load-supported");
    let rgb = assets.write("rgb.png", &png(&rgb_image(2, 2)));
    let rgba = assets.write("rgba.png", &png(&DynamicImage::new_rgba8(2, 2)));
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(16);

    assert_eq!(registry.load_texture(&mut backend, &rgb, "a", true).unwrap(), 0);
    assert_eq!(registry.load_texture(&mut backend, &rgba, "b", true).unwrap(), 1);

    assert_eq!(registry.len(), 2);
    assert_eq!(backend.uploads.len(), 2);
    let a = registry.find_handle("a").unwrap();
    let b = registry.find_handle("b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn unsupported_file_leaves_registry_unchanged() {
    let assets = TempAssets::new("load-gray");
    let gray = assets.write("gray.png", &png(&DynamicImage::new_luma8(2, 2)));
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(16);
    registry.insert(&mut backend, &decoded_rgb(1, 1), "first").unwrap();

    let result = registry.load_texture(&mut backend, &gray, "gray", true);

    assert!(matches!(result, Err(SceneError::UnsupportedChannels { channels: 1, .. })));
    assert_eq!(registry.len(), 1);
    assert_eq!(backend.uploads.len(), 1);
    assert_eq!(registry.find_unit("gray"), None);
}

#[test]
fn missing_file_is_an_io_error() {
    let assets = TempAssets::new("load-missing");
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(16);

    let result = registry.load_texture(&mut backend, &assets.root().join("nope.png"), "x", true);

    assert!(matches!(result, Err(SceneError::Io { .. })));
    assert!(registry.is_empty());
}

#[test]
fn backend_failure_leaves_registry_unchanged() {
    let mut backend = FakeTextures::failing();
    let mut registry = TextureRegistry::new(16);

    let result = registry.insert(&mut backend, &decoded_rgb(1, 1), "a");

    assert!(matches!(result, Err(SceneError::Backend(_))));
    assert!(registry.is_empty());
}

#[test]
fn lookups_return_none_for_unknown_tags() {
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(16);
    assert_eq!(registry.find_handle("wood"), None);
    assert_eq!(registry.find_unit("wood"), None);

    for tag in ["street", "wall", "wood"] {
        registry.insert(&mut backend, &decoded_rgb(1, 1), tag).unwrap();
    }

    assert_eq!(registry.find_unit("street"), Some(0));
    assert_eq!(registry.find_unit("wood"), Some(2));
    assert_eq!(registry.find_handle("wall"), Some(registry.entries()[1].handle));
    assert_eq!(registry.find_unit("Wood"), None);
    assert_eq!(registry.find_handle(""), None);
}

#[test]
fn duplicate_tags_are_rejected() {
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(16);
    registry.insert(&mut backend, &decoded_rgb(1, 1), "wood").unwrap();

    let result = registry.insert(&mut backend, &decoded_rgb(2, 2), "wood");

    assert!(matches!(result, Err(SceneError::DuplicateTexture(tag)) if tag == "wood"));
    assert_eq!(registry.len(), 1);
    assert_eq!(backend.uploads.len(), 1);
}

#[test]
fn stops_at_the_texture_unit_limit() {
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(2);
    registry.insert(&mut backend, &decoded_rgb(1, 1), "a").unwrap();
    registry.insert(&mut backend, &decoded_rgb(1, 1), "b").unwrap();

    let result = registry.insert(&mut backend, &decoded_rgb(1, 1), "c");

    assert!(matches!(result, Err(SceneError::TextureUnitsExhausted { max: 2 })));
    assert_eq!(registry.len(), 2);
    assert_eq!(backend.uploads.len(), 2);
}

#[test]
fn bind_all_binds_units_in_insertion_order() {
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(16);
    for tag in ["a", "b", "c"] {
        registry.insert(&mut backend, &decoded_rgb(1, 1), tag).unwrap();
    }

    assert_eq!(registry.bind_all(&mut backend), 3);

    let expected: Vec<(u32, TextureHandle)> = registry
        .entries()
        .iter()
        .enumerate()
        .map(|(unit, entry)| (unit as u32, entry.handle))
        .collect();
    assert_eq!(backend.bound, expected);
    assert!(registry.is_bound(2));
    assert!(!registry.is_bound(3));
}

#[test]
fn release_all_is_idempotent() {
    let mut backend = FakeTextures::default();
    let mut registry = TextureRegistry::new(16);
    for tag in ["a", "b"] {
        registry.insert(&mut backend, &decoded_rgb(1, 1), tag).unwrap();
    }
    registry.bind_all(&mut backend);
    let handles: Vec<_> = registry.entries().iter().map(|e| e.handle).collect();

    assert_eq!(registry.release_all(&mut backend), 2);
    assert_eq!(registry.release_all(&mut backend), 0);

    assert_eq!(backend.released, handles);
    assert!(registry.is_empty());
    assert!(!registry.is_bound(0));
}
