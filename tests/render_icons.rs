use std::fs;

use badge_renderer::{BadgeProfile, BadgeRenderer, Error, IconBatch, render_icon};
use image::ColorType;

#[test]
fn standard_batch_writes_all_icons() {
    let dir = tempfile::tempdir().unwrap();
    let icons_dir = dir.path().join("icons");
    let batch = IconBatch {
        directory: icons_dir.clone(),
        ..IconBatch::standard()
    };

    let written = batch.render(&mut BadgeRenderer::new()).unwrap();
    assert_eq!(written.len(), 3);

    for (icon, size) in written.iter().zip([16u32, 48, 128]) {
        assert_eq!(icon.path, icons_dir.join(format!("icon{size}.png")));
        assert_eq!(icon.size, size);

        let decoded = image::open(&icon.path).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgba8);
        assert_eq!((decoded.width(), decoded.height()), (size, size));
    }
}

#[test]
fn rendering_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icons/icon16.png");

    render_icon(16, &path).unwrap();
    let first = fs::read(&path).unwrap();
    render_icon(16, &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn sizes_do_not_interfere() {
    let dir = tempfile::tempdir().unwrap();
    let p16 = dir.path().join("a/icon16.png");
    let p48 = dir.path().join("b/icon48.png");

    render_icon(16, &p16).unwrap();
    let before = fs::read(&p16).unwrap();
    render_icon(48, &p48).unwrap();
    render_icon(128, dir.path().join("c/icon128.png")).unwrap();

    assert_eq!(fs::read(&p16).unwrap(), before);
    assert_eq!(image::open(&p48).unwrap().width(), 48);
}

#[test]
fn single_pixel_icon_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = render_icon(1, dir.path().join("icon1.png")).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [33, 150, 243, 255]);
}

#[test]
fn zero_size_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/icon0.png");

    let err = render_icon(0, &path).unwrap_err();
    assert!(matches!(err, Error::InvalidSize { size: 0, .. }));
    assert!(!path.exists());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = render_icon(16, blocker.join("icon16.png")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn badge_shape_at_128() {
    let dir = tempfile::tempdir().unwrap();
    let path = render_icon(128, dir.path().join("icon128.png")).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();

    // Outside the outer radius of 51 the canvas stays transparent.
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(64 + 52, 64).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(64 + 51, 64).0, [33, 150, 243, 230]);

    // Core is opaque badge blue.
    assert_eq!(img.get_pixel(64, 64).0, [33, 150, 243, 255]);

    // Highlight radius is round(30.6) = 31; its colour replaces the gradient.
    assert_eq!(img.get_pixel(64 + 25, 64).0, [100, 181, 246, 200]);
    assert_eq!(img.get_pixel(64 + 31, 64).0, [100, 181, 246, 200]);

    // Outside the highlight each ring keeps its own disc alpha:
    // round(255 * 40/51 * 0.9) = 180.
    assert_eq!(img.get_pixel(64 + 40, 64).0, [33, 150, 243, 180]);
}

#[test]
fn profile_file_changes_output() {
    let dir = tempfile::tempdir().unwrap();
    let profile_path = dir.path().join("badge.json");
    fs::write(&profile_path, r##"{"core": {"color": "#ff0000", "alpha": 255, "radiusRatio": 0.3}}"##)
        .unwrap();

    let profile = BadgeProfile::load(&profile_path).unwrap();
    let mut renderer = BadgeRenderer::from_profile(&profile).unwrap();
    let img = renderer.render(48).unwrap();
    assert_eq!(img.get_pixel(24, 24).0, [255, 0, 0, 255]);
}
