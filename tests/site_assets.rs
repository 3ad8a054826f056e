use image::{GenericImageView, ImageFormat, Rgb};
use placeholder_assets::cli::Args;
use placeholder_assets::domain::image_request::{site_assets, SITE_ASSETS};
use placeholder_assets::domain::label_font::LabelFont;
use placeholder_assets::workflow::{self, generate_all};
use std::fs;
use tempfile::tempdir;

fn close_to(actual: &Rgb<u8>, expected: Rgb<u8>, tolerance: u8) -> bool {
    actual
        .0
        .iter()
        .zip(expected.0)
        .all(|(a, e)| a.abs_diff(e) <= tolerance)
}

/// 6枚すべてが要求どおりのサイズ・形式・背景色で書き出されることを確認します。
#[test]
fn run_writes_every_site_asset() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir().expect("Failed to create temp directory");
    let output = dir.path().join("images");

    let written = workflow::run(Args {
        output_dir: Some(output.clone()),
        font_path: None,
    })
    .expect("run should succeed");
    assert_eq!(written.len(), SITE_ASSETS.len());

    for (request, path) in site_assets().unwrap().iter().zip(&written) {
        assert_eq!(path, &output.join(request.file_name()));
        let bytes = fs::read(path).unwrap();
        assert!(!bytes.is_empty(), "{} is empty", request.file_name());

        let expected_format = if request.file_name().ends_with(".png") {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        };
        assert_eq!(image::guess_format(&bytes).unwrap(), expected_format);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), request.dimensions());

        let rgb = decoded.to_rgb8();
        let tolerance = if expected_format == ImageFormat::Png { 0 } else { 8 };
        assert!(
            close_to(rgb.get_pixel(0, 0), request.background().rgb(), tolerance),
            "{}: corner {:?} vs {}",
            request.file_name(),
            rgb.get_pixel(0, 0),
            request.background()
        );
    }
}

/// フォールバックフォントでもロゴに白いラベルが描かれることを確認します。
#[test]
fn logo_has_black_corners_and_white_label_with_fallback_font() {
    let dir = tempdir().expect("Failed to create temp directory");
    let requests = site_assets().unwrap();
    let logo: Vec<_> = requests
        .into_iter()
        .filter(|r| r.file_name() == "logo.png")
        .collect();

    let written = generate_all(&logo, dir.path(), &LabelFont::fallback()).unwrap();
    let image = image::open(&written[0]).unwrap().to_rgb8();

    assert_eq!(image.dimensions(), (150, 150));
    for (x, y) in [(0, 0), (149, 0), (0, 149), (149, 149)] {
        assert_eq!(*image.get_pixel(x, y), Rgb([0, 0, 0]));
    }
    let white = image
        .enumerate_pixels()
        .filter(|(_, _, p)| **p == Rgb([255, 255, 255]))
        .collect::<Vec<_>>();
    assert!(!white.is_empty());
    // ラベルは中央付近に収まる
    assert!(white
        .iter()
        .all(|(x, y, _)| (40..110).contains(x) && (55..95).contains(y)));
}

/// 同じ要求を2回生成しても、サイズと形式は変わらないことを確認します。
#[test]
fn rerun_overwrites_with_same_dimensions_and_format() {
    let dir = tempdir().expect("Failed to create temp directory");
    let requests = site_assets().unwrap();
    let font = LabelFont::fallback();

    let first = generate_all(&requests, dir.path(), &font).unwrap();
    let before: Vec<_> = first
        .iter()
        .map(|p| {
            let bytes = fs::read(p).unwrap();
            (
                image::guess_format(&bytes).unwrap(),
                image::load_from_memory(&bytes).unwrap().dimensions(),
            )
        })
        .collect();

    let second = generate_all(&requests, dir.path(), &font).unwrap();
    assert_eq!(first, second);
    for (path, expected) in second.iter().zip(before) {
        let bytes = fs::read(path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), expected.0);
        assert_eq!(
            image::load_from_memory(&bytes).unwrap().dimensions(),
            expected.1
        );
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), SITE_ASSETS.len());
}
