//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! サイト用の画像一覧を順番に生成する処理フローを実装します。

use crate::cli::Args;
use crate::domain::image_request::{site_assets, ImageRequest};
use crate::domain::label_font::LabelFont;
use crate::domain::placeholder::PlaceholderGenerator;
use crate::error::AppError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// 出力先が指定されなかった場合に使うフォルダ名。
pub const IMAGES_DIR_NAME: &str = "images";

/// デフォルトの出力先 (クレートのマニフェストと同じ場所にある `images` フォルダ)。
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(IMAGES_DIR_NAME)
}

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(Vec<PathBuf>)`: すべての画像を書き込んだ場合。書き込んだファイルのパスを宣言順に返します。
/// * `Err(AppError)`: 最初に失敗した時点で中断します。それまでに書き込んだファイルは残ります。
pub fn run(args: Args) -> Result<Vec<PathBuf>, AppError> {
    let requests = site_assets()?;
    let output_dir = args.output_dir.unwrap_or_else(default_output_dir);
    let font = LabelFont::load(args.font_path.as_deref())?;

    let written = generate_all(&requests, &output_dir, &font)?;

    // 表示するフォルダ名は実際の出力先に合わせる
    let folder = output_dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(IMAGES_DIR_NAME);
    println!("\n✓ All images created successfully in the '{}' folder!", folder);

    Ok(written)
}

/// 画像の一覧を宣言順に1枚ずつ生成します。
pub fn generate_all(
    requests: &[ImageRequest],
    output_dir: &Path,
    font: &LabelFont,
) -> Result<Vec<PathBuf>, AppError> {
    // 1. 出力ディレクトリの準備
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|source| AppError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }
    debug!(
        "output dir: {}, fallback font: {}",
        output_dir.display(),
        font.is_fallback()
    );

    // 2. 1枚ずつ生成 (失敗したらそこで中断)
    let generator = PlaceholderGenerator::new(output_dir, font);
    let mut written = Vec::with_capacity(requests.len());
    for request in requests {
        written.push(generator.generate(request)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_output_dir_is_images_next_to_manifest() {
        let dir = default_output_dir();
        assert_eq!(dir.file_name().unwrap(), IMAGES_DIR_NAME);
        assert!(dir.parent().unwrap().join("Cargo.toml").is_file());
    }

    #[test]
    fn generate_all_creates_missing_output_directory() {
        let dir = tempdir().expect("Failed to create temp directory");
        let output = dir.path().join("nested").join("images");
        let requests = vec![ImageRequest::new("a.png", 8, 8, "red", "A").unwrap()];

        let written = generate_all(&requests, &output, &LabelFont::fallback()).unwrap();
        assert_eq!(written, vec![output.join("a.png")]);
        assert!(output.join("a.png").is_file());
    }

    #[test]
    fn generate_all_stops_at_first_failure_and_keeps_earlier_files() {
        let dir = tempdir().expect("Failed to create temp directory");
        // 2枚目の出力先をディレクトリにして書き込みを失敗させる
        fs::create_dir(dir.path().join("second.png")).unwrap();
        let requests = vec![
            ImageRequest::new("first.png", 8, 8, "red", "1").unwrap(),
            ImageRequest::new("second.png", 8, 8, "red", "2").unwrap(),
            ImageRequest::new("third.png", 8, 8, "red", "3").unwrap(),
        ];

        let res = generate_all(&requests, dir.path(), &LabelFont::fallback());
        assert!(matches!(res, Err(AppError::Generate(_))));
        assert!(dir.path().join("first.png").is_file());
        assert!(!dir.path().join("third.png").exists());
    }
}
