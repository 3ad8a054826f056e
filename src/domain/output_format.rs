use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbImage};
use std::path::Path;
use thiserror::Error;

/// JPEG 出力時の品質。
pub const JPEG_QUALITY: u8 = 90;

/// 出力ファイルのエンコード形式。ファイル名の拡張子から決まります。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg { quality: u8 },
    Png,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// 拡張子がない、または対応していない拡張子の場合。
    #[error("ファイル '{0}' の拡張子には対応していません (対応: .jpg, .jpeg, .png)")]
    Unsupported(String),
}

impl OutputFormat {
    /// ファイル名の拡張子 (大文字小文字を区別しない) から出力形式を判定します。
    pub fn from_file_name(file_name: &str) -> Result<Self, FormatError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Ok(OutputFormat::Jpeg {
                quality: JPEG_QUALITY,
            }),
            Some("png") => Ok(OutputFormat::Png),
            _ => Err(FormatError::Unsupported(file_name.to_string())),
        }
    }

    /// RGB 画像をこの形式でエンコードし、バイト列として返します。
    pub fn encode(&self, image: &RgbImage) -> Result<Vec<u8>, ImageError> {
        let mut bytes = Vec::new();
        let (width, height) = image.dimensions();
        match *self {
            OutputFormat::Jpeg { quality } => {
                JpegEncoder::new_with_quality(&mut bytes, quality).write_image(
                    image.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )?;
            }
            OutputFormat::Png => {
                PngEncoder::new(&mut bytes).write_image(
                    image.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )?;
            }
        }
        Ok(bytes)
    }
}
