use super::color::{BackgroundColor, ColorError};
use super::output_format::{FormatError, OutputFormat};
use std::path::{Component, Path};
use thiserror::Error;

/// 1枚のプレースホルダー画像の生成要求。
///
/// `new` コンストラクタを通じてのみ生成でき、その際に以下が保証されます。
/// - 幅と高さが正の値であること
/// - ファイル名がディレクトリを含まない単一のファイル名であること
/// - 拡張子から出力形式が決まること
/// - 背景色が解釈できること
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    file_name: String,
    width: u32,
    height: u32,
    background: BackgroundColor,
    format: OutputFormat,
    text: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("画像サイズは正の値である必要があります: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("無効なファイル名です: '{0}'")]
    InvalidFileName(String),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

impl ImageRequest {
    pub fn new(
        file_name: impl Into<String>,
        width: u32,
        height: u32,
        background: &str,
        text: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let file_name = file_name.into();

        if width == 0 || height == 0 {
            return Err(RequestError::InvalidDimensions { width, height });
        }
        if !is_plain_file_name(&file_name) {
            return Err(RequestError::InvalidFileName(file_name));
        }
        let format = OutputFormat::from_file_name(&file_name)?;
        let background = BackgroundColor::parse(background)?;

        Ok(Self {
            file_name,
            width,
            height,
            background,
            format,
            text: text.into(),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    pub fn background(&self) -> BackgroundColor {
        self.background
    }
    pub fn format(&self) -> OutputFormat {
        self.format
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

// 出力ディレクトリの外へ書き出さないよう、通常のファイル名1要素だけを許可する
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// サイトで使用する画像の一覧 (ファイル名, 幅, 高さ, 背景色, ラベル)。
pub const SITE_ASSETS: [(&str, u32, u32, &str, &str); 6] = [
    ("hero.jpg", 800, 500, "#2196F3", "Software Development"),
    ("project1.jpg", 500, 350, "#FF9800", "Billing Software"),
    ("project2.jpg", 500, 350, "#4CAF50", "Web Automation"),
    ("project3.jpg", 500, 350, "#9C27B0", "E-Commerce Platform"),
    ("project4.jpg", 500, 350, "#F44336", "Task Management"),
    ("logo.png", 150, 150, "#000000", "NNK"),
];

/// `SITE_ASSETS` を宣言順に `ImageRequest` へ変換します。
pub fn site_assets() -> Result<Vec<ImageRequest>, RequestError> {
    SITE_ASSETS
        .iter()
        .map(|&(file_name, width, height, color, text)| {
            ImageRequest::new(file_name, width, height, color, text)
        })
        .collect()
}
