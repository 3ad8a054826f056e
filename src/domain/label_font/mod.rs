//! ラベル描画用フォントの選択・計測・描画。
//!
//! 優先フォント (`arial.ttf`) をシステムのフォントディレクトリから探し、
//! 見つからない場合は組み込みのビットマップフォントに切り替えます。

pub mod bitmap;
pub mod truetype;

use crate::domain::canvas::Canvas;
use bitmap::BitmapFace;
use image::Rgb;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use truetype::TrueTypeFace;
use walkdir::WalkDir;

/// 優先して使用するフォントのファイル名。
pub const PREFERRED_FONT: &str = "arial.ttf";
/// TrueType フォントの描画サイズ (ピクセル)。
pub const FONT_SIZE_PX: f32 = 32.0;
/// ビットマップフォントの拡大倍率。
pub const BITMAP_SCALE: u32 = 2;

/// 描画したテキストの外接矩形。
///
/// `left` / `top` はレイアウト原点 (行の左上) からのインクの開始位置です。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error)]
pub enum FontError {
    #[error("フォントファイル '{0}' が見つかりません")]
    NotFound(PathBuf),

    #[error("フォントファイル '{path}' を読み込めません")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("フォントファイル '{0}' を解析できません")]
    Invalid(PathBuf),
}

#[derive(Debug, Clone)]
pub enum LabelFont {
    TrueType(TrueTypeFace),
    Bitmap(BitmapFace),
}

impl LabelFont {
    /// ラベル描画に使うフォントを決定します。
    ///
    /// # 引数
    /// * `explicit`: 明示的に指定されたフォントファイル。
    ///   - `Some(path)`: そのファイルを読み込みます。存在しない場合もエラーになります。
    ///   - `None`: `PREFERRED_FONT` をカレントディレクトリとシステムのフォントディレクトリから探します。
    ///     見つからなければ組み込みのビットマップフォントを使用します。
    ///
    /// # 戻り値
    /// * `Err(FontError)`: 指定または発見したファイルが読めない、あるいはフォントとして解析できない場合。
    ///   フォールバックするのは「見つからない」場合だけです。
    pub fn load(explicit: Option<&Path>) -> Result<Self, FontError> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(FontError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match find_font(PREFERRED_FONT, &system_font_dirs()) {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!(
                        "{} not found, falling back to the built-in bitmap font",
                        PREFERRED_FONT
                    );
                    Ok(Self::fallback())
                }
            },
        }
    }

    /// フォントファイルを読み込み、`FONT_SIZE_PX` で描画する TrueType フォントを作成します。
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let bytes = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let face = TrueTypeFace::from_bytes(bytes, FONT_SIZE_PX)
            .ok_or_else(|| FontError::Invalid(path.to_path_buf()))?;
        debug!("using font {}", path.display());
        Ok(LabelFont::TrueType(face))
    }

    pub fn fallback() -> Self {
        LabelFont::Bitmap(BitmapFace::new(BITMAP_SCALE))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LabelFont::Bitmap(_))
    }

    pub fn measure(&self, text: &str) -> TextBounds {
        match self {
            LabelFont::TrueType(face) => face.measure(text),
            LabelFont::Bitmap(face) => face.measure(text),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        match self {
            LabelFont::TrueType(face) => face.draw(canvas, text, origin, color),
            LabelFont::Bitmap(face) => face.draw(canvas, text, origin, color),
        }
    }
}

/// フォントを探すディレクトリの一覧 (存在しないものも含む)。
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Some(home) = env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    if let Some(windir) = env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }
    dirs
}

/// `name` のフォントファイルを探します。
///
/// まず `name` をそのままパスとして確認し、次に `dirs` の各ディレクトリを再帰的に走査します。
/// ファイル名の比較は大文字小文字を区別しません (`Arial.ttf` も一致します)。
pub fn find_font(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }

    dirs.iter().find_map(|dir| {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .find(|entry| {
                entry.file_type().is_file()
                    && entry
                        .file_name()
                        .to_str()
                        .map_or(false, |f| f.eq_ignore_ascii_case(name))
            })
            .map(|entry| entry.into_path())
    })
}
