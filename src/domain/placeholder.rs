use super::canvas::Canvas;
use super::image_request::ImageRequest;
use super::label_font::LabelFont;
use image::{ImageError, Rgb};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// ラベルの文字色。
pub const LABEL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("'{file_name}' のエンコードに失敗しました")]
    Encode {
        file_name: String,
        #[source]
        source: ImageError,
    },

    #[error("'{path}' への書き込みに失敗しました")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// プレースホルダー画像を生成して出力ディレクトリへ保存します。
#[derive(Debug)]
pub struct PlaceholderGenerator<'a> {
    output_dir: &'a Path,
    font: &'a LabelFont,
}

impl<'a> PlaceholderGenerator<'a> {
    pub fn new(output_dir: &'a Path, font: &'a LabelFont) -> Self {
        Self { output_dir, font }
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir
    }

    /// 背景色で塗りつぶしたキャンバスの中央にラベルを白で描画します。
    pub fn render(&self, request: &ImageRequest) -> Canvas {
        let mut canvas = Canvas::new(
            request.width(),
            request.height(),
            request.background().rgb(),
        );
        let bounds = self.font.measure(request.text());
        let origin = canvas.center_origin(&bounds);
        self.font
            .draw(&mut canvas, request.text(), origin, LABEL_COLOR);
        canvas
    }

    /// 画像を生成し、`<output_dir>/<file_name>` に保存します (既存のファイルは上書き)。
    ///
    /// # 戻り値
    /// * `Ok(PathBuf)`: 書き込んだファイルのパス。
    /// * `Err(GenerateError)`: エンコードまたは書き込みに失敗した場合。
    pub fn generate(&self, request: &ImageRequest) -> Result<PathBuf, GenerateError> {
        let canvas = self.render(request);
        let bytes = request
            .format()
            .encode(canvas.image())
            .map_err(|source| GenerateError::Encode {
                file_name: request.file_name().to_string(),
                source,
            })?;

        let path = self.output_dir.join(request.file_name());
        fs::write(&path, &bytes).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());

        println!("✓ Created {}", request.file_name());
        Ok(path)
    }
}
