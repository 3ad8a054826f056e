use crate::domain::image_request::RequestError;
use crate::domain::label_font::FontError;
use crate::domain::placeholder::GenerateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("出力ディレクトリ '{path}' を作成できません")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("画像の指定が不正です")]
    Request(#[from] RequestError),

    #[error("フォントの読み込みに失敗しました")]
    Font(#[from] FontError),

    #[error("画像の生成に失敗しました")]
    Generate(#[from] GenerateError),
}
