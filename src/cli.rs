use clap::Parser;
use std::path::PathBuf;

/// Webサイト用のプレースホルダー画像 (背景色 + 中央のラベル) を生成するツール
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 画像の出力先フォルダのパス (オプション: デフォルトはクレート直下の images フォルダ)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// ラベルに使うTTF/OTFフォントファイルのパス (オプション: デフォルトは arial.ttf を検索し、なければ組み込みフォント)
    #[arg(short, long)]
    pub font_path: Option<PathBuf>,
}
