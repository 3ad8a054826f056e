use clap::Parser;
use placeholder_assets::cli::Args;
use placeholder_assets::workflow;
use std::error::Error;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // コマンドライン引数を解析します
    let args = Args::parse();

    if let Err(e) = workflow::run(args) {
        // 原因をたどってすべて表示する
        eprintln!("エラー: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  原因: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
