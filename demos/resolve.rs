//! 用于演示 `lx-source` 库的核心功能。
//!
//! ## 如何运行
//!
//! ```bash
//! cargo run --package lx_source_rs --example resolve -- <songmid> [128k|320k|flac]
//! ```

use lx_source_rs::{MusicSource, NanciSource, Quality, Track, error::Result, load_source_config};

use tracing::{Level, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut args = std::env::args().skip(1);
    // 没有传参时使用一首默认歌曲作为示例。
    let song_mid = args.next().unwrap_or_else(|| "00126fAV2ZKaOd".to_string());
    let quality = args.next().unwrap_or_else(|| Quality::Standard.to_string());

    let config = load_source_config()?;
    let source = NanciSource::with_config(config)?;
    info!(
        "使用音源 '{}' ({}) 解析 {} @ {}",
        source.info().name,
        source.info().version,
        song_mid,
        quality
    );

    let track = Track::from_id(&song_mid);
    match source.get_music_url(&track, &quality).await {
        Ok(url) => println!("{url}"),
        Err(e) => error!("获取播放链接失败: {}", e),
    }

    Ok(())
}
