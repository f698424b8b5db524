//! 音源模块
//!
//! 该模块定义了宿主应用与音源进行交互的核心抽象。

use async_trait::async_trait;

use crate::{
    error::Result,
    model::{quality::Quality, source::SourceInfo, track::Track},
};

pub mod nanci;

/// 定义了所有音源需要实现的通用接口。
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MusicSource: Send + Sync {
    /// 返回音源的静态元数据。
    fn info(&self) -> &SourceInfo;

    /// 返回音源支持的音质列表。
    fn supported_qualities(&self) -> &'static [Quality] {
        Quality::ALL
    }

    ///
    /// 根据歌曲 ID 和音质获取可播放的音频链接。
    ///
    /// # 参数
    /// * `track` - 歌曲信息，只有 `song_id` 会被使用。
    /// * `quality` - 音质标签，通常是 [`Quality`] 的字符串形式。
    ///   本地不做校验，未知的值会原样转发给服务端。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含服务端返回的链接，不做任何格式校验。
    ///
    async fn get_music_url(&self, track: &Track<'_>, quality: &str) -> Result<String>;

    ///
    /// 与 `get_music_url` 相同，但把所有失败折叠为 `None`。
    ///
    /// 失败原因只会以一条 `error` 级别的日志输出，不会返回给调用方。
    ///
    async fn get_music_url_or_none(&self, track: &Track<'_>, quality: &str) -> Option<String> {
        match self.get_music_url(track, quality).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!(
                    "[{}] 获取歌曲 '{}' ({}) 的链接失败: {}",
                    self.info().id,
                    track.song_id,
                    quality,
                    e
                );
                None
            }
        }
    }
}
