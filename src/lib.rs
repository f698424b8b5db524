#![warn(missing_docs)]

//! # LX Source RS
//!
//! 南辞测试音源的 Rust 实现。根据企鹅平台的歌曲 ID 和音质，
//! 向音源服务请求一次并返回可播放的音频链接。
//!
//! 仅供测试使用，请勿用于商业用途。
//!
//! ## 获取播放链接
//!
//! ```rust,no_run
//! use lx_source_rs::{MusicSource, NanciSource, Quality, Track};
//!
//! async {
//!     let source = NanciSource::new().unwrap();
//!     let track = Track {
//!         name: Some("目及皆是你"),
//!         artist: Some("小蓝背心"),
//!         song_id: "00126fAV2ZKaOd",
//!     };
//!
//!     match source.get_music_url(&track, Quality::High.as_ref()).await {
//!         Ok(url) => println!("播放链接: {url}"),
//!         Err(e) => eprintln!("获取失败: {e}"),
//!     }
//!
//!     // 宿主只关心成功与否时，可以直接拿到 Option。
//!     let maybe_url = source.get_music_url_or_none(&track, "flac").await;
//!     println!("{maybe_url:?}");
//! };
//! ```
//!
//! ## 自定义配置
//!
//! ```rust
//! use lx_source_rs::{NanciSource, SourceConfig};
//!
//! let config = SourceConfig {
//!     base_address: "https://lx.mnari.cn".to_string(),
//!     access_key: "another-key".to_string(),
//!     ..Default::default()
//! };
//! let source = NanciSource::with_config(config).unwrap();
//! assert_eq!(
//!     source.build_request_url("123456", "320k"),
//!     "https://lx.mnari.cn/url/tx/123456/320k"
//! );
//! ```
pub mod config;
pub mod error;
pub mod model;
pub mod providers;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::{
    config::{SourceConfig, load_source_config},
    error::{Result, SourceError},
    model::{quality::Quality, source::SourceInfo, track::Track},
    providers::{
        MusicSource,
        nanci::{NANCI_INFO, NanciSource},
    },
};
