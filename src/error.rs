//! 定义了整个 `lx-source` 库的错误类型 `SourceError`。

use std::io;
use thiserror::Error;

/// 解析音频链接时可能出现的错误。
///
/// 每一种失败原因都有独立的变体。若调用方只关心“成功或换一个音源”，
/// 可以改用 [`MusicSource::get_music_url_or_none`](crate::providers::MusicSource::get_music_url_or_none)。
#[derive(Error, Debug)]
pub enum SourceError {
    /// 网络请求失败 (源自 `reqwest::Error`)，例如连接被拒绝、超时或读取响应体失败
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),

    /// 服务器返回了非 2xx 状态码
    #[error("请求 `{url}` 失败，HTTP 状态码: {status}")]
    HttpStatus {
        /// 服务器返回的状态码。
        status: reqwest::StatusCode,
        /// 请求的目标地址。
        url: String,
    },

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 响应中缺少 `data` 字段，或该字段为 `null`
    #[error("响应中未找到 `data` 字段")]
    MissingData,

    /// `data` 字段存在但不是字符串
    #[error("`data` 字段不是字符串: {0}")]
    InvalidData(String),

    /// 请求头的值无法发送
    #[error("无效的请求头: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// 配置无效
    #[error("配置无效: {0}")]
    Config(String),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),
}

/// `SourceError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, SourceError>;
