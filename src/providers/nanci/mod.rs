//! 实现了南辞测试音源的 `MusicSource`。
//!
//! 仅供测试使用，请勿用于商业用途。
//!
//! # 使用流程
//!
//! 1. 使用 `NanciSource::new()` 或 `NanciSource::with_config(..)` 创建实例。
//! 2. 调用 `get_music_url(track, quality)` 获取企鹅平台歌曲的播放链接。
//!    `track.song_id` 为歌曲的 songmid，`quality` 为 `128k`、`320k` 或 `flac`。

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT},
};
use tracing::{debug, instrument, trace};

use crate::{
    config::SourceConfig,
    error::{Result, SourceError},
    model::{source::SourceInfo, track::Track},
    providers::MusicSource,
};

pub mod models;

#[cfg(test)]
mod test_server;

/// 南辞测试音源的元数据。
pub const NANCI_INFO: SourceInfo = SourceInfo {
    id: "nanci",
    author: "南辞",
    name: "南辞测试音源",
    description: "仅供测试使用",
    version: "v1",
    src_url: "",
};

const URL_PATH_PREFIX: &str = "url/tx";
const X_REQUEST_USER: &str = "x-request-user";
const X_REQUEST_KEY: &str = "x-request-key";

/// 南辞测试音源的 `MusicSource` 实现
#[derive(Debug, Clone)]
pub struct NanciSource {
    config: SourceConfig,
    headers: HeaderMap,
    http_client: Client,
}

impl NanciSource {
    /// 使用内置默认配置创建实例。
    pub fn new() -> Result<Self> {
        Self::with_config(SourceConfig::default())
    }

    /// 使用指定配置创建实例。
    pub fn with_config(config: SourceConfig) -> Result<Self> {
        let http_client = Client::builder().build()?;
        Self::with_client(config, http_client)
    }

    /// 使用指定配置和已构建好的 HTTP 客户端创建实例。
    ///
    /// 配置中的 `timeout_secs` 作用于每一次请求，和客户端自身的超时设置叠加，
    /// 只在非 wasm 平台生效。
    pub fn with_client(config: SourceConfig, http_client: Client) -> Result<Self> {
        config.validate()?;
        let headers = build_headers(&config)?;
        Ok(Self {
            config,
            headers,
            http_client,
        })
    }

    /// 当前使用的配置。
    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// 构造请求地址 `{服务地址}/url/tx/{songmid}/{quality}`。
    ///
    /// `song_id` 和 `quality` 都原样拼接，不做转义或校验。
    #[must_use]
    pub fn build_request_url(&self, song_id: &str, quality: &str) -> String {
        format!(
            "{}/{URL_PATH_PREFIX}/{song_id}/{quality}",
            self.config.trimmed_base_address()
        )
    }
}

fn build_headers(config: &SourceConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    headers.insert(
        HeaderName::from_static(X_REQUEST_USER),
        HeaderValue::from_str(&config.account_name)?,
    );
    headers.insert(
        HeaderName::from_static(X_REQUEST_KEY),
        HeaderValue::from_str(&config.access_key)?,
    );
    Ok(headers)
}

fn extract_url(response: models::UrlResponse) -> Result<String> {
    match response.data {
        Some(serde_json::Value::String(url)) => Ok(url),
        None | Some(serde_json::Value::Null) => Err(SourceError::MissingData),
        Some(other) => Err(SourceError::InvalidData(other.to_string())),
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MusicSource for NanciSource {
    fn info(&self) -> &SourceInfo {
        &NANCI_INFO
    }

    #[instrument(skip(self, track), fields(song_id = %track.song_id))]
    async fn get_music_url(&self, track: &Track<'_>, quality: &str) -> Result<String> {
        let url = self.build_request_url(track.song_id, quality);
        debug!(url = %url, "正在请求音频链接");

        #[allow(unused_mut)]
        let mut request = self.http_client.get(&url).headers(self.headers.clone());
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(secs) = self.config.timeout_secs {
            request = request.timeout(Duration::from_secs(secs));
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus { status, url });
        }

        let response_text = response.text().await?;

        trace!(
            url = %url,
            response.body = %response_text,
            "原始 JSON 响应"
        );

        let body: serde_json::Value = serde_json::from_str(&response_text)?;
        extract_url(models::UrlResponse::from_body(body)?)
    }
}
