//! 负责处理音源的配置。
//!
//! 默认值即为音源内置的服务地址与账号。需要轮换密钥或切换服务地址时，
//! 可以在 `<配置目录>/lx-source/nanci_config.json` 中覆盖任意字段，
//! 或者直接构造一个 [`SourceConfig`] 注入。

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SourceError};

/// 默认的服务地址。
pub const DEFAULT_BASE_ADDRESS: &str = "https://lx.mnari.cn";
/// 默认的账号名，通过 `X-Request-User` 请求头发送。
pub const DEFAULT_ACCOUNT_NAME: &str = "nanci";
/// 默认的访问密钥，通过 `X-Request-Key` 请求头发送。
pub const DEFAULT_ACCESS_KEY: &str = "15346280q";
/// 默认的 User-Agent。
pub const DEFAULT_USER_AGENT: &str = "cy-music-request";

const CONFIG_DIR_NAME: &str = "lx-source";
const CONFIG_FILE_NAME: &str = "nanci_config.json";

/// 音源的配置项。
///
/// 所有字段均可省略，省略的字段使用内置默认值。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    /// 服务地址，例如 `https://lx.mnari.cn`。
    pub base_address: String,
    /// 账号名。
    pub account_name: String,
    /// 访问密钥。
    pub access_key: String,
    /// 请求使用的 User-Agent。
    pub user_agent: String,
    /// 请求超时（秒）。为 `None` 时使用底层传输的默认行为。
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            account_name: DEFAULT_ACCOUNT_NAME.to_string(),
            access_key: DEFAULT_ACCESS_KEY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// 从指定的 JSON 文件读取配置。
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 检查配置是否可用。
    ///
    /// 服务地址必须是合法的 http(s) URL，账号名和密钥不能为空。
    pub fn validate(&self) -> Result<()> {
        let base = self.base_address.trim();
        if base.is_empty() {
            return Err(SourceError::Config("服务地址不能为空".into()));
        }
        let url = Url::parse(base)
            .map_err(|e| SourceError::Config(format!("服务地址 '{base}' 不是合法的 URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SourceError::Config(format!(
                "服务地址 '{base}' 必须使用 http 或 https"
            )));
        }
        if self.account_name.is_empty() {
            return Err(SourceError::Config("账号名不能为空".into()));
        }
        if self.access_key.is_empty() {
            return Err(SourceError::Config("访问密钥不能为空".into()));
        }
        Ok(())
    }

    /// 去掉末尾 `/` 之后的服务地址。
    pub(crate) fn trimmed_base_address(&self) -> &str {
        self.base_address.trim().trim_end_matches('/')
    }
}

/// 获取应用配置目录下指定文件的完整路径。
///
/// # 参数
/// * `filename` - 目标配置文件的名称，例如 "nanci_config.json"。
pub fn get_config_file_path(filename: &str) -> Result<PathBuf> {
    let mut config_dir = dirs::config_dir().ok_or_else(|| {
        SourceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "无法找到用户配置目录",
        ))
    })?;
    config_dir.push(CONFIG_DIR_NAME);
    config_dir.push(filename);
    Ok(config_dir)
}

/// 从配置目录加载音源配置。
///
/// 配置文件不存在时返回默认配置。
pub fn load_source_config() -> Result<SourceConfig> {
    let config_path = get_config_file_path(CONFIG_FILE_NAME)?;
    load_config_or_default(&config_path)
}

fn load_config_or_default(path: &Path) -> Result<SourceConfig> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let config: SourceConfig = serde_json::from_str(&content)?;
            info!("已从 {:?} 加载音源配置。", path);
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("音源配置文件不存在，使用默认配置。");
            Ok(SourceConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}
