//! 定义了音质选择器。

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// 枚举：音源支持的音质。
///
/// 其字符串形式即为请求路径中使用的音质标签。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Quality {
    /// 128kbps MP3。
    #[default]
    #[strum(serialize = "128k")]
    #[serde(rename = "128k")]
    Standard,
    /// 320kbps MP3。
    #[strum(serialize = "320k")]
    #[serde(rename = "320k")]
    High,
    /// FLAC 无损。
    #[strum(serialize = "flac")]
    #[serde(rename = "flac")]
    Lossless,
}

impl Quality {
    /// 所有已知音质，按码率从低到高排列。
    pub const ALL: &'static [Quality] = &[Quality::Standard, Quality::High, Quality::Lossless];
}
