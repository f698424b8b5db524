//! 音源的静态元数据，由宿主应用读取并展示。

use serde::Serialize;

/// 音源的描述信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    /// 音源唯一编号。
    pub id: &'static str,
    /// 作者。
    pub author: &'static str,
    /// 音源显示的名称。
    pub name: &'static str,
    /// 简短说明。
    pub description: &'static str,
    /// 版本。
    pub version: &'static str,
    /// 更新地址，可以为空。
    pub src_url: &'static str,
}
