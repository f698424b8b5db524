//! 定义了解析音频链接所需的歌曲信息。

/// 代表一次链接解析请求的歌曲信息。
///
/// 只有 `song_id` 参与构造请求。`name` 和 `artist` 是宿主调用所有音源时
/// 统一传入的参数，本音源不会使用它们。
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track<'a> {
    /// 歌曲名称。
    pub name: Option<&'a str>,
    /// 艺术家名称。
    pub artist: Option<&'a str>,
    /// 歌曲在上游平台的 ID（企鹅平台的 songmid）。
    pub song_id: &'a str,
}

impl<'a> Track<'a> {
    /// 只根据歌曲 ID 创建一个 `Track`。
    #[must_use]
    pub fn from_id(song_id: &'a str) -> Self {
        Self {
            song_id,
            ..Default::default()
        }
    }
}
