//! 此模块定义了用于反序列化南辞音源 API 响应的数据结构。

use serde::Deserialize;

use crate::error::Result;

/// `/url/tx/{songmid}/{quality}` 接口的响应。
///
/// 只有 `data` 字段会被使用，其余字段忽略。
#[derive(Debug, Deserialize)]
pub struct UrlResponse {
    /// 音频链接。服务端出错时可能缺失、为 `null` 或者是其它类型。
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl UrlResponse {
    /// 从已解析的响应体构造。
    ///
    /// 响应体不是 JSON 对象时视为没有 `data` 字段。
    pub fn from_body(body: serde_json::Value) -> Result<Self> {
        if body.is_object() {
            Ok(serde_json::from_value(body)?)
        } else {
            Ok(Self { data: None })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_body_ignores_non_objects() {
        for body in [json!(["https://evil.example/x.mp3"]), json!("u"), json!(1), json!(null)] {
            assert!(UrlResponse::from_body(body).unwrap().data.is_none());
        }
        let parsed = UrlResponse::from_body(json!({"data": "u", "code": 0})).unwrap();
        assert_eq!(parsed.data, Some(json!("u")));
    }
}
