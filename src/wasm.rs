// 宿主应用加载插件时看到的导出面

use crate::{MusicSource, NanciSource, SourceConfig, Track};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    Ok(())
}

#[wasm_bindgen]
pub struct WasmMusicSource {
    source: NanciSource,
}

#[wasm_bindgen]
impl WasmMusicSource {
    /// `config_js` 可以省略，省略的字段使用内置默认值。
    #[wasm_bindgen(constructor)]
    pub fn new(config_js: JsValue) -> Result<WasmMusicSource, JsValue> {
        let config: SourceConfig = if config_js.is_undefined() || config_js.is_null() {
            SourceConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config_js)?
        };
        let source =
            NanciSource::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { source })
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.source.info().id.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn author(&self) -> String {
        self.source.info().author.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.source.info().name.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> String {
        self.source.info().version.to_string()
    }

    #[wasm_bindgen(getter, js_name = srcUrl)]
    pub fn src_url(&self) -> String {
        self.source.info().src_url.to_string()
    }

    /// 完整的元数据对象。
    #[wasm_bindgen(getter)]
    pub fn info(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.source.info())?)
    }

    /// 成功时返回链接字符串，失败时返回 `null`。
    #[wasm_bindgen(js_name = getMusicUrl)]
    pub async fn get_music_url(
        &self,
        songname: String,
        artist: String,
        songmid: String,
        quality: String,
    ) -> JsValue {
        let track = Track {
            name: Some(songname.as_str()),
            artist: Some(artist.as_str()),
            song_id: &songmid,
        };
        match self.source.get_music_url_or_none(&track, &quality).await {
            Some(url) => JsValue::from_str(&url),
            None => JsValue::NULL,
        }
    }
}
