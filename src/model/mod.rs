//! 本库通用的数据模型。

pub mod quality;
pub mod source;
pub mod track;
