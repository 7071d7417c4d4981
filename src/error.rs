// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("语音框架不可用: {0}")]
    PlatformUnavailable(String),
    #[error("语音 '{id}' 缺少显示名称属性")]
    MissingNameAttribute { id: String },
    #[error("语音 '{id}' 的名称包含换行或控制字符: {name:?}")]
    MalformedName { id: String, name: String },
    #[error("输出失败: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tts::Error> for VoiceError {
    fn from(e: tts::Error) -> Self {
        VoiceError::PlatformUnavailable(e.to_string())
    }
}
