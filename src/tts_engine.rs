// src/tts_engine.rs

use log::{debug, info};
use tts::Tts;

use crate::error::VoiceError;
use crate::voices::{SpeechFramework, VoiceDescriptor};

/// 基于 `tts` crate 的系统语音框架（macOS 上为 AVFoundation）。
pub struct TtsFramework {
    tts: Tts,
}

impl TtsFramework {
    pub fn new() -> Result<Self, VoiceError> {
        let tts = Tts::default()?;

        if !tts.supported_features().voice {
            return Err(VoiceError::PlatformUnavailable(
                "当前语音后端不支持枚举语音".to_string(),
            ));
        }

        info!("系统语音引擎初始化成功。");
        Ok(TtsFramework { tts })
    }
}

impl SpeechFramework for TtsFramework {
    fn installed_voices(&self) -> Result<Vec<VoiceDescriptor>, VoiceError> {
        let voices = self.tts.voices()?;
        debug!("语音框架返回了 {} 个语音。", voices.len());

        Ok(voices
            .iter()
            .map(|v| {
                let name = v.name();
                VoiceDescriptor {
                    id: v.id(),
                    name: if name.is_empty() { None } else { Some(name) },
                    language: Some(v.language().to_string()),
                }
            })
            .collect())
    }
}
