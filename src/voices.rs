// src/voices.rs

use indexmap::IndexSet;
use log::{debug, info, warn};
use std::io::Write;

use crate::config::MissingNamePolicy;
use crate::error::VoiceError;

/// 语音框架返回的一条语音记录，属性在边界处一次性读出。
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceDescriptor {
    pub id: String,
    pub name: Option<String>,
    pub language: Option<String>,
}

impl VoiceDescriptor {
    /// 取出可以单独占一行输出的显示名称，原样返回不做修改。
    pub fn display_name(&self) -> Result<&str, VoiceError> {
        // 只有空白的名称视为缺失
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| VoiceError::MissingNameAttribute { id: self.id.clone() })?;

        if name.chars().any(char::is_control) {
            return Err(VoiceError::MalformedName {
                id: self.id.clone(),
                name: name.to_string(),
            });
        }

        Ok(name)
    }
}

/// 宿主系统的语音框架。
pub trait SpeechFramework {
    fn installed_voices(&self) -> Result<Vec<VoiceDescriptor>, VoiceError>;
}

pub struct VoiceNameLister {
    policy: MissingNamePolicy,
}

impl Default for VoiceNameLister {
    fn default() -> Self {
        Self::new(MissingNamePolicy::default())
    }
}

impl VoiceNameLister {
    pub fn new(policy: MissingNamePolicy) -> Self {
        Self { policy }
    }

    /// 按首次出现的顺序返回去重后的语音名称。
    pub fn list_voice_names<F: SpeechFramework>(
        &self,
        framework: &F,
    ) -> Result<Vec<String>, VoiceError> {
        let descriptors = framework.installed_voices()?;
        let mut names: IndexSet<String> = IndexSet::with_capacity(descriptors.len());

        for descriptor in &descriptors {
            let name = match descriptor.display_name() {
                Ok(name) => name,
                Err(e) => match self.policy {
                    MissingNamePolicy::Skip => {
                        warn!("跳过语音: {}", e);
                        continue;
                    }
                    MissingNamePolicy::Fail => return Err(e),
                },
            };

            if !names.insert(name.to_string()) {
                debug!("重复的语音名称 '{}' (id: {})，已忽略。", name, descriptor.id);
            }
        }

        info!("共 {} 个语音，去重后 {} 个名称。", descriptors.len(), names.len());
        Ok(names.into_iter().collect())
    }

    /// 先完整取得列表再写出，框架出错时不会有任何输出。
    pub fn write_voice_names<F: SpeechFramework, W: Write>(
        &self,
        framework: &F,
        out: &mut W,
    ) -> Result<usize, VoiceError> {
        let names = self.list_voice_names(framework)?;
        for name in &names {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        Ok(names.len())
    }
}
