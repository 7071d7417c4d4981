//! 列出系统已安装的语音合成语音名称。
//!
//! 名称按语音框架返回的首次出现顺序去重，每行一个，供外部自动化脚本读取。

pub mod config;
pub mod error;
pub mod tts_engine;
pub mod voices;

pub use config::{Config, MissingNamePolicy};
pub use error::VoiceError;
pub use tts_engine::TtsFramework;
pub use voices::{SpeechFramework, VoiceDescriptor, VoiceNameLister};

use log::{warn, LevelFilter};

/// 根据配置初始化日志；标准输出只留给语音名称。
///
/// 加载配置时暂存的警告在日志就绪后才输出。
pub fn init_logging(config: &Config) -> Result<(), std::io::Error> {
    let level = config.level_filter();
    match &config.log_file {
        Some(path) => simple_logging::log_to_file(path, level.unwrap_or(LevelFilter::Warn))?,
        None => simple_logging::log_to_stderr(level.unwrap_or(LevelFilter::Warn)),
    }

    for message in &config.warnings {
        warn!("{}", message);
    }
    if level.is_none() {
        warn!("无效的日志级别 '{}'，回退到 warn。", config.log_level);
    }
    Ok(())
}
