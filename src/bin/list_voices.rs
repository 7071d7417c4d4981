// src/bin/list_voices.rs

use std::io::{self, Write};
use sysvoices::{init_logging, Config, SpeechFramework, TtsFramework};

// 列出框架返回的每一个语音（不去重），用于排查哪些语音共用同一个名称
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&Config::load())?;

    let framework = TtsFramework::new()?;
    let voices = framework.installed_voices()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for voice in &voices {
        // 不合法的名称用 {:?} 显示原始内容，方便看出其中的控制字符
        let name = match (voice.display_name(), &voice.name) {
            (Ok(name), _) => name.to_string(),
            (Err(_), Some(raw)) => format!("{:?}", raw),
            (Err(_), None) => "-".to_string(),
        };
        writeln!(
            out,
            "{}\t{}\t{}",
            name,
            voice.language.as_deref().unwrap_or("-"),
            voice.id
        )?;
    }

    Ok(())
}
