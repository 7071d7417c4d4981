// src/main.rs

use log::{debug, info};
use std::env;
use std::io;

use sysvoices::{init_logging, Config, TtsFramework, VoiceNameLister};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- 1. 配置与日志 ---
    let config = Config::load();
    init_logging(&config)?;
    debug!("配置已加载: {:?}", config);

    let ignored: Vec<String> = env::args().skip(1).collect();
    if !ignored.is_empty() {
        debug!("忽略命令行参数: {:?}", ignored);
    }

    // --- 2. 枚举并输出 ---
    // 框架不可用时错误直接从 main 返回，进程以非零状态退出
    let framework = TtsFramework::new()?;
    let lister = VoiceNameLister::new(config.on_missing_name);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = lister.write_voice_names(&framework, &mut out)?;
    info!("已输出 {} 个语音名称。", count);

    Ok(())
}
