use serde_json::json;
use std::path::Path;
use tokenparser_core::config::{ConfigLoader, default_config_path};

use crate::logging;

/// Exit status for an unusable configuration.
const CONFIG_FAILURE: i32 = 2;

pub fn run(config: Option<&Path>, json: bool) {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL tokenparser doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(CONFIG_FAILURE);
        }
    };

    logging::init(&rc);
    tracing::info!(version = tokenparser_core::version(), "doctor");

    let path = config.map_or_else(default_config_path, Path::to_path_buf);
    let source = rc
        .source
        .as_ref()
        .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string());
    let file = rc
        .logging
        .file
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());
    let file_level = rc.logging.file_level.as_deref().unwrap_or("-");

    if json {
        let report = json!({
            "version": tokenparser_core::version(),
            "path": path.display().to_string(),
            "source": rc.source.as_ref().map(|p| p.display().to_string()),
            "logging": {
                "level": rc.logging.level,
                "file_level": rc.logging.file_level,
                "file": rc.logging.file.as_ref().map(|p| p.display().to_string()),
            },
        });
        println!("{report}");
        return;
    }

    println!("OK   tokenparser doctor");
    println!("version: {}", tokenparser_core::version());
    println!("path: {}", path.display());
    println!("source: {source}");
    println!("logging.level: {}", rc.logging.level);
    println!("logging.file_level: {file_level}");
    println!("logging.file: {file}");
}
