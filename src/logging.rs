use crate::config::LogConfig;
use anyhow::Context;
use simplelog::*;
use std::fs::File;

/// Installs the global logger: terminal, plus a log file if configured. Call once per process.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let mut builder = ConfigBuilder::new();
    for module in &config.filter {
        builder.add_filter_ignore(module.clone());
    }
    let log_config = builder.build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.level,
        log_config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = &config.file {
        let file = File::create(path)
            .with_context(|| format!("Could not create log file {}", path.display()))?;
        loggers.push(WriteLogger::new(config.level, log_config, file));
    }
    CombinedLogger::init(loggers).context("Logger already installed")
}
