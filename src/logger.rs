use anyhow::Result;
use simple_logger::SimpleLogger;

/// Info level by default, `RUST_LOG` overrides it.
pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    Ok(())
}
