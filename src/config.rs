use atm::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the logger. Defaults to warnings only, `RUST_LOG` overrides it.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
