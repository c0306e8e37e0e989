use anyhow::Result;
use simple_logger::init_with_level;

pub fn init(debug: bool) -> Result<()> {
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    init_with_level(level)?;

    Ok(())
}
