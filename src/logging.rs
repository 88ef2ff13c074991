//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise log4rs from `path`, or log warnings to stderr if the file
/// cannot be used.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => Ok(()),
        Err(file_err) => {
            log4rs::init_config(fallback_config(LevelFilter::Warn)?)?;
            log::debug!(
                "log config {} not used ({file_err}), logging to stderr",
                path.display()
            );
            Ok(())
        }
    }
}

/// Console-only configuration writing to stderr so stdout stays clean for
/// CSV and JSON output.
pub fn fallback_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
