use colored::Colorize;
use std::error::Error;
use subnet_vlsm::cmd::{self, CommandLine};
use subnet_vlsm::config::Config;
use subnet_vlsm::logging::init_logging;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");
    log::debug!("config: {:?}", config);

    let cli = CommandLine::parse_args();
    match cmd::run(&cli, &config) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
