use arith_seq::utils::logger;
use arith_seq::{CliConfig, SequenceEngine};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let engine = SequenceEngine::from_config(&config);
    let stdout = std::io::stdout();
    let status = engine.run_cli(&mut stdout.lock());

    std::process::exit(status);
}
