//! Главный исполняемый файл boolquery

use anyhow::Context;
use boolquery::cli::Cli;
use boolquery::common::Config;
use clap::Parser;
use env_logger::{Builder, Env};

/// Уровень из `--log-level` важнее `RUST_LOG`, `RUST_LOG` важнее конфигурации
fn init_logging(cli: &Cli, config: &Config) {
    let mut builder = if cli.log_level.is_some() {
        let mut builder = Builder::new();
        builder.parse_filters(&config.logging.level);
        builder
    } else {
        Builder::from_env(Env::default().default_filter_or(config.logging.level.as_str()))
    };
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .load_config()
        .context("failed to load configuration")?;
    init_logging(&cli, &config);
    log::debug!(
        "boolquery {} started, max lexeme length {}",
        boolquery::VERSION,
        config.lexer.max_lexeme_length
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli.execute(&config, &mut out) {
        if err.is_lexical() {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
        return Err(err).context("command failed");
    }

    Ok(())
}
