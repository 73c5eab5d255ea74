use clap::Parser;
use course_planner::core::ConfigProvider;
use course_planner::utils::{logger, validation::Validate};
use course_planner::{CliConfig, LocalStorage, Session, Shell, TomlConfig};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    match args.config.clone() {
        Some(config_path) => {
            let mut config = match TomlConfig::from_file(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            config.override_catalog_path(args.catalog.clone());

            logger::init_cli_logger(args.verbose, config.log_level());
            tracing::info!("📁 Loaded configuration from: {}", config_path);
            run(config)
        }
        None => {
            logger::init_cli_logger(args.verbose, None);
            run(args)
        }
    }
}

fn run<C: ConfigProvider + Validate + std::fmt::Debug>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!("Config: {:?}", config);
    tracing::info!("Catalog file: {}", config.catalog_path());

    let mut shell = Shell::new(LocalStorage::new("."), config);
    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout());
    session.run(&mut shell)?;

    Ok(())
}
