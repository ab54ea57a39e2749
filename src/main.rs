use std::path::PathBuf;
use std::process::ExitCode;

use keeper::cli::app::KeeperCli;
use keeper::domain::ports::config::AppConfig;
use keeper::error::AppError;
use keeper::infra::error_log::log_to_file;
use keeper::tracing::init_logging;

fn main() -> ExitCode {
    init_logging();

    let config = match AppConfig::new(None) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("unable to load configuration: {e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook(config.error_log_path.clone());
    tracing::info!("using database {:?}", config.database_path);

    let error_log = config.error_log_path.clone();
    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            if let Err(log_err) = log_to_file(&e.to_string(), &error_log) {
                tracing::error!("unable to write error log: {log_err}");
            }
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig) -> Result<(), AppError> {
    KeeperCli::new(config)?.run()
}

fn install_panic_hook(error_log: PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = log_to_file(&info.to_string(), &error_log);
        default_hook(info);
    }));
}
