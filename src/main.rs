use std::process::ExitCode;

use tracing::{error, info};

use mail_service::{Config, MailServiceError, Mailer, Message};

const USAGE: &str = "usage: mail-service <message.toml> [config.toml]";

fn load_message(path: &str) -> mail_service::Result<Message> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| MailServiceError::Config(format!("message parse error: {e}")))
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(message_path) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let config_path = args.next().unwrap_or_else(|| "config.toml".to_string());

    // Load and validate configuration
    let config = match Config::load_with_env(&config_path).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    if let Err(e) = mail_service::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        mail_service::logging::init_console_only(&config.logging.level);
    }

    let mailer = match Mailer::new(&config.mailer) {
        Ok(mailer) => mailer,
        Err(e) => {
            error!("Failed to create mailer: {e}");
            return ExitCode::FAILURE;
        }
    };

    let message = match load_message(&message_path) {
        Ok(message) => message,
        Err(e) => {
            error!("Failed to load {message_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match mailer.send(message).await {
        Ok(response) => {
            info!(code = %response.code(), "Mail accepted by server");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to send mail: {e}");
            ExitCode::FAILURE
        }
    }
}
