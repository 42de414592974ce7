//! `minibank` binary: load configuration, install tracing, serve.

use std::process::ExitCode;

use minibank_types::ServiceConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}: {error}", error.code());
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = minibank_api::telemetry::init(config.log_format) {
        eprintln!("{}: {error}", error.code());
        return ExitCode::FAILURE;
    }

    match minibank_api::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(code = error.code(), %error, "Server failed");
            ExitCode::FAILURE
        }
    }
}
