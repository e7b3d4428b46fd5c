use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use folio_config::FolioConfig;
use folio_core::{
    resolve_gallery_slides, AssetCatalog, ChatBridge, ChatModelProvider, ContactRelay, CoreError,
    Portfolio,
};
use folio_ui::Ui;
use integration_formspree::FormspreeContactRelay;
use integration_gemini::GeminiChatProvider;

const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_cli_flags()?;
    let config = match cli.config_path.as_deref() {
        Some(path) => folio_config::load_from_path(path)?,
        None => folio_config::load_from_env()?,
    };
    init_file_logging()?;

    let portfolio = Portfolio::showcase();
    let assets = build_asset_catalog(&config);

    let chat_provider = build_chat_provider(&config)?;
    if let Some(provider) = chat_provider.as_ref() {
        provider.health_check().await?;
    }
    let chat_bridge = Arc::new(ChatBridge::new(
        chat_provider,
        config.chat.model.clone(),
        &portfolio,
    ));

    let contact_relay: Arc<dyn ContactRelay> =
        Arc::new(FormspreeContactRelay::new(config.contact.endpoint.clone())?);
    contact_relay.health_check().await?;

    tracing::info!(
        chat_online = chat_bridge.is_online(),
        contact_endpoint = config.contact.endpoint.as_str(),
        "starting folio"
    );

    let mut ui = Ui::init()?
        .with_chat_bridge(chat_bridge)
        .with_contact_relay(contact_relay)
        .with_status_reset(Duration::from_secs(config.ui.status_reset_secs))
        .with_transcript_line_limit(config.ui.transcript_line_limit);
    ui.run("ready", &portfolio, &assets)?;

    Ok(())
}

fn build_asset_catalog(config: &FolioConfig) -> AssetCatalog {
    let mut assets = AssetCatalog {
        avatar: config.assets.avatar.clone(),
        gallery: config.assets.gallery.clone(),
        resume_pdf: config.assets.resume_pdf.clone(),
        placeholder: config.assets.placeholder.clone(),
    };
    assets.gallery = resolve_gallery_slides(&assets, |slide| Path::new(slide).exists());
    assets
}

fn build_chat_provider(
    config: &FolioConfig,
) -> Result<Option<Arc<dyn ChatModelProvider>>, CoreError> {
    match optional_env(ENV_GEMINI_API_KEY) {
        Some(api_key) => {
            let provider =
                GeminiChatProvider::new(api_key, config.chat.api_base_url.clone())?;
            Ok(Some(Arc::new(provider)))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY is not set; the chat assistant runs offline");
            Ok(None)
        }
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn init_file_logging() -> Result<(), CoreError> {
    let log_path = folio_config::default_log_path()
        .map_err(|error| CoreError::Configuration(error.to_string()))?;
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|error| {
                CoreError::Configuration(format!(
                    "failed to create folio log directory '{}': {error}",
                    parent.display()
                ))
            })?;
        }
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|error| {
            CoreError::Configuration(format!(
                "failed to open folio log file '{}': {error}",
                log_path.display()
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .init();

    Ok(())
}

#[derive(Debug, Default)]
struct CliFlags {
    config_path: Option<String>,
}

fn parse_cli_flags() -> Result<CliFlags, CoreError> {
    parse_cli_args(std::env::args().skip(1))
}

fn parse_cli_args(mut args: impl Iterator<Item = String>) -> Result<CliFlags, CoreError> {
    let mut flags = CliFlags::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().ok_or_else(|| {
                    CoreError::Configuration(
                        "Missing value after --config. Use --config <path>.".to_owned(),
                    )
                })?;
                let value = value.trim().to_owned();
                if value.is_empty() {
                    return Err(CoreError::Configuration(
                        "Flag '--config' requires a non-empty value.".to_owned(),
                    ));
                }
                flags.config_path = Some(value);
            }
            "--help" | "-h" => {
                print_cli_help();
                std::process::exit(0);
            }
            value if value.starts_with("--") => {
                return Err(CoreError::Configuration(format!(
                    "Unknown flag '{value}'. Run with --help for valid flags."
                )));
            }
            unknown => {
                return Err(CoreError::Configuration(format!(
                    "Unexpected argument '{unknown}'. Run with --help for valid flags."
                )));
            }
        }
    }

    Ok(flags)
}

fn print_cli_help() {
    println!("Usage: folio [--config <path>]");
    println!();
    println!("  --config <path>   Load configuration from an explicit TOML file");
    println!("  --help            Show this help message");
}
