use anyhow::{Context, Result};
use clap::Parser;
use deadhand_i18n::config::Config;
use deadhand_i18n::i18n::{Catalog, CatalogValidator, LocalizationService};
use deadhand_i18n::page::Page;
use deadhand_i18n::{site, storage};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "deadhand-i18n")]
#[command(version)]
#[command(about = "Render the Deadhand landing page in a chosen language")]
struct Cli {
    /// Language to switch to (persisted for the next run)
    #[arg(value_name = "LANG")]
    language: Option<String>,

    /// Print the catalog validation report and metrics as JSON
    #[arg(long)]
    audit: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("deadhand_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;
    let store = storage::open_store(&config.store_path);
    let service = LocalizationService::builtin(store, &config)
        .with_context(|| format!("Invalid I18N_DEFAULT_LANGUAGE '{}'", config.default_language))?;

    // Baked-in page text is whatever the static markup ships with
    let static_copy = Catalog::builtin();
    let document = site::landing_page(service.registry(), |key| static_copy.lookup("en", key));

    let service = Rc::new(RefCell::new(service));
    let mut page = Page::new(document);
    let mount = LocalizationService::mount(&service, &mut page);
    page.load();

    if let Some(code) = cli.language {
        if !service.borrow_mut().set_language(page.document_mut(), &code) {
            let available: Vec<_> = service
                .borrow()
                .catalog()
                .languages()
                .map(|code| code.to_string())
                .collect();
            warn!("Unknown language '{}'. Available: {}", code, available.join(", "));
        }
    }

    let service_ref = service.borrow();
    if cli.audit {
        let report = CatalogValidator::validate_document(
            service_ref.catalog(),
            service_ref.registry(),
            service_ref.tagged_elements(),
        );
        let output = json!({
            "language": service_ref.current_language(),
            "validation": report,
            "metrics": service_ref.metrics().report(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let document = page.document();
        if let Some(button) = service_ref.selector_widget().button {
            println!("[selector] {}", document.text_content(button));
        }
        for (element, key) in service_ref.tagged_elements().iter() {
            println!("{}: {}", key, document.text_content(*element));
        }
    }

    info!("Rendered page in '{}'", service_ref.current_language());
    drop(service_ref);

    mount.unmount(&mut page);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Argument Parsing Tests ====================

    #[test]
    fn test_cli_language_and_audit() {
        let cli = Cli::try_parse_from(["deadhand-i18n", "es", "--audit"]).unwrap();
        assert_eq!(cli.language.as_deref(), Some("es"));
        assert!(cli.audit);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["deadhand-i18n"]).unwrap();
        assert_eq!(cli.language, None);
        assert!(!cli.audit);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["deadhand-i18n", "--audti"]).is_err());
    }

    #[test]
    fn test_cli_rejects_second_language() {
        assert!(Cli::try_parse_from(["deadhand-i18n", "es", "de"]).is_err());
    }
}
