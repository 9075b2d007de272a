// SPDX-License-Identifier: MPL-2.0
use localizable::config;
use localizable::error::{Error, Result};
use localizable::i18n::{Localized, LocalizationManager};
use localizable::paths;
use localizable::preferences::TomlPreferenceStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: localizable [OPTIONS] [KEY...]

Prints the translation of each KEY in the selected language.
Keys are Fluent message ids such as `global-cooling`.

Options:
  --lang <CODE>        Select a language (unknown codes select the default)
  --reset              Return to the default language
  --list               List available languages with their display names
  --resources <DIR>    Load string tables from DIR instead of the built-in ones
  --config-dir <DIR>   Directory for settings.toml and preferences.toml
  -h, --help           Show this help
";

/// Message shown by the demo screen when no key is given.
const DEFAULT_KEY: &str = "global-cooling";

/// Message printed after the selection changes.
const LANGUAGE_CHANGED_KEY: &str = "language-changed";

struct Flags {
    lang: Option<String>,
    reset: bool,
    list: bool,
    resources: Option<PathBuf>,
    config_dir: Option<String>,
    keys: Vec<String>,
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let cli_error = |err: pico_args::Error| Error::Config(err.to_string());
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").map_err(cli_error)?,
        reset: args.contains("--reset"),
        list: args.contains("--list"),
        resources: args.opt_value_from_str("--resources").map_err(cli_error)?,
        config_dir: args.opt_value_from_str("--config-dir").map_err(cli_error)?,
        keys: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    Ok(Some(flags))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let Some(flags) = parse_flags()? else {
        print!("{}", HELP);
        return Ok(());
    };

    paths::init_cli_override(flags.config_dir.clone());
    let (mut settings, _warning) = config::load();
    if let Some(dir) = flags.resources.clone() {
        settings.resources.directory = Some(dir);
    }

    let store = TomlPreferenceStore::open_default()
        .unwrap_or_else(|| TomlPreferenceStore::new(config::PREFERENCES_FILE));
    let mut manager = LocalizationManager::from_config(&settings, store)?;
    let changes = manager.subscribe_channel();

    if flags.reset {
        manager.reset_current_language_to_default();
    }
    if let Some(lang) = &flags.lang {
        manager.set_current_language(lang);
    }
    if changes.try_iter().count() > 0 {
        eprintln!(
            "{}: {}",
            LANGUAGE_CHANGED_KEY.localized(&manager),
            manager.current_language()
        );
    }

    if flags.list {
        let current = manager.current_language();
        for language in manager.available_languages(true) {
            let marker = if language == current { '*' } else { ' ' };
            println!(
                "{} {:<8} {}",
                marker,
                language,
                manager.display_name_for_language(&language)
            );
        }
        return Ok(());
    }

    if flags.keys.is_empty() {
        println!("{}", DEFAULT_KEY.localized(&manager));
    } else {
        for key in &flags.keys {
            println!("{}", key.localized(&manager));
        }
    }
    Ok(())
}
