// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files found in
    /// `i18n_dir` (which replace embedded ones for the same locale).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(LanguageIdentifier, String)> = Asset::iter()
            .filter_map(|file| {
                let locale = locale_from_filename(file.as_ref())?;
                let content = Asset::get(file.as_ref())?;
                Some((
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ))
            })
            .collect();

        if let Some(dir) = i18n_dir {
            sources.extend(read_ftl_dir(Path::new(&dir)));
        }

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (locale, source) in sources {
            let Some(bundle) = build_bundle(&locale, source) else {
                continue;
            };
            if !available_locales.contains(&locale) {
                available_locales.push(locale.clone());
            }
            bundles.insert(locale, bundle);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                tracing::warn!(key, ?errors, "failed to format message");
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn read_ftl_dir(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "cannot read translations directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            let locale = locale_from_filename(&name.to_string_lossy())?;
            let content = fs::read_to_string(entry.path()).ok()?;
            Some((locale, content))
        })
        .collect()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, ?errors, "skipping invalid translation file");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Keep interpolated values free of Unicode isolation marks
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "duplicate messages in translation file");
    }
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_skips_unavailable_cli_lang() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        // System dependent: just check the result is an available locale
        if let Some(l) = resolve_locale(None, &config, &available()) {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_translations_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        assert!(i18n.available_locales().len() >= 2);
        assert_eq!(i18n.tr("picker-apply-button"), "Apply Avatar");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let text = i18n.tr_with_args(
            "notification-upload-not-an-image",
            &[("filename", "notes.txt")],
        );
        assert!(text.contains("notes.txt"), "got {text}");
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        i18n.set_locale("ja".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn i18n_dir_adds_locales() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("de.ftl"), "picker-apply-button = Avatar übernehmen\n")
            .expect("failed to write ftl");

        let i18n = I18n::new(
            Some("de".into()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.current_locale().to_string(), "de");
        assert_eq!(i18n.tr("picker-apply-button"), "Avatar übernehmen");
    }
}
