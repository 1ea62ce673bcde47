//! Phraseology template persistence.
//!
//! Templates live in `settings.json` under the per-user config directory
//! (`~/.config/lazyatc/` on Linux). Keys missing from the file keep their
//! default wording.

use std::fs;
use std::path::{Path, PathBuf};

use lazyatc_models::PhraseologyTemplates;
use tracing::{info, warn};

use crate::error::SettingsError;
use crate::output::Notifier;

const APP_DIR: &str = "lazyatc";
const SETTINGS_FILE: &str = "settings.json";

/// Default location of the settings file.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    Ok(dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// Read templates from `path`. A missing file yields the defaults.
pub fn load_templates_from(path: &Path) -> Result<PhraseologyTemplates, SettingsError> {
    if !path.exists() {
        return Ok(PhraseologyTemplates::default());
    }
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read templates from `path`, falling back to the defaults when the file
/// cannot be used. The failure is logged and reported to `notifier`.
pub fn load_templates_or_default(path: &Path, notifier: &mut dyn Notifier) -> PhraseologyTemplates {
    match load_templates_from(path) {
        Ok(templates) => templates,
        Err(e) => fallback(&e, notifier),
    }
}

/// Read templates from the default location. See
/// [`load_templates_or_default`].
pub fn load_templates(notifier: &mut dyn Notifier) -> PhraseologyTemplates {
    match settings_path() {
        Ok(path) => load_templates_or_default(&path, notifier),
        Err(e) => fallback(&e, notifier),
    }
}

fn fallback(error: &SettingsError, notifier: &mut dyn Notifier) -> PhraseologyTemplates {
    warn!(%error, "could not load settings, using default templates");
    notifier.notify(&format!(
        "Settings Error:\n{error}\nUsing the default phraseology."
    ));
    PhraseologyTemplates::default()
}

/// Write templates to `path` as pretty JSON, creating parent directories.
pub fn save_templates_to(path: &Path, templates: &PhraseologyTemplates) -> Result<(), SettingsError> {
    let io_err = |source: std::io::Error| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(templates).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)?;
    info!(path = %path.display(), "settings saved");
    Ok(())
}

/// Write templates to the default location and return where they went.
pub fn save_templates(templates: &PhraseologyTemplates) -> Result<PathBuf, SettingsError> {
    let path = settings_path()?;
    save_templates_to(&path, templates)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let t = load_templates_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(t, PhraseologyTemplates::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let t = PhraseologyTemplates {
            invalid_route: "Hi, can you accept amended routing via {route}?".into(),
            non_standard_level: "I can offer you either {fl1} or {fl2}.".into(),
        };

        save_templates_to(&path, &t).unwrap();
        assert_eq!(load_templates_from(&path).unwrap(), t);
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "Non-Standard Altitude": "Either {fl1} or {fl2}." }"#).unwrap();

        let t = load_templates_from(&path).unwrap();
        assert_eq!(t.non_standard_level, "Either {fl1} or {fl2}.");
        assert_eq!(t.invalid_route, PhraseologyTemplates::default().invalid_route);
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            load_templates_from(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Notifier for Recorder {
        fn notify(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    #[test]
    fn unusable_file_falls_back_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let mut rec = Recorder::default();

        let t = load_templates_or_default(&path, &mut rec);
        assert_eq!(t, PhraseologyTemplates::default());
        assert_eq!(rec.0.len(), 1);
        assert!(rec.0[0].starts_with("Settings Error:\ncould not parse"));
    }

    #[test]
    fn missing_file_falls_back_silently() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = Recorder::default();

        let t = load_templates_or_default(&dir.path().join("settings.json"), &mut rec);
        assert_eq!(t, PhraseologyTemplates::default());
        assert!(rec.0.is_empty());
    }
}
