use std::path::PathBuf;

use clap::Parser;

use crate::app::SettingsStore;

/// A small multi-window notepad.
#[derive(Debug, Parser)]
#[command(name = "MultiPad", version, about)]
pub struct Cli {
    /// Files to open, one window each.
    pub files: Vec<String>,

    /// Settings file to read at startup and write on exit.
    #[arg(long, env = "MULTIPAD_SETTINGS", value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

impl Cli {
    pub fn settings_store(&self) -> SettingsStore {
        match &self.settings {
            Some(path) => SettingsStore::new(path),
            None => SettingsStore::at_default_location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_are_positional() {
        let cli = Cli::try_parse_from(["MultiPad", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.files, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_settings_override() {
        let cli = Cli::try_parse_from(["MultiPad", "--settings", "/tmp/s.json"]).unwrap();
        assert_eq!(
            cli.settings_store().path(),
            std::path::Path::new("/tmp/s.json")
        );
    }

    #[test]
    fn test_no_args_uses_config_dir() {
        let cli = Cli {
            files: Vec::new(),
            settings: None,
        };
        assert!(cli.settings_store().path().ends_with("multipad/settings.json"));
    }
}
