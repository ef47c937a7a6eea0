use serde::{Deserialize, Serialize};

/// Smallest font size a window will render with.
pub const MIN_FONT_SIZE: u32 = 4;

/// Largest font size a window will render with.
pub const MAX_FONT_SIZE: u32 = 400;

/// Number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 5;

/// Most-recent-first list of file paths with set semantics on the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RecentFiles {
    paths: Vec<String>,
}

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `path` to the front, dropping any older occurrence and anything
    /// past the cap.
    pub fn touch(&mut self, path: &str) {
        self.paths.retain(|p| p != path);
        self.paths.insert(0, path.to_string());
        self.paths.truncate(MAX_RECENT_FILES);
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<Vec<String>> for RecentFiles {
    // Older or hand-edited files may carry duplicates or too many entries.
    fn from(raw: Vec<String>) -> Self {
        let mut paths: Vec<String> = Vec::with_capacity(MAX_RECENT_FILES);
        for path in raw {
            if paths.len() == MAX_RECENT_FILES {
                break;
            }
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        Self { paths }
    }
}

impl From<RecentFiles> for Vec<String> {
    fn from(recent: RecentFiles) -> Self {
        recent.paths
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_color")]
    pub font_color: String,

    #[serde(default = "default_bg_color")]
    pub bg_color: String,

    #[serde(default = "default_autosave_enabled")]
    pub autosave_enabled: bool,

    /// Autosave period in milliseconds
    #[serde(default = "default_autosave_interval")]
    pub autosave_interval: u64,

    #[serde(default)]
    pub recent_files: RecentFiles,
}

fn default_font_size() -> u32 {
    12
}

fn default_font_family() -> String {
    "Consolas".to_string()
}

fn default_font_color() -> String {
    "black".to_string()
}

fn default_bg_color() -> String {
    "white".to_string()
}

fn default_autosave_enabled() -> bool {
    true
}

fn default_autosave_interval() -> u64 {
    30_000
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            font_family: default_font_family(),
            font_color: default_font_color(),
            bg_color: default_bg_color(),
            autosave_enabled: default_autosave_enabled(),
            autosave_interval: default_autosave_interval(),
            recent_files: RecentFiles::new(),
        }
    }
}

impl AppSettings {
    /// Clamp values a hand-edited file could have pushed out of range.
    pub fn normalized(mut self) -> Self {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if self.autosave_interval == 0 {
            self.autosave_interval = default_autosave_interval();
        }
        self
    }
}
