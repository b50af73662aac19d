//! File browser feature - file system navigation for selecting CSV files.
//!
//! This module contains state management and business logic for browsing
//! the file system; selecting a file fires the CSV load in the app layer.

pub mod ui;

use std::fs;
use std::path::PathBuf;

/// File browser entry.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path to the file/directory.
    pub path: PathBuf,
    /// Display name (basename of path).
    pub name: String,
    /// Is this entry a directory?
    pub is_dir: bool,
    /// Does the name look like a CSV file?
    pub is_csv: bool,
}

/// File browser state.
#[derive(Debug)]
pub struct FileBrowserState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory.
    pub entries: Vec<FileEntry>,
    /// Cursor position.
    pub cursor: usize,
    /// Scroll offset.
    pub scroll: usize,
    /// Show hidden dot-prefixed entries.
    pub show_hidden: bool,
}

impl FileBrowserState {
    /// Create a new file browser state rooted at the current directory.
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            current_dir,
            entries: Vec::new(),
            cursor: 0,
            scroll: 0,
            show_hidden: false,
        }
    }

    /// Load directory contents: a `..` entry, then directories, then files,
    /// each group sorted by name.
    pub fn load_directory(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.scroll = 0;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                path: parent.to_path_buf(),
                name: "..".to_string(),
                is_dir: true,
                is_csv: false,
            });
        }

        let Ok(dir_entries) = fs::read_dir(&self.current_dir) else {
            return;
        };

        let mut listed: Vec<FileEntry> = Vec::new();
        for entry in dir_entries.flatten() {
            let path = entry.path();
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            let is_dir = path.is_dir();
            let is_csv = !is_dir
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

            listed.push(FileEntry {
                path,
                name,
                is_dir,
                is_csv,
            });
        }

        listed.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then(a.name.cmp(&b.name)));
        self.entries.extend(listed);
    }

    /// Move the cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Select the entry under the cursor.
    ///
    /// Directories are entered in place and `None` is returned; for a file
    /// the path is handed back for the app to load.
    pub fn select_current(&mut self) -> Option<PathBuf> {
        let entry = self.entries.get(self.cursor)?.clone();
        if entry.is_dir {
            self.current_dir = entry.path;
            self.load_directory();
            None
        } else {
            Some(entry.path)
        }
    }

    /// Navigate to the parent directory.
    pub fn go_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
            self.load_directory();
        }
    }

    /// Toggle visibility of hidden entries.
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.load_directory();
    }

    /// Keep the cursor inside the viewport.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + viewport_height {
            self.scroll = self.cursor + 1 - viewport_height;
        }
    }
}

impl Default for FileBrowserState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn browser_at(dir: &TempDir) -> FileBrowserState {
        let mut state = FileBrowserState::new();
        state.current_dir = dir.path().to_path_buf();
        state.load_directory();
        state
    }

    #[test]
    fn lists_directories_before_files() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.csv")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let state = browser_at(&dir);

        let names: Vec<&str> = state.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "sub", "b.csv"]);
        assert!(state.entries[2].is_csv);
    }

    #[test]
    fn hidden_entries_follow_the_toggle() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(".hidden.csv")).unwrap();
        let mut state = browser_at(&dir);
        assert_eq!(state.entries.len(), 1); // just ".."
        state.toggle_hidden();
        assert_eq!(state.entries.len(), 2);
    }

    #[test]
    fn selecting_a_directory_descends() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub/data.csv")).unwrap();
        let mut state = browser_at(&dir);

        state.cursor_down(); // onto "sub"
        assert!(state.select_current().is_none());
        assert!(state.current_dir.ends_with("sub"));

        state.cursor_down(); // onto "data.csv"
        let selected = state.select_current().unwrap();
        assert!(selected.ends_with("data.csv"));
    }

    #[test]
    fn scroll_follows_the_cursor() {
        let mut state = FileBrowserState::new();
        state.entries = (0..20)
            .map(|i| FileEntry {
                path: PathBuf::from(format!("f{i}")),
                name: format!("f{i}"),
                is_dir: false,
                is_csv: false,
            })
            .collect();
        for _ in 0..15 {
            state.cursor_down();
        }
        state.adjust_scroll(10);
        assert_eq!(state.scroll, 6);
        state.cursor = 2;
        state.adjust_scroll(10);
        assert_eq!(state.scroll, 2);
    }
}
