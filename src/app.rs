//! Application state and logic.

use std::path::PathBuf;

use crate::data::Dataset;
use crate::file_browser::FileBrowserState;
use crate::plot::{self, PlotContent};
use crate::plot_form::PlotForm;
use crate::table::TableViewState;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Which panel receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The file browser panel.
    Browser,
    /// The plot form.
    Form,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Currently selected CSV file, if any.
    pub csv_file: Option<PathBuf>,
    /// Loaded dataset; empty when nothing is selected or the parse failed.
    pub dataset: Dataset,
    /// Table view state.
    pub table: TableViewState,
    /// Plot form state.
    pub form: PlotForm,
    /// Plot region content.
    pub plot: PlotContent,
    /// File browser state.
    pub file_browser: FileBrowserState,
    /// File browser panel visibility.
    pub show_tree: bool,
    /// Focused panel.
    pub focus: Focus,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    ///
    /// A directory path roots the browser there; a file path is selected
    /// immediately; `None` roots the browser at the current directory.
    pub fn new(path: Option<PathBuf>) -> Self {
        let mut app = Self {
            csv_file: None,
            dataset: Dataset::default(),
            table: TableViewState::new(),
            form: PlotForm::new(),
            plot: PlotContent::Empty,
            file_browser: FileBrowserState::new(),
            show_tree: true,
            focus: Focus::Browser,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        };

        match path {
            Some(p) if p.is_dir() => {
                app.file_browser.current_dir = p;
                app.file_browser.load_directory();
            }
            Some(p) => {
                if let Some(parent) = p.parent().filter(|d| d.is_dir()) {
                    app.file_browser.current_dir = parent.to_path_buf();
                }
                app.file_browser.load_directory();
                app.select_file(p);
            }
            None => {
                app.file_browser.load_directory();
            }
        }

        app
    }

    /// Handle a file selection from the browser.
    ///
    /// Records the path, reparses the dataset (any parse failure yields an
    /// empty dataset, not an error screen), resets the table view and form
    /// fields, reloads the column suggestions, and clears the plot region.
    pub fn select_file(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        self.csv_file = Some(path.clone());
        self.dataset = match Dataset::from_path(&path) {
            Ok(dataset) => {
                self.status = format!("{} loaded ({} rows)", name, dataset.row_count());
                tracing::info!("Loaded {}", path.display());
                dataset
            }
            Err(e) => {
                self.status = format!("{} is not parseable as CSV", name);
                tracing::warn!("Parse failed for {}: {}", path.display(), e);
                Dataset::default()
            }
        };

        self.table.reset();
        self.form.reset_columns(&self.dataset.columns);
        self.plot = PlotContent::Empty;
    }

    /// Handle the plot action: read the form selections, render with the
    /// selected backend, and publish the chart or a diagnostic trace.
    pub fn trigger_plot(&mut self) {
        let result = self
            .form
            .request()
            .and_then(|request| plot::render(&self.dataset, &request, self.form.backend));

        match result {
            Ok(text) => {
                self.plot = PlotContent::Chart(text);
                self.status = format!("Plotted with {} backend", self.form.backend.name());
            }
            Err(e) => {
                tracing::warn!("Plot failed: {}", e);
                self.plot = PlotContent::Error(plot::diagnostic_trace(&e));
                self.status = "Plot failed".to_string();
            }
        }
    }

    /// Clear the plot region.
    pub fn clear_plot(&mut self) {
        self.plot = PlotContent::Empty;
        self.status = "Plot cleared".to_string();
    }

    /// Toggle the file browser panel. Only the visibility flag changes;
    /// focus stays where it was so the same binding flips the panel back.
    pub fn toggle_tree(&mut self) {
        self.show_tree = !self.show_tree;
        self.status = if self.show_tree {
            "Files: shown".to_string()
        } else {
            "Files: hidden".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.file_browser.toggle_hidden();
        self.status = format!(
            "Show hidden: {}",
            if self.file_browser.show_hidden {
                "ON"
            } else {
                "OFF"
            }
        );
    }

    /// Select the entry under the browser cursor.
    pub fn browser_select(&mut self) {
        if let Some(path) = self.file_browser.select_current() {
            self.select_file(path);
        } else {
            self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
        }
    }

    /// Navigate to the parent directory in the browser.
    pub fn browser_parent(&mut self) {
        self.file_browser.go_to_parent();
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
    }

    /// Scroll the table down one row.
    pub fn scroll_table_down(&mut self) {
        self.table.scroll_down(1, &self.dataset);
    }

    /// Scroll the table up one row.
    pub fn scroll_table_up(&mut self) {
        self.table.scroll_up(1);
    }

    /// Scroll the table one column right.
    pub fn scroll_table_right(&mut self) {
        self.table.scroll_right(&self.dataset);
    }

    /// Scroll the table one column left.
    pub fn scroll_table_left(&mut self) {
        self.table.scroll_left();
    }

    /// True when the plot region shows a diagnostic trace.
    pub fn plot_error(&self) -> bool {
        self.plot.is_error()
    }

    /// Subtitle for the title bar: `ERROR` while the plot region shows a
    /// trace, otherwise the selected file.
    pub fn subtitle(&self) -> String {
        if self.plot_error() {
            "ERROR".to_string()
        } else {
            self.csv_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn five_row_file() -> NamedTempFile {
        csv_file("a,b,c\n1,10,u\n2,20,v\n3,30,w\n4,40,u\n5,50,v\n")
    }

    fn app_with(file: &NamedTempFile) -> App {
        let mut app = App::new(None);
        app.select_file(file.path().to_path_buf());
        app
    }

    #[test]
    fn selecting_a_valid_file_populates_the_table() {
        let file = five_row_file();
        let app = app_with(&file);
        assert_eq!(app.dataset.columns, vec!["a", "b", "c"]);
        assert_eq!(app.dataset.row_count(), 5);
        assert_eq!(app.subtitle(), file.path().display().to_string());
    }

    #[test]
    fn selecting_an_unparseable_file_leaves_an_empty_table() {
        let file = csv_file("a,b\n1,2\nragged\n");
        let app = app_with(&file);
        assert!(app.dataset.is_empty());
        assert_eq!(app.dataset.column_count(), 0);
        assert_eq!(app.dataset.row_count(), 0);
        assert!(!app.plot_error());
    }

    #[test]
    fn selecting_a_new_file_resets_form_and_plot() {
        let first = five_row_file();
        let mut app = app_with(&first);
        app.form.x.filter = "a".to_string();
        app.form.y.filter = "b".to_string();
        app.form.color.filter = "c".to_string();
        app.form.kind.filter = "line".to_string();
        app.trigger_plot();
        assert!(matches!(app.plot, PlotContent::Chart(_)));

        let second = csv_file("p,q\n1,2\n");
        app.select_file(second.path().to_path_buf());

        assert_eq!(app.form.x.value(), "");
        assert_eq!(app.form.y.value(), "");
        assert_eq!(app.form.color.value(), "");
        assert_eq!(app.form.kind.value(), "");
        assert_eq!(app.form.x.options, vec!["p", "q"]);
        assert!(matches!(app.plot, PlotContent::Empty));
    }

    #[test]
    fn scatter_plot_succeeds_and_clears_prior_error() {
        let file = five_row_file();
        let mut app = app_with(&file);

        // First a failing plot to set the error marker
        app.form.x.filter = "z".to_string();
        app.form.y.filter = "b".to_string();
        app.trigger_plot();
        assert!(app.plot_error());
        assert_eq!(app.subtitle(), "ERROR");

        // Then a valid scatter with no color
        app.form.x.filter = "a".to_string();
        app.trigger_plot();
        assert!(matches!(app.plot, PlotContent::Chart(_)));
        assert!(!app.plot_error());
        assert_eq!(app.subtitle(), file.path().display().to_string());
    }

    #[test]
    fn unknown_column_marks_the_error_state() {
        let file = five_row_file();
        let mut app = app_with(&file);
        app.form.x.filter = "z".to_string();
        app.form.y.filter = "b".to_string();
        app.trigger_plot();
        assert!(app.plot_error());
        assert_eq!(app.subtitle(), "ERROR");
        assert_eq!(app.status, "Plot failed");
    }

    #[test]
    fn plot_with_color_column_groups_series() {
        let file = five_row_file();
        let mut app = app_with(&file);
        app.form.x.filter = "a".to_string();
        app.form.y.filter = "b".to_string();
        app.form.color.filter = "c".to_string();
        app.trigger_plot();
        assert!(matches!(app.plot, PlotContent::Chart(_)));
    }

    #[test]
    fn double_toggle_restores_panel_visibility() {
        let mut app = App::new(None);
        let initial = app.show_tree;
        app.toggle_tree();
        assert_ne!(app.show_tree, initial);
        app.toggle_tree();
        assert_eq!(app.show_tree, initial);
    }

    #[test]
    fn toggle_never_touches_focus() {
        let mut app = App::new(None);
        assert_eq!(app.focus, Focus::Browser);
        app.toggle_tree();
        assert_eq!(app.focus, Focus::Browser);
        app.toggle_tree();
        assert_eq!(app.focus, Focus::Browser);
        assert!(app.show_tree);

        app.focus = Focus::Form;
        app.toggle_tree();
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn table_scrolling_reaches_past_the_first_screen() {
        let mut rows = String::from("a,b\n");
        for i in 0..100 {
            rows.push_str(&format!("{i},{i}\n"));
        }
        let file = csv_file(&rows);
        let mut app = app_with(&file);

        for _ in 0..150 {
            app.scroll_table_down();
        }
        assert_eq!(app.table.row_offset, 99);
        app.scroll_table_up();
        assert_eq!(app.table.row_offset, 98);

        app.scroll_table_right();
        assert_eq!(app.table.col_offset, 1);
        app.scroll_table_left();
        assert_eq!(app.table.col_offset, 0);
    }

    #[test]
    fn new_with_directory_roots_the_browser() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("data.csv"), "a\n1\n").unwrap();
        let app = App::new(Some(dir.path().to_path_buf()));
        assert_eq!(app.file_browser.current_dir, dir.path());
        assert!(app.csv_file.is_none());
    }

    #[test]
    fn new_with_file_selects_it_immediately() {
        let file = five_row_file();
        let app = App::new(Some(file.path().to_path_buf()));
        assert_eq!(app.dataset.row_count(), 5);
        assert_eq!(app.csv_file.as_deref(), Some(file.path()));
    }

    #[test]
    fn clear_plot_empties_the_region() {
        let file = five_row_file();
        let mut app = app_with(&file);
        app.form.x.filter = "a".to_string();
        app.form.y.filter = "b".to_string();
        app.trigger_plot();
        app.clear_plot();
        assert!(matches!(app.plot, PlotContent::Empty));
    }
}
