//! Plot form - axis/color/kind selections with column-name autocomplete.
//!
//! Each field pairs free-typed filter text with a suggestion list. Typing
//! narrows the list by case-insensitive prefix; Up/Down pick a suggestion.
//! The effective value is the picked suggestion, or the raw text when
//! nothing is picked, so unknown column names flow through to the plot
//! boundary instead of being silently dropped.

pub mod ui;

use crate::error::{Result, SiroccoError};
use crate::plot::{PlotBackend, PlotKind, PlotRequest};

/// Which form field holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// X axis column.
    #[default]
    X,
    /// Y axis column.
    Y,
    /// Optional color/group column.
    Color,
    /// Plot kind.
    Kind,
}

impl FormField {
    /// Next field in Tab order.
    pub fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Color,
            Self::Color => Self::Kind,
            Self::Kind => Self::X,
        }
    }

    /// Previous field in Tab order.
    pub fn prev(self) -> Self {
        match self {
            Self::X => Self::Kind,
            Self::Y => Self::X,
            Self::Color => Self::Y,
            Self::Kind => Self::Color,
        }
    }

    /// Field label shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X axis",
            Self::Y => "Y axis",
            Self::Color => "Color by",
            Self::Kind => "Plot type",
        }
    }
}

/// A text field with prefix-filtered suggestions.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    /// Typed filter text.
    pub filter: String,
    /// Full suggestion list.
    pub options: Vec<String>,
    /// Index into `filtered()` of the picked suggestion, if any.
    pub selected: Option<usize>,
}

impl InputField {
    /// Create a field with a fixed option list.
    pub fn with_options(options: Vec<String>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Suggestions whose name starts with the filter text
    /// (case-insensitive); an empty filter matches everything.
    pub fn filtered(&self) -> Vec<&String> {
        let needle = self.filter.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.to_lowercase().starts_with(&needle))
            .collect()
    }

    /// Append a typed character; any picked suggestion is dropped.
    pub fn insert(&mut self, c: char) {
        self.filter.push(c);
        self.selected = None;
    }

    /// Delete the last typed character.
    pub fn backspace(&mut self) {
        self.filter.pop();
        self.selected = None;
    }

    /// Clear the text and replace the option list.
    pub fn reset(&mut self, options: Vec<String>) {
        self.filter.clear();
        self.selected = None;
        self.options = options;
    }

    /// Move the suggestion pick down, wrapping.
    pub fn select_next(&mut self) {
        let count = self.filtered().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// Move the suggestion pick up, wrapping.
    pub fn select_prev(&mut self) {
        let count = self.filtered().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        });
    }

    /// Effective value: the picked suggestion, else the raw filter text.
    pub fn value(&self) -> &str {
        match self.selected {
            Some(i) => self.filtered().get(i).map(|s| s.as_str()).unwrap_or(""),
            None => self.filter.as_str(),
        }
    }

    /// True when the effective value is empty.
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }
}

/// The four plot inputs plus focus and backend selection.
#[derive(Debug, Clone)]
pub struct PlotForm {
    /// X axis field.
    pub x: InputField,
    /// Y axis field.
    pub y: InputField,
    /// Color/group field.
    pub color: InputField,
    /// Plot kind field.
    pub kind: InputField,
    /// Focused field.
    pub focus: FormField,
    /// Selected rendering backend.
    pub backend: PlotBackend,
}

impl PlotForm {
    /// Create an empty form; the kind field always offers the three chart
    /// kinds.
    pub fn new() -> Self {
        Self {
            x: InputField::default(),
            y: InputField::default(),
            color: InputField::default(),
            kind: InputField::with_options(kind_options()),
            focus: FormField::X,
            backend: PlotBackend::default(),
        }
    }

    /// Reset every field to empty and reload the column suggestion lists,
    /// called whenever the dataset changes. Focus returns to the X field.
    pub fn reset_columns(&mut self, columns: &[String]) {
        self.x.reset(columns.to_vec());
        self.y.reset(columns.to_vec());
        self.color.reset(columns.to_vec());
        self.kind.reset(kind_options());
        self.focus = FormField::X;
    }

    /// The focused field.
    pub fn active_mut(&mut self) -> &mut InputField {
        match self.focus {
            FormField::X => &mut self.x,
            FormField::Y => &mut self.y,
            FormField::Color => &mut self.color,
            FormField::Kind => &mut self.kind,
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Cycle the rendering backend.
    pub fn cycle_backend(&mut self) {
        self.backend = self.backend.next();
    }

    /// Build a plot request from the current selections.
    ///
    /// X and Y are required; kind defaults to scatter when the field is
    /// empty; color is optional. Unknown kind text is rejected here, while
    /// unknown column names are left for the data lookup to report.
    pub fn request(&self) -> Result<PlotRequest> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(SiroccoError::EmptyPlot(
                "select X and Y columns first".to_string(),
            ));
        }
        let kind = PlotKind::from_input(self.kind.value())?;
        let color = (!self.color.is_empty()).then(|| self.color.value().to_string());

        Ok(PlotRequest {
            x: self.x.value().to_string(),
            y: self.y.value().to_string(),
            color,
            kind,
        })
    }
}

impl Default for PlotForm {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_options() -> Vec<String> {
    vec!["scatter".to_string(), "line".to_string(), "bar".to_string()]
}
