//! Terminal renderer for the expanded candidate grid.
//!
//! `TextRenderer` implements `CandidateRenderer` on a character grid: one
//! terminal column stands for a fixed number of pixels, candidates are
//! measured by their Unicode display width, and each placed candidate is
//! drawn as ` text` padded to its cell width and closed with `│`.

use inputview_core::{
    Candidate, CandidateRenderer, ExpandedCandidateView, FunctionalKey, Placement, ViewGeometry,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod repl;

/// Pixels represented by one terminal column.
pub const DEFAULT_COLUMN_PX: u32 = 10;

#[derive(Debug, Clone)]
pub struct TextRenderer {
    column_px: u32,
    geometry: ViewGeometry,
    /// Drawn candidates per row, left to right: (width px, text)
    rows: Vec<Vec<(u32, String)>>,
    visible: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::with_column_px(DEFAULT_COLUMN_PX)
    }

    pub fn with_column_px(column_px: u32) -> Self {
        Self {
            column_px: column_px.max(1),
            geometry: ViewGeometry::default(),
            rows: Vec::new(),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn columns(&self, px: u32) -> usize {
        (px / self.column_px) as usize
    }

    /// Draw the grid as text, one line per row with its functional key on
    /// the right. A hidden view renders as an empty string.
    pub fn render(&self, rows: usize) -> String {
        if !self.visible {
            return String::new();
        }
        let row_columns = self.columns(self.geometry.row_width);
        let mut out = String::new();
        for row in 0..rows {
            let mut line = String::new();
            if let Some(items) = self.rows.get(row) {
                for (width, text) in items {
                    line.push_str(&draw_cell(text, self.columns(*width)));
                }
            }
            let used = line.width();
            if used < row_columns {
                line.push_str(&" ".repeat(row_columns - used));
            }
            if let Some(key) = FunctionalKey::for_row(row) {
                line.push(' ');
                line.push_str(key.label());
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateRenderer for TextRenderer {
    fn measure(&mut self, candidate: &Candidate, _height: u32) -> u32 {
        // Leading space and trailing separator.
        (candidate.text.width() as u32)
            .saturating_add(2)
            .saturating_mul(self.column_px)
    }

    fn clear(&mut self) {
        self.rows.clear();
    }

    fn place(&mut self, placement: &Placement, candidate: &Candidate, _height: u32) {
        if self.rows.len() <= placement.row {
            self.rows.resize_with(placement.row + 1, Vec::new);
        }
        self.rows[placement.row].push((placement.width, candidate.text.clone()));
    }

    fn resize(&mut self, geometry: &ViewGeometry) {
        self.geometry = *geometry;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// One-line summary of the page on screen, e.g. `page 2 · 40-49 of 50 · Prediction`.
pub fn status_line<R: CandidateRenderer>(view: &ExpandedCandidateView<R>) -> String {
    if !view.is_visible() {
        return "closed".to_string();
    }
    let shown = view.layout().shown();
    let range = if shown.is_empty() {
        "none".to_string()
    } else {
        format!("{}-{}", shown.start, shown.end - 1)
    };
    format!(
        "page {} · {} of {} · {:?}",
        view.current_page() + 1,
        range,
        view.candidates().len(),
        view.state()
    )
}

/// ` text` padded or cut to `columns - 1` display columns, then `│`.
fn draw_cell(text: &str, columns: usize) -> String {
    if columns == 0 {
        return String::new();
    }
    let inner = columns - 1;
    let mut cell = String::with_capacity(columns + 4);
    let mut used = 0;
    for ch in std::iter::once(' ').chain(text.chars()) {
        let w = ch.width().unwrap_or(0);
        if used + w > inner {
            break;
        }
        cell.push(ch);
        used += w;
    }
    cell.push_str(&" ".repeat(inner - used));
    cell.push('│');
    cell
}
