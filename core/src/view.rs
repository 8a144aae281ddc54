//! The expanded candidate view.
//!
//! `ExpandedCandidateView` ties the pure pieces together: it owns the
//! candidate list, lays out the current page with [`layout`], keeps page
//! history in a [`Pager`] and pushes the result to an injected
//! [`CandidateRenderer`]. The host keyboard controller only talks to this
//! type.

use anyhow::Result;
use tracing::debug;

use crate::candidate::Candidate;
use crate::config::GridConfig;
use crate::keys::{FunctionalKey, KeyResult};
use crate::layout::{layout, GridMetrics, PageLayout, Placement};
use crate::pager::Pager;
use crate::renderer::{CandidateRenderer, ViewGeometry};

/// Why the host is showing candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    None,
    /// Completions and corrections for the word being typed
    CompletionCorrection,
    /// Next-word predictions after a commit
    Prediction,
}

/// What lies under a point in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Global index of a placed candidate
    Candidate(usize),
    Key(FunctionalKey),
}

pub struct ExpandedCandidateView<R: CandidateRenderer> {
    renderer: R,
    config: GridConfig,
    metrics: GridMetrics,
    geometry: ViewGeometry,
    candidates: Vec<Candidate>,
    pager: Pager,
    page: PageLayout,
    state: ViewState,
    visible: bool,
}

impl<R: CandidateRenderer> ExpandedCandidateView<R> {
    /// Create a view with the default 4x10 grid.
    pub fn new(renderer: R) -> Self {
        Self::build(renderer, GridConfig::default())
    }

    /// Create a view with a custom grid. The view has zero size until the
    /// first `resize`. Fails if the grid cannot hold a candidate on every
    /// functional key's row.
    pub fn with_config(renderer: R, config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(renderer, config))
    }

    fn build(renderer: R, config: GridConfig) -> Self {
        Self {
            renderer,
            metrics: GridMetrics::new(config.rows, config.cells_per_row, 0, 0),
            config,
            geometry: ViewGeometry::default(),
            candidates: Vec::new(),
            pager: Pager::new(),
            page: PageLayout::default(),
            state: ViewState::None,
            visible: false,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    pub fn geometry(&self) -> ViewGeometry {
        self.geometry
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn set_state(&mut self, state: ViewState) {
        self.state = state;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate_at(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Current page index (0-based).
    pub fn current_page(&self) -> usize {
        self.pager.page()
    }

    /// Index of the first candidate on the current page.
    pub fn page_start(&self) -> usize {
        self.pager.page_start()
    }

    /// Index of the first candidate not on the current page.
    pub fn next_start(&self) -> usize {
        self.pager.next_start()
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Layout of the page currently displayed.
    pub fn layout(&self) -> &PageLayout {
        &self.page
    }

    /// Placed candidates on the current page, in layout order.
    pub fn placed(&self) -> impl Iterator<Item = (&Placement, &Candidate)> {
        self.page
            .placements
            .iter()
            .filter_map(|p| self.candidates.get(p.index).map(|c| (p, c)))
    }

    /// Show a new candidate list, starting a fresh page history at `start`.
    pub fn show_candidates(&mut self, candidates: Vec<Candidate>, start: usize) {
        self.pager.reset();
        self.candidates = candidates;
        self.show_page(start);
    }

    /// Show the next page. Returns false if every candidate is already shown.
    pub fn page_down(&mut self) -> bool {
        match self.pager.advance() {
            Some(start) => {
                debug!(page = self.pager.page(), start, "page down");
                self.show_page(start);
                true
            }
            None => false,
        }
    }

    /// Show the previous page. Returns false on the first page.
    pub fn page_up(&mut self) -> bool {
        match self.pager.retreat() {
            Some(start) => {
                debug!(page = self.pager.page(), start, "page up");
                self.show_page(start);
                true
            }
            None => false,
        }
    }

    /// Drop all candidates and page history and hide the view.
    pub fn close(&mut self) {
        self.candidates.clear();
        self.pager.reset();
        self.page = PageLayout::default();
        self.renderer.clear();
        self.set_visible(false);
    }

    /// Recompute cell and key sizes for a new view size.
    ///
    /// Candidates already on screen are not re-laid out; the new sizes take
    /// effect on the next page shown.
    pub fn resize(&mut self, width: u32, height: u32) {
        let row_width = width.saturating_sub(self.config.reserved_key_width);
        self.metrics.cell_width = row_width / self.config.cells_per_row.max(1) as u32;
        self.metrics.cell_height = height / self.config.rows.max(1) as u32;
        self.geometry = ViewGeometry {
            width,
            height,
            row_width,
            row_height: self.metrics.cell_height,
            key_width: self.config.reserved_key_width,
            key_height: self.metrics.cell_height,
        };
        debug!(
            width,
            height,
            cell_width = self.metrics.cell_width,
            cell_height = self.metrics.cell_height,
            "resize expanded view"
        );
        self.renderer.resize(&self.geometry);
    }

    /// Handle a press on one of the functional keys.
    pub fn press(&mut self, key: FunctionalKey) -> KeyResult {
        let changed = match key {
            FunctionalKey::PageUp => self.page_up(),
            FunctionalKey::PageDown => self.page_down(),
            FunctionalKey::Backspace | FunctionalKey::Enter => return KeyResult::Forward(key),
        };
        if changed {
            KeyResult::Handled
        } else {
            KeyResult::Ignored
        }
    }

    /// Find the candidate or functional key under a point, in view pixels.
    ///
    /// Keys follow the current size; candidates keep the row height of the
    /// layout they were placed with until the next page is shown.
    pub fn hit_test(&self, x: u32, y: u32) -> Option<Hit> {
        if !self.visible {
            return None;
        }
        if x >= self.geometry.row_width {
            let row = row_at(y, self.metrics.cell_height, self.config.rows)?;
            return FunctionalKey::for_row(row).map(Hit::Key);
        }
        let row = row_at(y, self.page.cell_height, self.config.rows)?;
        let mut left = 0u32;
        for placement in self.page.row(row) {
            let right = left.saturating_add(placement.width);
            if x < right {
                return Some(Hit::Candidate(placement.index));
            }
            left = right;
        }
        None
    }

    fn show_page(&mut self, start: usize) {
        self.set_visible(true);
        self.renderer.clear();

        let metrics = self.metrics;
        let renderer = &mut self.renderer;
        let page = layout(&self.candidates, start, metrics, |c| {
            renderer.measure(c, metrics.cell_height)
        });
        for placement in &page.placements {
            renderer.place(placement, &self.candidates[placement.index], metrics.cell_height);
        }

        debug!(
            page = self.pager.page(),
            start,
            next_start = page.next_start,
            rows = page.rows_used(),
            "show candidate page"
        );
        self.pager.record(&page, self.candidates.len());
        self.page = page;
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.renderer.set_visible(visible);
        }
    }
}

fn row_at(y: u32, row_height: u32, rows: usize) -> Option<usize> {
    if row_height == 0 {
        return None;
    }
    let row = (y / row_height) as usize;
    (row < rows).then_some(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renderer that measures each character as 10px and records calls.
    #[derive(Default)]
    struct FakeRenderer {
        placed: Vec<Placement>,
        visible: bool,
        geometry: Option<ViewGeometry>,
        clears: usize,
    }

    impl CandidateRenderer for FakeRenderer {
        fn measure(&mut self, candidate: &Candidate, _height: u32) -> u32 {
            candidate.text.chars().count() as u32 * 10
        }

        fn clear(&mut self) {
            self.placed.clear();
            self.clears += 1;
        }

        fn place(&mut self, placement: &Placement, _candidate: &Candidate, _height: u32) {
            self.placed.push(*placement);
        }

        fn resize(&mut self, geometry: &ViewGeometry) {
            self.geometry = Some(*geometry);
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    fn words(n: usize, len: usize) -> Vec<Candidate> {
        (0..n).map(|_| Candidate::new("x".repeat(len))).collect()
    }

    fn sized_view() -> ExpandedCandidateView<FakeRenderer> {
        let mut view = ExpandedCandidateView::new(FakeRenderer::default());
        // (620 - 120) / 10 = 50px cells, 160 / 4 = 40px rows
        view.resize(620, 160);
        view
    }

    #[test]
    fn test_resize_geometry() {
        let view = sized_view();
        assert_eq!(view.metrics().cell_width, 50);
        assert_eq!(view.metrics().cell_height, 40);

        let geometry = view.renderer().geometry.unwrap();
        assert_eq!(geometry.row_width, 500);
        assert_eq!(geometry.row_height, 40);
        assert_eq!(geometry.key_width, 120);
        assert_eq!(geometry.key_height, 40);
    }

    #[test]
    fn test_resize_narrower_than_keys() {
        let mut view = ExpandedCandidateView::new(FakeRenderer::default());
        view.resize(100, 10);
        assert_eq!(view.metrics().cell_width, 0);
        assert_eq!(view.geometry().row_width, 0);
        assert_eq!(view.metrics().cell_height, 2);
    }

    #[test]
    fn test_show_pushes_layout_to_renderer() {
        let mut view = sized_view();
        view.show_candidates(words(3, 4), 0);

        assert!(view.is_visible());
        assert!(view.renderer().visible);
        assert_eq!(view.renderer().placed, view.layout().placements);
        assert_eq!(view.placed().count(), 3);

        view.page_down();
        assert_eq!(view.renderer().clears, 1);
    }

    #[test]
    fn test_press_routes_keys() {
        let mut view = sized_view();
        // 5-char words take one 50px cell: 40 per page.
        view.show_candidates(words(50, 5), 0);

        assert_eq!(view.press(FunctionalKey::PageUp), KeyResult::Ignored);
        assert_eq!(view.press(FunctionalKey::PageDown), KeyResult::Handled);
        assert_eq!(view.page_start(), 40);
        assert_eq!(view.press(FunctionalKey::PageDown), KeyResult::Ignored);
        assert_eq!(
            view.press(FunctionalKey::Enter),
            KeyResult::Forward(FunctionalKey::Enter)
        );
        assert_eq!(
            view.press(FunctionalKey::Backspace),
            KeyResult::Forward(FunctionalKey::Backspace)
        );
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_close_hides_and_clears() {
        let mut view = sized_view();
        view.set_state(ViewState::Prediction);
        view.show_candidates(words(50, 5), 0);
        view.page_down();

        view.close();
        assert!(!view.is_visible());
        assert!(!view.renderer().visible);
        assert!(view.renderer().placed.is_empty());
        assert!(view.candidates().is_empty());
        assert_eq!(view.current_page(), 0);
        assert_eq!(view.next_start(), 0);
        assert!(view.layout().is_empty());
        assert_eq!(view.state(), ViewState::Prediction);
    }

    #[test]
    fn test_hit_test() {
        let mut view = sized_view();
        // Row 0 is 3 + 4 + 3 cells; the 4-char word opens row 1.
        view.show_candidates(
            vec![
                Candidate::new("x".repeat(12)),
                Candidate::new("x".repeat(20)),
                Candidate::new("x".repeat(15)),
                Candidate::new("x".repeat(4)),
            ],
            0,
        );

        assert_eq!(view.hit_test(0, 0), Some(Hit::Candidate(0)));
        assert_eq!(view.hit_test(149, 39), Some(Hit::Candidate(0)));
        assert_eq!(view.hit_test(150, 10), Some(Hit::Candidate(1)));
        assert_eq!(view.hit_test(499, 10), Some(Hit::Candidate(2)));
        assert_eq!(view.hit_test(10, 45), Some(Hit::Candidate(3)));
        assert_eq!(view.hit_test(200, 45), None);
        assert_eq!(view.hit_test(500, 0), Some(Hit::Key(FunctionalKey::Backspace)));
        assert_eq!(view.hit_test(600, 130), Some(Hit::Key(FunctionalKey::PageDown)));
        assert_eq!(view.hit_test(10, 160), None);
    }

    #[test]
    fn test_hit_test_uses_layout_row_height_after_resize() {
        let mut view = sized_view();
        // Ten 1-cell words fill row 0; the eleventh sits at the start of row 1.
        view.show_candidates(words(11, 5), 0);
        view.resize(620, 320);

        // Candidates stay on their 40px rows until the next page is shown.
        assert_eq!(view.hit_test(10, 45), Some(Hit::Candidate(10)));
        assert_eq!(view.hit_test(10, 10), Some(Hit::Candidate(0)));
        // Keys are resized right away to 80px.
        assert_eq!(view.hit_test(500, 45), Some(Hit::Key(FunctionalKey::Backspace)));
        assert_eq!(view.hit_test(500, 85), Some(Hit::Key(FunctionalKey::Enter)));

        view.show_candidates(words(11, 5), 0);
        assert_eq!(view.hit_test(10, 45), Some(Hit::Candidate(0)));
        assert_eq!(view.hit_test(10, 85), Some(Hit::Candidate(10)));
    }

    #[test]
    fn test_with_config_rejects_unusable_grids() {
        let zero_rows = GridConfig {
            rows: 0,
            ..GridConfig::default()
        };
        assert!(ExpandedCandidateView::with_config(FakeRenderer::default(), zero_rows).is_err());

        let zero_cells = GridConfig {
            cells_per_row: 0,
            ..GridConfig::default()
        };
        assert!(ExpandedCandidateView::with_config(FakeRenderer::default(), zero_cells).is_err());

        let too_few_rows = GridConfig {
            rows: 3,
            ..GridConfig::default()
        };
        assert!(ExpandedCandidateView::with_config(FakeRenderer::default(), too_few_rows).is_err());
    }

    #[test]
    fn test_hit_test_when_hidden() {
        let view = sized_view();
        assert_eq!(view.hit_test(0, 0), None);
    }
}
