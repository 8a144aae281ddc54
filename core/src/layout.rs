//! Greedy row packing for the candidate grid.
//!
//! The grid is `rows` rows of `cells_per_row` equally wide cells. Candidates
//! are packed left to right, row by row, each taking as many whole cells as
//! its natural width needs. When a candidate does not fit in what is left of
//! a row, the last candidate on that row absorbs the leftover cells and the
//! row is closed. Packing stops when the grid runs out of rows; the index of
//! the first candidate that did not make it is the start of the next page.

use std::ops::Range;

use tracing::{trace, warn};

/// Dimensions of the grid a page is laid out into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub rows: usize,
    pub cells_per_row: usize,
    /// Width of one cell in pixels
    pub cell_width: u32,
    /// Height of one cell (and of a row) in pixels
    pub cell_height: u32,
}

impl GridMetrics {
    pub fn new(rows: usize, cells_per_row: usize, cell_width: u32, cell_height: u32) -> Self {
        Self {
            rows,
            cells_per_row,
            cell_width,
            cell_height,
        }
    }

    /// Width of a full row in pixels.
    pub fn row_width(&self) -> u32 {
        (self.cells_per_row as u32).saturating_mul(self.cell_width)
    }

    /// Number of cells a candidate of the given natural width occupies.
    ///
    /// An unsized grid (cell width 0) is measured as if cells were 1px wide.
    pub fn cells_for(&self, width: u32) -> usize {
        let cell = self.cell_width.max(1);
        width.div_ceil(cell) as usize
    }
}

/// Where one candidate landed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Global index into the candidate list
    pub index: usize,
    /// Row within the grid (0-based)
    pub row: usize,
    /// Cells occupied, including any leftover cells absorbed at row end
    pub cells: usize,
    /// Final width in pixels
    pub width: u32,
}

/// The result of laying out one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub placements: Vec<Placement>,
    /// Index the page was laid out from
    pub start: usize,
    /// Index of the first candidate not shown on this page
    pub next_start: usize,
    /// Row height the page was laid out with
    pub cell_height: u32,
}

impl PageLayout {
    /// Range of global candidate indices shown on this page.
    pub fn shown(&self) -> Range<usize> {
        self.start..self.next_start.max(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of rows that received at least one candidate.
    pub fn rows_used(&self) -> usize {
        self.placements.last().map(|p| p.row + 1).unwrap_or(0)
    }

    /// Placements on the given row, in left-to-right order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.row == row)
    }

    /// Total pixel width used on the given row.
    pub fn row_width(&self, row: usize) -> u32 {
        self.row(row).fold(0u32, |sum, p| sum.saturating_add(p.width))
    }
}

/// Lay out one page of candidates starting at `start`.
///
/// `measure` returns the natural rendered width in pixels of a candidate.
/// A candidate wider than a whole row is never rejected: it is placed alone
/// on its row and overflows it.
pub fn layout<T, F>(candidates: &[T], start: usize, metrics: GridMetrics, mut measure: F) -> PageLayout
where
    F: FnMut(&T) -> u32,
{
    if metrics.rows == 0 || metrics.cells_per_row == 0 {
        return PageLayout {
            placements: Vec::new(),
            start,
            next_start: start,
            cell_height: metrics.cell_height,
        };
    }

    let mut placements: Vec<Placement> = Vec::new();
    let mut row = 0;
    let mut cells_left = metrics.cells_per_row;
    // Index into `placements` of the last candidate on the current row.
    let mut row_tail: Option<usize> = None;
    let mut index = start;

    while index < candidates.len() {
        let cells = metrics.cells_for(measure(&candidates[index]));

        if cells_left < cells {
            if let Some(tail) = row_tail.take() {
                let tail = &mut placements[tail];
                tail.cells += cells_left;
                tail.width = tail
                    .width
                    .saturating_add((cells_left as u32).saturating_mul(metrics.cell_width));
                row += 1;
                if row == metrics.rows {
                    break;
                }
                cells_left = metrics.cells_per_row;
            }
            if cells > cells_left {
                warn!(index, cells, cells_per_row = metrics.cells_per_row, "candidate overflows its row");
            }
        }

        trace!(index, row, cells, "place candidate");
        placements.push(Placement {
            index,
            row,
            cells,
            width: (cells as u32).saturating_mul(metrics.cell_width),
        });
        row_tail = Some(placements.len() - 1);
        cells_left = cells_left.saturating_sub(cells);
        index += 1;

        if cells_left == 0 {
            row += 1;
            if row == metrics.rows {
                break;
            }
            cells_left = metrics.cells_per_row;
            row_tail = None;
        }
    }

    PageLayout {
        placements,
        start,
        next_start: index.max(start),
        cell_height: metrics.cell_height,
    }
}
