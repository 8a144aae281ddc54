//! Rendering collaborator interface.
//!
//! The view never draws anything itself. A platform adapter implements
//! `CandidateRenderer` to measure candidates and to create, size and remove
//! the visual elements for rows, candidates and functional keys.

use crate::candidate::Candidate;
use crate::layout::Placement;

/// Dimensions pushed to the renderer whenever the view is resized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewGeometry {
    /// Whole view size
    pub width: u32,
    pub height: u32,
    /// Size of each candidate row (view width minus the key column)
    pub row_width: u32,
    pub row_height: u32,
    /// Size of each functional key
    pub key_width: u32,
    pub key_height: u32,
}

pub trait CandidateRenderer {
    /// Natural rendered width in pixels of a candidate drawn at `height`.
    fn measure(&mut self, candidate: &Candidate, height: u32) -> u32;

    /// Remove every candidate from every row.
    fn clear(&mut self);

    /// Draw one candidate at its final row and width.
    fn place(&mut self, placement: &Placement, candidate: &Candidate, height: u32);

    /// Apply new row and key dimensions. Placed candidates are left alone.
    fn resize(&mut self, geometry: &ViewGeometry);

    fn set_visible(&mut self, visible: bool);
}

impl<R: CandidateRenderer + ?Sized> CandidateRenderer for Box<R> {
    fn measure(&mut self, candidate: &Candidate, height: u32) -> u32 {
        (**self).measure(candidate, height)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn place(&mut self, placement: &Placement, candidate: &Candidate, height: u32) {
        (**self).place(placement, candidate, height)
    }

    fn resize(&mut self, geometry: &ViewGeometry) {
        (**self).resize(geometry)
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }
}
