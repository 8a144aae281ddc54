//! inputview-core
//!
//! Layout and paging for the expanded candidate view of an on-screen
//! keyboard: a fixed grid of rows, each split into equal cells, that
//! candidates are packed into greedily, with page-up/page-down controls on
//! the right edge.
//!
//! Public API:
//! - `Candidate` - A suggestion shown in the grid
//! - `layout` - Greedy packing of one page into the grid
//! - `Pager` - Page history for backward paging
//! - `ExpandedCandidateView` - Host-facing view over an injected renderer
//! - `CandidateRenderer` - What a platform adapter must provide
//! - `GridConfig` - Grid dimensions, loadable from TOML
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inputview_core::{Candidate, ExpandedCandidateView, FunctionalKey};
//!
//! let mut view = ExpandedCandidateView::new(my_renderer);
//! view.resize(620, 160);
//! view.show_candidates(vec![Candidate::new("hello"), Candidate::new("help")], 0);
//! view.press(FunctionalKey::PageDown);
//! view.close();
//! ```

pub mod candidate;
pub use candidate::{candidates_from_json, Candidate};

pub mod config;
pub use config::GridConfig;

pub mod layout;
pub use layout::{layout, GridMetrics, PageLayout, Placement};

pub mod pager;
pub use pager::Pager;

pub mod keys;
pub use keys::{FunctionalKey, KeyResult};

pub mod renderer;
pub use renderer::{CandidateRenderer, ViewGeometry};

pub mod view;
pub use view::{ExpandedCandidateView, Hit, ViewState};
