//! Drawing a projection as a line chart.
//!
//! The pipeline only talks to a [`Renderer`]. [`VecRenderer`] keeps what
//! it was handed so callers can look at it later; with the `viewer`
//! feature [`TerminalRenderer`] draws an interactive chart in the
//! terminal.

use std::{cell::RefCell, rc::Rc};

use thiserror::Error;

use crate::table::Projection;

mod series;
mod viewport;

pub use series::ChartSeries;
pub use viewport::{Viewport, ViewportAction};

#[cfg(feature = "viewer")]
mod terminal;
#[cfg(feature = "viewer")]
mod widget;

#[cfg(feature = "viewer")]
pub use terminal::{TerminalRenderer, ViewerCommand, key_command};
#[cfg(feature = "viewer")]
pub use widget::LineChart;

/// ChartError is the error type for renderer implementations.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Borrow Mut Error: {0}")]
    BorrowMutError(#[from] std::cell::BorrowMutError),
}

/// Renderers are where a projection ends up once it has been loaded
/// and projected.
pub trait Renderer {
    /// Draw the labels against the scores as a single line.
    ///
    /// `projection.labels` and `projection.scores` have the same length,
    /// which may be zero. Interactive renderers return once the user
    /// closes the chart.
    fn render(&mut self, projection: &Projection) -> Result<(), ChartError>;
}

/// VecRenderer is a renderer that appends every
/// projection it is asked to draw to a vector.
pub struct VecRenderer {
    records: Rc<RefCell<Vec<Projection>>>,
}

impl VecRenderer {
    /// Create a new storage for the renderer
    /// that can be introspected later.
    pub fn new_storage() -> Rc<RefCell<Vec<Projection>>> {
        Rc::new(RefCell::new(vec![]))
    }

    /// Create a new VecRenderer with the provided storage
    pub fn new(records: Rc<RefCell<Vec<Projection>>>) -> Self {
        Self { records }
    }
}

impl Renderer for VecRenderer {
    fn render(&mut self, projection: &Projection) -> Result<(), ChartError> {
        self.records.try_borrow_mut()?.push(projection.clone());
        Ok(())
    }
}
