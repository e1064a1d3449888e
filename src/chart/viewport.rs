use std::ops::Range;

/// Smallest window zooming in will go to.
const MIN_VISIBLE: usize = 2;

/// Things the user can do to the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportAction {
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    Reset,
}

/// The window of point indices currently on screen.
///
/// Always inside `0..total`, and never empty unless there is nothing
/// to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    start: usize,
    len: usize,
    total: usize,
}

impl Viewport {
    /// A viewport showing all `total` points.
    pub fn new(total: usize) -> Self {
        Self {
            start: 0,
            len: total,
            total,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    pub fn apply(&mut self, action: ViewportAction) {
        match action {
            ViewportAction::PanLeft => {
                self.start = self.start.saturating_sub(self.step());
            }
            ViewportAction::PanRight => {
                self.start = (self.start + self.step()).min(self.total - self.len);
            }
            ViewportAction::ZoomIn => {
                let len = (self.len / 2).max(MIN_VISIBLE).min(self.len);
                self.resize(len);
            }
            ViewportAction::ZoomOut => {
                let len = self.len.saturating_mul(2).min(self.total);
                self.resize(len);
            }
            ViewportAction::Reset => *self = Viewport::new(self.total),
        }
    }

    // A quarter of the window, at least one point.
    fn step(&self) -> usize {
        (self.len / 4).max(1)
    }

    // Change the window size keeping its centre where it was.
    fn resize(&mut self, len: usize) {
        let centre = self.start + self.len / 2;
        self.len = len;
        self.start = centre
            .saturating_sub(len / 2)
            .min(self.total - self.len);
    }
}
