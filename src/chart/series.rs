use crate::table::Projection;

/// The points of a projection, ready to plot.
///
/// x is the row index and the label is the x tick for that index.
/// Scores are never parsed: each distinct score text is a level on
/// the y axis, in order of first appearance, and a point's y is the
/// index of its level.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<f64>,
    levels: Vec<String>,
}

impl ChartSeries {
    pub fn new(projection: &Projection) -> Self {
        let mut levels: Vec<String> = Vec::new();
        let values = projection
            .scores
            .iter()
            .map(|s| match levels.iter().position(|l| l == s) {
                Some(idx) => idx as f64,
                None => {
                    levels.push(s.clone());
                    (levels.len() - 1) as f64
                }
            })
            .collect();

        Self {
            labels: projection.labels.clone(),
            values,
            levels,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// y position of every point.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Distinct score texts, lowest on the axis first.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Lower and upper y bound. A single level is padded by half a unit
    /// on each side so it sits in the middle of the chart.
    pub fn y_bounds(&self) -> [f64; 2] {
        let hi = self.levels.len().saturating_sub(1) as f64;
        if hi > 0.0 { [0.0, hi] } else { [-0.5, 0.5] }
    }

    /// Up to `count` y ticks as `(value, label)`, lowest first.
    ///
    /// With more levels than `count` the ticks are spread evenly and
    /// always include the first and last level. An empty series has
    /// none.
    pub fn y_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let n = self.levels.len();
        if n == 0 || count == 0 {
            return vec![];
        }
        let tick = |i: usize| (i as f64, self.levels[i].clone());
        if n <= count {
            return (0..n).map(tick).collect();
        }
        if count == 1 {
            return vec![tick(n - 1)];
        }
        let mut picked: Vec<usize> = (0..count)
            .map(|k| ((k * (n - 1)) as f64 / (count - 1) as f64).round() as usize)
            .collect();
        picked.dedup();
        picked.into_iter().map(tick).collect()
    }
}
