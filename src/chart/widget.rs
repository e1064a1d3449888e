use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use super::{ChartSeries, Viewport};

/// Widest the y tick gutter is allowed to get.
const MAX_GUTTER: usize = 12;

/// Plot rows kept free before x labels start getting cut short.
const MIN_PLOT_ROWS: u16 = 3;

/// A single series line chart with categorical x ticks.
///
/// ```text
///   T b ┤      ⡠⠊⠑⢄
///   r   │   ⡠⠊     ⠑⢄
///   u   │⡠⠊          ⠑⠢
///   . a └──────────────
///         4     3     1
///               O
///         E           E
///              Hand
/// ```
///
/// The y title runs down the left edge, x tick labels are written
/// top to bottom under the axis, and the plot gets whatever room is
/// left. Labels that would land on an already used column are skipped.
pub struct LineChart<'a> {
    series: &'a ChartSeries,
    viewport: Viewport,
    x_title: &'a str,
    y_title: &'a str,
}

impl<'a> LineChart<'a> {
    pub fn new(series: &'a ChartSeries) -> Self {
        Self {
            series,
            viewport: Viewport::new(series.len()),
            x_title: "",
            y_title: "",
        }
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn x_title(mut self, title: &'a str) -> Self {
        self.x_title = title;
        self
    }

    pub fn y_title(mut self, title: &'a str) -> Self {
        self.y_title = title;
        self
    }
}

/// Where everything goes inside the widget's area.
#[derive(Debug, PartialEq, Eq)]
struct ChartLayout {
    plot: Rect,
    gutter: Rect,
    strip: Rect,
    title_row: u16,
}

impl ChartLayout {
    // Rows: plot, axis line, label strip, x title.
    // Columns: y title, gutter, axis line, plot.
    fn compute(area: Rect, strip_height: u16, gutter_width: u16) -> Option<Self> {
        let plot_height = area.height.checked_sub(strip_height + 2)?;
        let plot_width = area.width.checked_sub(gutter_width + 2)?;
        if plot_height == 0 || plot_width == 0 {
            return None;
        }
        let plot = Rect::new(area.x + gutter_width + 2, area.y, plot_width, plot_height);
        Some(Self {
            plot,
            gutter: Rect::new(area.x + 1, area.y, gutter_width, plot_height),
            strip: Rect::new(plot.x, plot.bottom() + 1, plot_width, strip_height),
            title_row: area.bottom() - 1,
        })
    }
}

impl Widget for LineChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let range = self.viewport.range();
        let labels = &self.series.labels()[range.clone()];
        let values = &self.series.values()[range.clone()];

        let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        // Labels get the room they need. Only when that would squeeze
        // the plot under MIN_PLOT_ROWS are they cut short.
        let strip_height = u16::try_from(longest)
            .unwrap_or(u16::MAX)
            .min(area.height.saturating_sub(2 + MIN_PLOT_ROWS));

        // Tick count depends on plot height, which does not depend on
        // the gutter, so size the plot rows first.
        let rows = area.height.saturating_sub(strip_height + 2);
        let tick_count = match rows {
            0 => 0,
            1 => 1,
            r => ((r as usize - 1) / 4 + 1).clamp(2, 6),
        };
        let ticks = self.series.y_ticks(tick_count);
        let gutter_width = ticks
            .iter()
            .map(|(_, l)| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_GUTTER)
            .min(area.width as usize / 4) as u16;

        let Some(layout) = ChartLayout::compute(area, strip_height, gutter_width) else {
            // Too small for a chart, keep at least the x title.
            draw_centered(buf, area.x, area.width, area.bottom() - 1, self.x_title);
            return;
        };
        let plot = layout.plot;
        let [y_lo, y_hi] = self.series.y_bounds();
        let row_of = |v: f64| -> u16 {
            let frac = ((v - y_lo) / (y_hi - y_lo)).clamp(0.0, 1.0);
            plot.bottom() - 1 - (frac * f64::from(plot.height - 1)).round() as u16
        };
        let first = range.start as f64;
        let span = range.len().saturating_sub(1) as f64;
        let col_of = |i: usize| -> u16 {
            if span == 0.0 {
                plot.x + plot.width / 2
            } else {
                plot.x + (i as f64 / span * f64::from(plot.width - 1)).round() as u16
            }
        };

        // Axes
        for y in plot.y..plot.bottom() {
            buf[(plot.x - 1, y)].set_symbol("│");
        }
        for x in plot.x..plot.right() {
            buf[(x, plot.bottom())].set_symbol("─");
        }
        buf[(plot.x - 1, plot.bottom())].set_symbol("└");

        // Y ticks, right aligned in the gutter. Lowest tick wins a row.
        let mut used_rows: Vec<u16> = Vec::with_capacity(ticks.len());
        for (v, label) in &ticks {
            let y = row_of(*v);
            if used_rows.contains(&y) {
                continue;
            }
            used_rows.push(y);
            buf[(plot.x - 1, y)].set_symbol("┤");
            let text: String = label.chars().take(layout.gutter.width as usize).collect();
            let x = layout.gutter.right() - text.chars().count() as u16;
            buf.set_string(x, y, text, Style::default());
        }

        // X ticks, rotated: one character per row.
        let mut last_col: Option<u16> = None;
        for (i, label) in labels.iter().enumerate() {
            let x = col_of(i);
            if last_col == Some(x) {
                continue;
            }
            last_col = Some(x);
            for (k, ch) in label.chars().take(layout.strip.height as usize).enumerate() {
                buf[(x, layout.strip.y + k as u16)].set_char(ch);
            }
        }

        draw_centered(buf, plot.x, plot.width, layout.title_row, self.x_title);
        draw_vertical(buf, area.x, plot, self.y_title);

        if values.is_empty() {
            return;
        }
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (first + i as f64, *v))
            .collect();
        let x_bounds = if span == 0.0 {
            [first - 1.0, first + 1.0]
        } else {
            [first, first + span]
        };
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds([y_lo, y_hi])
            .paint(|ctx| {
                if points.len() == 1 {
                    ctx.draw(&Points {
                        coords: &points,
                        color: Color::Reset,
                    });
                }
                for pair in points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color: Color::Reset,
                    });
                }
            })
            .render(plot, buf);
    }
}

fn draw_centered(buf: &mut Buffer, x: u16, width: u16, y: u16, text: &str) {
    let text: String = text.chars().take(width as usize).collect();
    let pad = (width as usize - text.chars().count()) / 2;
    buf.set_string(x + pad as u16, y, text, Style::default());
}

fn draw_vertical(buf: &mut Buffer, x: u16, plot: Rect, text: &str) {
    let len = text.chars().count().min(plot.height as usize);
    let top = plot.y + (plot.height - len as u16) / 2;
    for (k, ch) in text.chars().take(len).enumerate() {
        buf[(x, top + k as u16)].set_char(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ViewportAction;
    use crate::table::Projection;

    fn series(labels: &[&str], scores: &[&str]) -> ChartSeries {
        ChartSeries::new(&Projection {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            scores: scores.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn render(chart: LineChart<'_>, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        chart.render(buf.area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn column_text(buf: &Buffer, x: u16, rows: std::ops::Range<u16>) -> String {
        rows.map(|y| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_layout() {
        let layout = ChartLayout::compute(Rect::new(0, 0, 40, 20), 3, 2).unwrap();
        assert_eq!(Rect::new(4, 0, 36, 15), layout.plot);
        assert_eq!(Rect::new(1, 0, 2, 15), layout.gutter);
        assert_eq!(Rect::new(4, 16, 36, 3), layout.strip);
        assert_eq!(19, layout.title_row);
        assert_eq!(None, ChartLayout::compute(Rect::new(0, 0, 4, 4), 3, 2));
    }

    #[test]
    fn test_titles() {
        let s = series(&["4 E", "3 O"], &["10", "7"]);
        let buf = render(LineChart::new(&s).x_title("Hand").y_title("Truco Score"), 40, 20);

        assert!(row_text(&buf, 19).contains("Hand"));
        assert!(column_text(&buf, 0, 0..20).contains("Truco Score"));
    }

    #[test]
    fn test_rotated_labels() {
        let s = series(&["4 E", "3 O"], &["10", "7"]);
        let buf = render(LineChart::new(&s), 40, 20);

        // Strip is the three rows above the title row.
        let columns: Vec<(u16, String)> = (0..40)
            .map(|x| (x, column_text(&buf, x, 16..19)))
            .collect();
        let four = columns.iter().find(|(_, t)| t == "4 E").map(|(x, _)| *x);
        let three = columns.iter().find(|(_, t)| t == "3 O").map(|(x, _)| *x);
        assert!(four.is_some(), "no column reads `4 E`");
        assert!(three.is_some(), "no column reads `3 O`");
        assert!(four < three);
    }

    #[test]
    fn test_y_ticks_in_gutter() {
        let s = series(&["4 E", "3 O"], &["10", "7"]);
        let buf = render(LineChart::new(&s), 40, 20);
        // Scores are levels in table order: the first at the bottom,
        // right above the axis, the second on the top row.
        assert!(row_text(&buf, 14).starts_with(" 10┤"));
        assert!(row_text(&buf, 0).starts_with("  7┤"));
    }

    #[test]
    fn test_line_is_drawn() {
        let s = series(&["a", "b", "c"], &["0", "1", "0"]);
        let buf = render(LineChart::new(&s), 30, 15);
        let braille = (0..15u16)
            .flat_map(|y| (0..30u16).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                buf[(x, y)]
                    .symbol()
                    .chars()
                    .any(|c| ('\u{2801}'..='\u{28ff}').contains(&c))
            })
            .count();
        assert!(braille > 0);
    }

    #[test]
    fn test_empty_series() {
        let s = series(&[], &[]);
        let buf = render(LineChart::new(&s).x_title("Hand").y_title("Truco Score"), 40, 20);
        assert!(row_text(&buf, 19).contains("Hand"));
        // Axes with no line.
        assert!(row_text(&buf, 18).contains('└'));
    }

    #[test]
    fn test_single_point() {
        let s = series(&["4 E"], &["10"]);
        let buf = render(LineChart::new(&s), 20, 10);
        // Centred under the plot, in the three strip rows.
        assert_eq!("4 E", column_text(&buf, 12, 6..9));
    }

    #[test]
    fn test_crowded_labels_skip() {
        let labels: Vec<String> = (0..100).map(|i| format!("{i:02}")).collect();
        let scores: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let s = ChartSeries::new(&Projection { labels, scores });
        // Does not panic with far more labels than columns.
        let buf = render(LineChart::new(&s), 30, 12);
        assert!(column_text(&buf, 0, 0..12).trim().is_empty());
    }

    #[test]
    fn test_viewport_limits_labels() {
        let s = series(&["a", "b", "c", "d"], &["1", "2", "3", "4"]);
        let mut v = Viewport::new(s.len());
        v.apply(ViewportAction::ZoomIn);
        v.apply(ViewportAction::PanRight);
        let buf = render(LineChart::new(&s).viewport(v), 30, 12);
        let strip = row_text(&buf, 10);
        assert!(!strip.contains('a'));
        assert!(strip.contains('c'));
        assert!(strip.contains('d'));
    }

    #[test]
    fn test_long_labels_fit() {
        let s = series(
            &["1 e   1 b   7 e", "1 e   1 b   7 o"],
            &["1.000000", "0.990000"],
        );
        let buf = render(LineChart::new(&s).x_title("Hand").y_title("Truco Score"), 80, 24);
        for label in ["1 e   1 b   7 e", "1 e   1 b   7 o"] {
            assert!(
                (0..80).any(|x| column_text(&buf, x, 0..24).contains(label)),
                "`{label}` is cut short"
            );
        }
        assert!(row_text(&buf, 23).contains("Hand"));
    }

    #[test]
    fn test_labels_cut_only_when_plot_would_vanish() {
        let s = series(&["1 e   1 b   7 e"], &["1.000000"]);
        // 10 rows: 2 for axis and title, MIN_PLOT_ROWS for the plot.
        let buf = render(LineChart::new(&s), 40, 10);
        // Strip keeps five rows: the first five characters survive.
        assert!((0..40).any(|x| column_text(&buf, x, 4..9) == "1 e  "));
        assert!(!(0..40).any(|x| column_text(&buf, x, 0..10).contains("1 e   1 b   7 e")));
        assert!(row_text(&buf, 3).contains('└'));
    }

    #[test]
    fn test_tiny_area() {
        let s = series(&["4 E", "3 O"], &["10", "7"]);
        for (w, h) in [(0, 0), (1, 1), (3, 3), (5, 2), (40, 3)] {
            render(LineChart::new(&s).x_title("Hand").y_title("Truco Score"), w, h);
        }
    }
}
