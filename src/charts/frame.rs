//! Box-drawn chrome shared by every chart:
//! - title centred in the top rule, subtitle in the bottom rule
//! - one blank row of breathing space above and below the body
//! - body rows padded to the inner width by visible cell count

use crate::core::{
    bounds::value_label_width,
    color::{AnsiCode, colorize},
    config::ChartOptions,
    constants::NO_DATA,
    data::Series,
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

/// Write centred coloured text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: Option<&AnsiCode>) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// One body row.  Kept as runs of plain or painted text so the frame can
/// pad and clip by visible cells without cutting through colour escapes.
#[derive(Debug, Default)]
pub(crate) struct Line {
    runs: Vec<(String, Option<AnsiCode>)>,
    cells: usize,
}

impl Line {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn cells(&self) -> usize {
        self.cells
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.cells += s.chars().count();
        match self.runs.last_mut() {
            Some((text, None)) => text.push_str(s),
            _ => self.runs.push((s.to_owned(), None)),
        }
    }

    /// Left-aligned, clipped to exactly `width` cells.
    pub(crate) fn push_padded(&mut self, s: &str, width: usize) {
        let clipped: String = s.chars().take(width).collect();
        let used = clipped.chars().count();
        self.push_str(&clipped);
        self.push_spaces(width - used);
    }

    pub(crate) fn push_spaces(&mut self, n: usize) {
        self.push_str(&" ".repeat(n));
    }

    /// `n` copies of `glyph`, painted as one run.
    pub(crate) fn push_run(&mut self, glyph: char, n: usize, color: Option<&AnsiCode>) {
        if n == 0 {
            return;
        }
        self.runs
            .push((std::iter::repeat_n(glyph, n).collect(), color.copied()));
        self.cells += n;
    }

    /// Text of the first `width` cells, right-padded to exactly `width`.
    fn fit(&self, width: usize) -> String {
        let mut out = String::new();
        let mut left = width;
        for (text, color) in &self.runs {
            if left == 0 {
                break;
            }
            let taken: String = text.chars().take(left).collect();
            left -= taken.chars().count();
            out.push_str(&colorize(color.as_ref(), &taken));
        }
        out.push_str(&" ".repeat(left));
        out
    }
}

/// Column split shared by the row-per-point layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowLayout {
    pub label: usize,
    pub value: usize,
    pub track: usize,
}

impl RowLayout {
    /// Label column is capped at a third of the inner width; one cell of
    /// margin on each side and one gutter after the label (and the track,
    /// when values are shown).  A value column that cannot fit beside the
    /// label is dropped.
    pub(crate) fn of(data: &Series, options: &ChartOptions) -> Self {
        let inner = options.inner_width();
        let label = data.label_width().min(inner / 3);
        let base = 1 + label + 1 + 1;
        let value = match value_label_width(data, options.decimals) {
            w if options.show_values && base + w + 1 <= inner => w,
            _ => 0,
        };
        let value_cols = if value > 0 { value + 1 } else { 0 };
        Self {
            label,
            value,
            track: inner.saturating_sub(base + value_cols),
        }
    }

    pub(crate) fn push_value(&self, line: &mut Line, value: f64, decimals: usize) {
        if self.value > 0 {
            line.push_spaces(1);
            line.push_str(&format!("{value:>w$.decimals$}", w = self.value));
        }
    }
}

/// Fraction of `cells`, rounded to the nearest cell.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[inline]
pub(crate) fn cells_for(fraction: f64, cells: usize) -> usize {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * cells as f64).round() as usize
}

/// Single row saying there is nothing to draw.
pub(crate) fn no_data() -> Vec<Line> {
    let mut line = Line::new();
    line.push_str(" ");
    line.push_str(NO_DATA);
    vec![line]
}

/// Wrap body rows in the frame.  Rows wider than the inner width are
/// clipped, so every emitted row is exactly `options.width` cells.
pub(crate) fn framed(options: &ChartOptions, body: &[Line]) -> String {
    let inner = options.inner_width();
    let color = options.color.as_ref();
    let blank = format!("{V}{}{V}\n", " ".repeat(inner));
    let mut out = String::with_capacity((body.len() + 4) * (inner + 8) * 3);

    // --- top ---
    out.push_str(TL);
    push_centered(&mut out, &options.title, inner, color);
    out.push_str(TR);
    out.push('\n');
    out.push_str(&blank);

    // --- body ---
    for line in body {
        out.push_str(V);
        out.push_str(&line.fit(inner));
        out.push_str(V);
        out.push('\n');
    }

    // --- bottom ---
    out.push_str(&blank);
    out.push_str(BL);
    match &options.subtitle {
        Some(sub) => push_centered(&mut out, sub, inner, color),
        None => out.push_str(&H.repeat(inner)),
    }
    out.push_str(BR);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(width: usize, title: &str) -> ChartOptions {
        ChartOptions::builder()
            .width(width)
            .title(title)
            .build()
            .expect("options")
    }

    #[test]
    fn every_row_has_the_frame_width() {
        let out = framed(&opts(20, "Spend"), &no_data());
        for row in out.lines() {
            assert_eq!(row.chars().count(), 20, "row {row:?}");
        }
        assert!(out.starts_with("┌"));
        assert!(out.contains("  Spend "));
    }

    #[test]
    fn long_title_degrades_to_a_plain_rule() {
        let out = framed(&opts(14, "a title that is far too long"), &[]);
        assert_eq!(out.lines().next(), Some("┌────────────┐"));
    }

    #[test]
    fn padding_ignores_colour_escapes() {
        let red = AnsiCode::Static("\x1b[31m");
        let mut line = Line::new();
        line.push_run('█', 3, Some(&red));
        line.push_padded("abcdef", 4);
        assert_eq!(line.cells(), 7);
    }

    #[test]
    fn over_wide_rows_are_clipped_between_escapes() {
        let red = AnsiCode::Static("\x1b[31m");
        let mut line = Line::new();
        line.push_str(" ab");
        line.push_run('█', 4, Some(&red));
        line.push_str(" 123456");
        assert_eq!(line.fit(5), " ab\x1b[31m██\x1b[0m");
        assert_eq!(line.fit(12), " ab\x1b[31m████\x1b[0m 1234");
        assert_eq!(Line::new().fit(3), "   ");
    }

    #[test]
    fn value_column_is_dropped_when_it_cannot_fit() {
        let data = Series::from_values([1e12]);
        let options = ChartOptions::builder()
            .width(20)
            .show_values(true)
            .build()
            .expect("options");
        let layout = RowLayout::of(&data, &options);
        assert_eq!(layout.value, 0);
        assert_eq!(layout.track, 14);

        let fits = RowLayout::of(&Series::from_values([12.5]), &options);
        assert_eq!(fits.value, 4);
        assert_eq!(fits.track, 9);
    }

    #[test]
    fn cells_for_rounds_and_clamps() {
        assert_eq!(cells_for(0.5, 9), 5);
        assert_eq!(cells_for(2.0, 9), 9);
        assert_eq!(cells_for(-1.0, 9), 0);
        assert_eq!(cells_for(f64::NAN, 9), 0);
    }

    #[test]
    fn layout_caps_long_labels() {
        let label = "a very long label indeed";
        let data = Series::new(vec![crate::core::data::DataPoint::new(label, 1.0)]);
        let layout = RowLayout::of(&data, &opts(32, ""));
        assert_eq!(layout.label, 10);
        assert_eq!(layout.track, 32 - 2 - 13);
    }
}
