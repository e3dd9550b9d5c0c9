//! Chart options + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{DECIMAL_PRECISION, DEFAULT_CHART_WIDTH, MAX_DECIMALS, MIN_CHART_WIDTH},
    error::ConfigError,
};

/// Immutable layout/styling parameters handed to a chart variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub subtitle: Option<String>,
    /// Total frame width in terminal cells, borders included.
    pub width: usize,
    pub color: Option<AnsiCode>,
    /// Overrides the variant's default glyph.
    pub symbol: Option<char>,
    pub show_values: bool,
    pub decimals: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            width: DEFAULT_CHART_WIDTH,
            color: None,
            symbol: None,
            show_values: false,
            decimals: DECIMAL_PRECISION,
        }
    }
}

impl ChartOptions {
    #[inline]
    #[must_use]
    pub fn builder() -> ChartOptionsBuilder {
        ChartOptionsBuilder::default()
    }

    /// Columns available between the two vertical borders.
    #[inline]
    #[must_use]
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(2)
    }
}

/// Fluent builder; validation happens in `build`.
#[derive(Debug, Default)]
pub struct ChartOptionsBuilder {
    title: Option<String>,
    subtitle: Option<String>,
    width: Option<usize>,
    color: Option<AnsiCode>,
    color_name: Option<String>,
    symbol: Option<char>,
    show_values: bool,
    decimals: Option<usize>,
}

impl ChartOptionsBuilder {
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle_opt(mut self, s: Option<String>) -> Self {
        if s.is_some() {
            self.subtitle = s;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.color = Some(c);
        self.color_name = None;
        self
    }
    /// Colour by name or `#RRGGBB`; parsed in `build`.
    #[inline]
    #[must_use]
    pub fn color_name(mut self, name: impl Into<String>) -> Self {
        self.color_name = Some(name.into());
        self.color = None;
        self
    }
    #[inline]
    #[must_use]
    pub fn symbol(mut self, c: char) -> Self {
        self.symbol = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn symbol_opt(mut self, c: Option<char>) -> Self {
        if c.is_some() {
            self.symbol = c;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn show_values(mut self, on: bool) -> Self {
        self.show_values = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn decimals(mut self, d: usize) -> Self {
        self.decimals = Some(d);
        self
    }

    /// # Errors
    /// Fails on a width below [`MIN_CHART_WIDTH`], more than
    /// [`MAX_DECIMALS`] decimals, or an unparseable colour name.
    pub fn build(self) -> Result<ChartOptions, ConfigError> {
        let width = self.width.unwrap_or(DEFAULT_CHART_WIDTH);
        if width < MIN_CHART_WIDTH {
            return Err(ConfigError::TooNarrow {
                min: MIN_CHART_WIDTH,
                got: width,
            });
        }
        let decimals = self.decimals.unwrap_or(DECIMAL_PRECISION);
        if decimals > MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals {
                max: MAX_DECIMALS,
                got: decimals,
            });
        }
        let color = match self.color_name {
            Some(name) => Some(AnsiCode::from_name(&name)?),
            None => self.color,
        };
        Ok(ChartOptions {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            width,
            color,
            symbol: self.symbol,
            show_values: self.show_values,
            decimals,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ChartOptionsBuilder> for Result<ChartOptions, ConfigError> {
    fn from(b: ChartOptionsBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::ColorError;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(ChartOptions::builder().build(), Ok(ChartOptions::default()));
    }

    #[test]
    fn narrow_width_is_rejected() {
        let err = ChartOptions::builder().width(5).build().unwrap_err();
        assert_eq!(err, ConfigError::TooNarrow { min: 14, got: 5 });
    }

    #[test]
    fn too_many_decimals_is_rejected() {
        let err = ChartOptions::builder().decimals(9).build().unwrap_err();
        assert_eq!(err, ConfigError::TooManyDecimals { max: 6, got: 9 });
    }

    #[test]
    fn colour_names_are_resolved_at_build() {
        let opts = ChartOptions::builder().color_name("red").build().expect("red");
        assert_eq!(opts.color, Some(AnsiCode::Static("\x1b[31m")));

        let err = ChartOptions::builder().color_name("#12").build().unwrap_err();
        assert!(matches!(err, ConfigError::Color(ColorError::InvalidHexLength(_))));
    }

    #[test]
    fn optional_setters_keep_existing_values() {
        let opts = ChartOptions::builder()
            .subtitle("kept")
            .subtitle_opt(None)
            .symbol('#')
            .symbol_opt(None)
            .build()
            .expect("options");
        assert_eq!(opts.subtitle.as_deref(), Some("kept"));
        assert_eq!(opts.symbol, Some('#'));
        assert_eq!(opts.inner_width(), 78);
    }
}
