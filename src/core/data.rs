//! Labelled series + line-oriented loader with zero-allocation float parsing.

use std::{
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Public Row Structs ---
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered, labelled values fed to every built-in chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Unlabelled values get their 1-based position as label.
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new((i + 1).to_string(), v))
            .collect()
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Widest label in terminal cells.
    #[must_use]
    pub fn label_width(&self) -> usize {
        self.points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<T: IntoIterator<Item = DataPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// --- Error Handling ---

/// `line` is the 1-based input line, or the 1-based item for inline values.
#[derive(Debug)]
pub struct ParseSeriesError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount(usize),
    BadFloat(String),
}

impl Display for ParseSeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount(n) => {
                write!(f, "line {}: expected 1-2 columns, got {}", self.line, n)
            }
            ParseErrorKind::BadFloat(text) => {
                write!(f, "line {}: invalid value '{}'", self.line, text)
            }
        }
    }
}

impl std::error::Error for ParseSeriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(b: &[u8]) -> &[u8] {
    b.trim_ascii()
}

/// Rewrite U+2212 MINUS SIGN to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseSeriesError> {
    let bad = || ParseSeriesError {
        line,
        kind: ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// Split one row into an optional label and the value bytes.
fn split_row(row: &[u8], line: usize) -> Result<(Option<&[u8]>, &[u8]), ParseSeriesError> {
    let mut cols = row.split(|&b| b == b',').map(trim);
    match (cols.next(), cols.next(), cols.next()) {
        (Some(value), None, _) => Ok((None, value)),
        (Some(label), Some(value), None) => Ok((Some(label), value)),
        _ => Err(ParseSeriesError {
            line,
            kind: ParseErrorKind::BadColumnCount(row.split(|&b| b == b',').count()),
        }),
    }
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read `label,value` or bare `value` rows.  Blank and `#` lines are
/// skipped, as is a non-numeric header on the first data row.
///
/// # Errors
/// Line-numbered [`ParseSeriesError`] on I/O failure, a row with more than
/// two columns, or a value that is not a finite float.
pub fn read_series<R: Read>(src: R) -> Result<Series, ParseSeriesError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut series = Series::default();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseSeriesError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let row = trim(&buf);
        if row.is_empty() || row[0] == b'#' {
            continue;
        }

        let (label, value) = split_row(row, line_no)?;

        // simple header detection (non-numeric value on the first row)
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(value).is_err() {
                continue;
            }
        }

        let value = parse_f64(value, line_no)?;
        let label = match label {
            Some(l) => String::from_utf8_lossy(l).into_owned(),
            None => (series.len() + 1).to_string(),
        };
        series.push(DataPoint { label, value });
    }
    Ok(series)
}

/// # Errors
/// See [`read_series`]; opening the file maps to a line-0 I/O error.
pub fn read_series_from_path(path: &str) -> Result<Series, ParseSeriesError> {
    if path == "-" {
        read_series(std::io::stdin())
    } else {
        use std::fs::File;
        read_series(File::open(path).map_err(|e| ParseSeriesError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

/// Parse inline values such as `1,2.5,rent=900`.
///
/// # Errors
/// [`ParseSeriesError`] whose `line` is the 1-based item number.
pub fn parse_values(list: &str) -> Result<Series, ParseSeriesError> {
    let mut series = Series::default();
    for (i, item) in list.split(',').map(str::trim).enumerate() {
        if item.is_empty() {
            continue;
        }
        let mut bytes = item.as_bytes().to_vec();
        normalize_unicode_minus(&mut bytes);
        let (label, value) = match bytes.iter().position(|&b| b == b'=') {
            Some(eq) => (
                String::from_utf8_lossy(trim(&bytes[..eq])).into_owned(),
                parse_f64(trim(&bytes[eq + 1..]), i + 1)?,
            ),
            None => ((series.len() + 1).to_string(), parse_f64(&bytes, i + 1)?),
        };
        series.push(DataPoint { label, value });
    }
    Ok(series)
}
