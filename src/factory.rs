//! Chart selection by name.
//!
//! A [`ChartFactory`] is a table from lowercase identifiers to constructors.
//! `create` normalises the caller's identifier, looks it up and forwards
//! `data` and `options` untouched.  New variants are added with
//! [`ChartFactory::register`] or [`ChartFactory::register_variant`]; callers
//! of `create` never change.

use std::{collections::HashMap, fmt, sync::LazyLock};

use tracing::{debug, warn};

use crate::{
    charts::{BarChart, Chart, Construct, DotChart, PieChart},
    core::{config::ChartOptions, data::Series, error::ChartError},
};

/// Type-erased variant constructor.
pub type Constructor<D, O> =
    Box<dyn Fn(D, O) -> Result<Box<dyn Chart>, ChartError> + Send + Sync>;

/// Lowercase form used for both registration and lookup.
#[inline]
fn normalize(kind: &str) -> String {
    kind.to_lowercase()
}

pub struct ChartFactory<D, O> {
    constructors: HashMap<String, Constructor<D, O>>,
}

impl<D: 'static, O: 'static> Default for ChartFactory<D, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, O> fmt::Debug for ChartFactory<D, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("ChartFactory").field("kinds", &kinds).finish()
    }
}

impl<D: 'static, O: 'static> ChartFactory<D, O> {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Add `ctor` under `kind` (case-insensitive).  Returns `true` when an
    /// earlier constructor for the same identifier was replaced.
    pub fn register<F>(&mut self, kind: &str, ctor: F) -> bool
    where
        F: Fn(D, O) -> Result<Box<dyn Chart>, ChartError> + Send + Sync + 'static,
    {
        let key = normalize(kind);
        debug!(kind = %key, "registering chart constructor");
        let replaced = self.constructors.insert(key, Box::new(ctor)).is_some();
        if replaced {
            warn!(kind, "chart constructor replaced");
        }
        replaced
    }

    /// Register a type that knows how to build itself from `D` and `O`.
    pub fn register_variant<C: Construct<D, O>>(&mut self, kind: &str) -> bool {
        self.register(kind, |data, options| {
            C::construct(data, options).map(|chart| Box::new(chart) as Box<dyn Chart>)
        })
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, kind: &str, ctor: F) -> Self
    where
        F: Fn(D, O) -> Result<Box<dyn Chart>, ChartError> + Send + Sync + 'static,
    {
        self.register(kind, ctor);
        self
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(&normalize(kind))
    }

    /// Registered identifiers, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Build the chart registered under `kind`.
    ///
    /// # Errors
    /// [`ChartError::UnknownChartType`] with `kind` exactly as given when
    /// nothing is registered under it.  Errors from the constructor itself
    /// are returned unchanged.
    pub fn create(&self, kind: &str, data: D, options: O) -> Result<Box<dyn Chart>, ChartError> {
        let Some(ctor) = self.constructors.get(&normalize(kind)) else {
            debug!(kind, "no chart registered under identifier");
            return Err(ChartError::UnknownChartType(kind.to_owned()));
        };
        debug!(kind, "creating chart");
        ctor(data, options)
    }
}

impl ChartFactory<Series, ChartOptions> {
    /// Table holding the bar, dot and pie charts.
    #[must_use]
    pub fn builtin() -> Self {
        let mut factory = Self::new();
        factory.register_variant::<BarChart>(BarChart::KIND);
        factory.register_variant::<DotChart>(DotChart::KIND);
        factory.register_variant::<PieChart>(PieChart::KIND);
        factory
    }
}

static BUILTIN: LazyLock<ChartFactory<Series, ChartOptions>> =
    LazyLock::new(ChartFactory::builtin);

/// Process-wide built-in table, populated on first use.
#[must_use]
pub fn builtin_factory() -> &'static ChartFactory<Series, ChartOptions> {
    &BUILTIN
}

/// Create a built-in chart by name.
///
/// # Errors
/// See [`ChartFactory::create`].
pub fn create(
    kind: &str,
    data: Series,
    options: ChartOptions,
) -> Result<Box<dyn Chart>, ChartError> {
    BUILTIN.create(kind, data, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(w: usize) -> ChartOptions {
        ChartOptions::builder().width(w).build().expect("options")
    }

    #[test]
    fn builtin_kinds_are_sorted() {
        assert_eq!(ChartFactory::builtin().kinds(), vec!["bar", "dot", "pie"]);
    }

    #[test]
    fn pie_receives_data_and_options() {
        let chart = create("pie", Series::from_values([1.0, 2.0, 3.0]), width(40)).expect("pie");
        let pie = chart.downcast_ref::<PieChart>().expect("PieChart");
        assert_eq!(pie.data(), &Series::from_values([1.0, 2.0, 3.0]));
        assert_eq!(pie.options().width, 40);
        assert_eq!(chart.kind(), "pie");
    }

    #[test]
    fn upper_case_dot_is_a_dot_chart() {
        let chart = create("DOT", Series::default(), ChartOptions::default()).expect("dot");
        assert!(chart.is::<DotChart>());
    }

    #[test]
    fn unknown_kind_keeps_original_spelling() {
        let err = create("Scatter", Series::default(), ChartOptions::default()).unwrap_err();
        match err {
            ChartError::UnknownChartType(kind) => assert_eq!(kind, "Scatter"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn registration_is_case_insensitive_and_reports_replacement() {
        let mut factory = ChartFactory::<Series, ChartOptions>::new();
        assert!(!factory.register_variant::<BarChart>("Bars"));
        assert!(factory.contains("BARS"));
        assert!(factory.register_variant::<DotChart>("bars"));
        let chart = factory
            .create("bars", Series::default(), ChartOptions::default())
            .expect("chart");
        assert!(chart.is::<DotChart>());
    }

    #[test]
    fn debug_lists_kinds() {
        let dbg = format!("{:?}", ChartFactory::builtin());
        assert_eq!(dbg, r#"ChartFactory { kinds: ["bar", "dot", "pie"] }"#);
    }
}
