//! Chart variants and the capability they share.

pub mod bar;
pub mod dot;
pub(crate) mod frame;
pub mod pie;

use std::{any::Any, fmt};

use crate::core::error::ChartError;

pub use bar::BarChart;
pub use dot::DotChart;
pub use pie::PieChart;

/// A constructed chart, ready to draw itself.
pub trait Chart: Any + fmt::Debug + Send + Sync {
    /// Identifier the variant is registered under by default.
    fn kind(&self) -> &'static str;

    /// Full framed text, one `\n`-terminated line per terminal row.
    fn render(&self) -> String;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Chart {
    #[must_use]
    pub fn is<T: Chart>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Chart>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Constructor entry point a variant exposes to the factory.
///
/// `data` and `options` arrive exactly as the caller passed them.
pub trait Construct<D, O>: Chart + Sized {
    /// # Errors
    /// Whatever the variant rejects; the factory hands it back unchanged.
    fn construct(data: D, options: O) -> Result<Self, ChartError>;
}
