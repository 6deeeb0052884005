//! Interactive scatter plots rendered to SVG.
//!
//! Charts on one [`Page`] share a [`ChartRegistry`]: hiding a category from
//! any legend dims it everywhere, and a brush on any chart selects matching
//! records on every chart.

pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod interaction;
pub mod page;
pub mod plot;
pub mod registry;
pub mod scale;
pub mod scene;
pub mod style;

pub use data::{FieldValue, Record};
pub use element::Bounds;
pub use error::{PlotError, PlotResult};
pub use page::{Page, SelectionSummary};
pub use plot::{ChartOptions, ChartScales, Columns, ScatterChart};
pub use registry::{ChartId, ChartRegistry, RegistryEvent};
pub use scale::{LinearScale, OrdinalScale, Scale, SqrtScale};
pub use style::{Color, ThemeConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::plotting::data::{Record, records_from_json};
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::interaction::{NO_SELECTION_MESSAGE, SelectionOutcome};
    pub use crate::plotting::page::Page;
    pub use crate::plotting::plot::{ChartOptions, Columns, ScatterChart, fields_formatter};
    pub use crate::plotting::registry::ChartRegistry;
    pub use crate::plotting::style::ThemeConfig;
}
