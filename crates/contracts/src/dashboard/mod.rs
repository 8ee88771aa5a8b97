pub mod alert;
pub mod filter;
pub mod overview;
pub mod selection;
pub mod view_model;

pub use alert::{AlertLatch, WaterAlert};
pub use filter::FilterState;
pub use overview::{build_overview, OverviewLine, OverviewLineKind, OverviewView, StatusCounts};
pub use selection::SelectionContext;
pub use view_model::{build_dashboard, filter_and_sort, DashboardView, LocationCard, Measurement};
