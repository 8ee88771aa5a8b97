pub mod dashboard_page;
pub mod initial;
pub mod sector_select;

pub use dashboard_page::DashboardPage;
pub use initial::InitialPage;
pub use sector_select::SectorSelectionPage;
