//! Dioxus fullstack page components.
//!
//! Pages only render placeholders; the navigation shell is what matters here.

mod dashboard;
mod flights;
mod masterdata;

pub use dashboard::Dashboard;
pub use flights::{DailyFlights, SeasonalFlights};
pub use masterdata::MasterData;
