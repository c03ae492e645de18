pub mod controller;
pub mod state;

pub use controller::ChartController;
pub use state::Chart;
