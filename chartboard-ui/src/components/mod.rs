//! UI Components
//!
//! Dashboard sections and the chart widgets they draw.

pub mod chart;
pub mod section;

pub use chart::{CandlestickChart, ChartCanvas};
pub use section::ChartSection;
