/// Coverage statistics and per-run analysis reports
pub mod statistics;

pub use statistics::{AnalysisReport, GridStatistics, LayerStatistics};
