/// Cooperative cancellation checkpoints
pub mod cancellation;
/// Layer-by-layer generation entry points
pub mod executor;
/// Distribution fill of empty cells
pub mod fill;
/// Non-overlapping occurrence rectangle placement
pub mod placement;
/// Weighted random selection and distribution tree walking
pub mod selection;
