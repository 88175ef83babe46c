//! Dataset loading, feature derivation, and aggregation for bikereport
//!
//! The pipeline is strictly linear: the loader resolves one immutable
//! [`RentalFrame`] from its candidate sources, the frame derives
//! grouping columns and row subsets, and the aggregation primitives
//! reduce those subsets into chart-ready mappings.

pub mod aggregate;
pub mod cache;
pub mod frame;
pub mod loader;
pub mod sample;

pub use aggregate::{group_mean, to_long_form, LongRow, ValueColumn};
pub use cache::DatasetCache;
pub use frame::RentalFrame;
pub use loader::{DatasetLoader, DatasetOrigin, LoadedDataset, SourceSpec};
