//! examtrack-core: scoring configs, exam results, and calendar aggregation.
//!
//! This crate holds the data model, the persisted document store, and the
//! pure scoring and calendar functions that the examtrack CLI builds on.

pub mod calendar;
pub mod defaults;
pub mod error;
pub mod id;
pub mod model;
pub mod scoring;
pub mod storage;
pub mod theme;
pub mod tracker;

pub use error::{ImportError, StorageError, TrackerError};
pub use model::{
    AppData, DaySummary, ExamConfig, ExamResult, NewConfig, NewResult, ResultUpdate,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::ExamTracker;
