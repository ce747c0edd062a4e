//! Channel analytics pipeline for vendorscope.
//!
//! Normalizes raw channel posts into [`vendorscope_core::PostRecord`]s,
//! aggregates each channel's sample into cadence and engagement metrics,
//! and blends those into a lending score for the cross-channel table.

pub mod aggregate;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod record;
pub mod score;
pub mod store;
pub mod table;
pub mod text;

pub use aggregate::{aggregate, PRICE_NOT_SPECIFIED, UNKNOWN_EXCERPT};
pub use error::{PipelineError, StoreError};
pub use media::{classify, MediaClass};
pub use pipeline::{run_analysis, run_collect};
pub use record::{build_record, PostRecordBuilder};
pub use score::{lending_score, rank, score, RankOrder, ScoreTable};
pub use store::RecordStore;
pub use table::{save_records_csv, write_records_csv};
pub use text::{normalize, tokenize};

#[cfg(test)]
mod testing;
