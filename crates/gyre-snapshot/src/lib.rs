//! Binary snapshot export for the Gyre field exporter.
//!
//! Serializes reconstructed physical fields and grid geometry to a simple
//! binary format, one file per record:
//!
//! ```text
//! [HEADER "### Gyre ###\n\0"] [NP NQ NR i32] [step i32] [time f32]
//! [X f32 * NP*NQ*NR] [Y ...] [Z ...]
//! ```
//!
//! Files are named `<out_dir>/<8-digit step><E|B|G>` and created
//! read-only, write-once. All multi-byte values are little-endian (see
//! [`codec`]).
//!
//! # Architecture
//!
//! - [`export`] runs the per-timestep transaction: `E` record, `B`
//!   record, plus a one-time `G` record at step 0.
//! - [`write_record`] / [`read_record`] stream one record over any
//!   `Write`/`Read`, so tests round-trip through `Vec<u8>`.
//! - [`ExportConfig`] threads the immutable grid extents, timestep size,
//!   and output directory through every call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod error;
pub mod export;
pub mod reader;
pub mod record;
pub mod writer;

pub use config::{ExportConfig, MAX_PATH_LEN, OUT_PATH_ENV};
pub use error::SnapshotError;
pub use export::{export, node_positions};
pub use reader::{read_record, SnapshotRecord};
pub use record::{RecordHeader, RecordKind, HEADER};
pub use writer::{record_path, write_record};
