//! Snapshot record writer and output-file policy.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec::{encode_header, write_f32_slice_le};
use crate::config::MAX_PATH_LEN;
use crate::error::SnapshotError;
use crate::record::{RecordHeader, RecordKind};
use gyre_core::VectorField;

/// Path of the record for `kind` at step `nt`: `<out_dir>/<8-digit nt><suffix>`.
///
/// Fails with [`SnapshotError::PathTooLong`] before any file is opened
/// when the formatted path exceeds [`MAX_PATH_LEN`] bytes.
pub fn record_path(out_dir: &Path, nt: i32, kind: RecordKind) -> Result<PathBuf, SnapshotError> {
    let path = out_dir.join(format!("{nt:08}{}", kind.suffix()));
    let len = path.as_os_str().len();
    if len >= MAX_PATH_LEN {
        return Err(SnapshotError::PathTooLong {
            len,
            max: MAX_PATH_LEN,
        });
    }
    Ok(path)
}

/// Create the snapshot file for a new record.
///
/// Exclusive creation (`create_new`), and on Unix the file is created
/// read-only for owner, group, and other: a snapshot is write-once
/// archive data. Re-running a step against an existing file fails at
/// open with `AlreadyExists` regardless of process privileges; nothing
/// is ever truncated or appended. The descriptor returned for the fresh
/// file is still writable.
pub fn create_record_file(path: &Path) -> Result<File, SnapshotError> {
    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o444);
    }
    Ok(opts.open(path)?)
}

/// Write one complete record: magic header, extents, step, time, then
/// the three component arrays in X, Y, Z order.
///
/// Generic over `W: Write` so tests can target `Vec<u8>` and production
/// code a `BufWriter<File>`.
pub fn write_record<W: Write>(
    w: &mut W,
    header: &RecordHeader,
    field: &VectorField,
) -> Result<(), SnapshotError> {
    encode_header(w, header)?;
    write_f32_slice_le(w, field.x())?;
    write_f32_slice_le(w, field.y())?;
    write_f32_slice_le(w, field.z())?;
    w.flush()?;
    Ok(())
}
