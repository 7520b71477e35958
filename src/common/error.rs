use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the file codec.
///
/// Every variant carries the path that was being read or written together
/// with the underlying cause, so callers can discriminate on the kind of
/// failure instead of parsing message text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The path could not be opened, read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but its content is not what the operation
    /// expected: invalid JSON, or a PEM/ASN.1 envelope that does not decode.
    #[error("malformed content in {path}: {reason}")]
    Format { path: PathBuf, reason: String },

    /// The PEM envelope decoded but does not hold a usable key of the
    /// requested kind.
    #[error("unusable key material in {path}: {reason}")]
    Key { path: PathBuf, reason: String },
}
