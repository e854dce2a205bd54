use std::io;

use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors from reading and parsing torrent files.
///
/// A missing or non-dictionary `info` entry is deliberately not an error:
/// [`TorrentFile::info_hash`](super::TorrentFile::info_hash) returns `None`
/// and [`TorrentFile::magnet`](super::TorrentFile::magnet) returns an empty
/// string, so callers can tell "not a torrent" from "torrent without usable
/// info".
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// File missing, unreadable, empty, or over the size ceiling.
    #[error("io failure: {0}")]
    Io(#[from] io::Error),

    /// The bytes decoded, but the top level is not a non-empty dictionary.
    #[error("not a valid torrent document")]
    InvalidFormat,
}

impl From<BencodeError> for MetainfoError {
    fn from(err: BencodeError) -> Self {
        match err {
            BencodeError::DocumentLength(_) => {
                MetainfoError::Io(io::Error::new(io::ErrorKind::InvalidData, err.to_string()))
            }
            BencodeError::RootNotDictionary => MetainfoError::InvalidFormat,
        }
    }
}
