use std::fs;
use std::io;
use std::path::Path;

use bytes::Bytes;
use tracing::{debug, warn};

use super::error::MetainfoError;
use super::info_hash::InfoHash;
use super::magnet;
use crate::bencode::{self, Node, MAX_DOCUMENT_LEN};

/// A parsed torrent file.
///
/// Retains the decoded document tree alongside the raw source bytes: the
/// info hash is computed over the `info` dictionary's source span, so the
/// bytes must survive parsing.
///
/// # Examples
///
/// ```no_run
/// use rmagnet::metainfo::TorrentFile;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let torrent = TorrentFile::from_file("example.torrent")?;
/// println!("{}", torrent.magnet());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TorrentFile {
    data: Bytes,
    root: Node,
}

impl TorrentFile {
    /// Reads and parses a torrent file from disk.
    ///
    /// Empty files and files over [`MAX_DOCUMENT_LEN`] bytes are rejected
    /// before their contents are read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MetainfoError> {
        let path = path.as_ref();

        let file_len = fs::metadata(path)?.len();
        if file_len == 0 || file_len > MAX_DOCUMENT_LEN as u64 {
            warn!(path = %path.display(), file_len, "rejecting torrent file by size");
            return Err(MetainfoError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("torrent file is {file_len} bytes, accepted range is 1..={MAX_DOCUMENT_LEN}"),
            )));
        }

        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parses a torrent document from raw bytes.
    ///
    /// # Errors
    ///
    /// [`MetainfoError::Io`] when the input is empty or over the size
    /// ceiling, [`MetainfoError::InvalidFormat`] when it does not decode to
    /// a non-empty dictionary.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let root = bencode::decode(data)?;
        debug!(len = data.len(), "decoded torrent document");

        Ok(Self {
            data: Bytes::copy_from_slice(data),
            root,
        })
    }

    /// The decoded document tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The raw bytes the document was decoded from.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// SHA-1 of the `info` dictionary's source bytes.
    ///
    /// `None` when the document has no `info` key (looked up
    /// case-insensitively) or its value is not a dictionary.
    pub fn info_hash(&self) -> Option<InfoHash> {
        let info = self.root.find("info")?;
        info.as_dict()?;
        Some(InfoHash::from_info_bytes(info.raw(&self.data)))
    }

    /// The announce URL set - `announce` plus a flattened `announce-list` -
    /// sorted and deduplicated, lossily decoded as UTF-8.
    pub fn trackers(&self) -> Vec<String> {
        magnet::announce_urls(&self.root)
            .iter()
            .map(|url| String::from_utf8_lossy(url).into_owned())
            .collect()
    }

    /// Builds the magnet URI for this torrent.
    ///
    /// Empty string when no info hash can be computed.
    pub fn magnet(&self) -> String {
        magnet::build(self)
    }
}
