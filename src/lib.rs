//! rmagnet - torrent metainfo parsing and magnet link generation
//!
//! This library parses BitTorrent metainfo files ([BEP-3] bencode), extracts
//! the announce URL set and the SHA-1 hash of the embedded `info`
//! dictionary, and builds `magnet:?xt=urn:btih:...` links from the result.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding with source-span tracking
//! - [`metainfo`] - torrent documents, info hashes, magnet link assembly
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod bencode;
pub mod metainfo;

pub use bencode::{decode, decode_value, BencodeError, Node, Value, MAX_DOCUMENT_LEN};
pub use metainfo::{InfoHash, MetainfoError, TorrentFile};
