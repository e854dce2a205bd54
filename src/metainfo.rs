//! Torrent metainfo handling ([BEP-3]).
//!
//! This module turns a `.torrent` file into the two things a magnet link
//! needs: the SHA-1 hash of the embedded `info` dictionary and the set of
//! announce URLs, then assembles the link itself.
//!
//! # Overview
//!
//! A torrent file is one bencoded dictionary:
//!
//! - **info** - the content description (file names, sizes, piece hashes);
//!   the SHA-1 of its *raw encoded bytes* is the torrent's identity
//! - **announce** - primary tracker URL
//! - **announce-list** - additional tracker tiers ([BEP-12]), a list of
//!   lists of URLs
//!
//! [`TorrentFile`] retains both the decoded tree and the source bytes, so
//! the hash is computed over the exact span the `info` dictionary occupies
//! in the file, never a re-serialization - key order or formatting quirks
//! in the source don't change the identity.
//!
//! # Examples
//!
//! ```
//! use rmagnet::metainfo::TorrentFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let torrent =
//!     TorrentFile::from_bytes(b"d4:infod4:name3:abce8:announce20:http://tracker.test/e")?;
//!
//! println!("info hash: {}", torrent.info_hash().unwrap());
//! for tracker in torrent.trackers() {
//!     println!("tracker: {}", tracker);
//! }
//!
//! let magnet = torrent.magnet();
//! assert!(magnet.starts_with("magnet:?xt=urn:btih:"));
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html
//! [BEP-12]: http://bittorrent.org/beps/bep_0012.html

mod error;
mod info_hash;
mod magnet;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::TorrentFile;
