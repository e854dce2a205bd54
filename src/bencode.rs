//! Bencode decoding ([BEP-3]).
//!
//! Bencode is the serialization format used by BitTorrent metainfo files.
//! This module decodes documents into a [`Node`] tree; every node remembers
//! the byte range it was decoded from, so callers can re-slice a node's
//! exact source encoding (the info-hash computation depends on this).
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Leniency
//!
//! Torrent files in the wild are frequently truncated or produced by buggy
//! encoders, so the decoder degrades instead of failing: a string whose
//! declared length overruns the input becomes an empty string, integers in
//! exponent form (`i4E2e`) are truncated from their float value, and an
//! unrecognizable byte ends the surrounding container. Only two conditions
//! are fatal: input outside the accepted size range
//! ([`BencodeError::DocumentLength`]), and a top-level value that is not a
//! non-empty dictionary ([`BencodeError::RootNotDictionary`]).
//!
//! # Examples
//!
//! ```
//! use rmagnet::bencode::decode;
//!
//! let data = b"d8:announce23:http://tracker.example/4:infod4:name8:demo.txtee";
//! let doc = decode(data).unwrap();
//!
//! let announce = doc.find("announce").unwrap();
//! assert_eq!(announce.as_str(), Some("http://tracker.example/"));
//!
//! // A node's span reproduces its source encoding byte for byte.
//! let info = doc.find("info").unwrap();
//! assert_eq!(info.raw(data), b"d4:name8:demo.txte");
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod cursor;
mod decode;
mod error;
mod value;

pub use decode::{decode, decode_value, MAX_DOCUMENT_LEN};
pub use error::BencodeError;
pub use value::{Node, Value};

#[cfg(test)]
mod tests;
