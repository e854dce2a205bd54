use bytes::Bytes;

use super::torrent::TorrentFile;
use crate::bencode::{Node, Value};

/// Assembles the magnet URI for a decoded torrent document.
///
/// Empty string when no info hash can be computed; a partial magnet URI is
/// never produced.
pub(crate) fn build(torrent: &TorrentFile) -> String {
    let Some(hash) = torrent.info_hash() else {
        return String::new();
    };

    let mut magnet = String::from("magnet:?xt=urn:btih:");
    magnet.push_str(&hash.to_hex());

    for url in announce_urls(torrent.root()) {
        magnet.push_str("&tr=");
        magnet.push_str(&percent_encode(&url));
    }

    magnet
}

/// Collects every announce URL as raw bytes, sorted byte-wise with adjacent
/// duplicates removed.
///
/// The single `announce` string comes first if present, then a recursive
/// flatten of the `announce-list` tiers; entries that are neither strings
/// nor lists are ignored.
pub(crate) fn announce_urls(root: &Node) -> Vec<Bytes> {
    let mut urls = Vec::new();

    if let Some(announce) = root.find("announce") {
        if let Some(url) = announce.as_bytes() {
            urls.push(url.clone());
        }
    }

    if let Some(tiers) = root.find("announce-list") {
        if tiers.as_list().is_some() {
            flatten_tiers(tiers, &mut urls);
        }
    }

    urls.sort();
    urls.dedup();
    urls
}

fn flatten_tiers(node: &Node, urls: &mut Vec<Bytes>) {
    if let Some(items) = node.as_list() {
        for item in items {
            match &item.value {
                Value::Bytes(url) => urls.push(url.clone()),
                Value::List(_) => flatten_tiers(item, urls),
                _ => {}
            }
        }
    }
}

/// Byte-oriented percent-encoding for the `tr` parameter: ASCII
/// alphanumerics pass through, every other byte becomes `%XX` with
/// uppercase hex digits.
///
/// Stricter than RFC 3986 - `/`, `:` and `.` are escaped too - which keeps
/// the output byte-for-byte identical for identical tracker lists.
pub(crate) fn percent_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);

    for &b in bytes {
        if b.is_ascii_alphanumeric() {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }

    out
}
