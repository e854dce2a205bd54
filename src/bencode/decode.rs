use super::cursor::Cursor;
use super::error::BencodeError;
use super::value::{Node, Value};
use bytes::Bytes;
use std::collections::BTreeMap;

/// Largest document the decoder accepts, 5 MiB.
///
/// Bounds memory and work on hostile input; anything larger is rejected
/// before parsing starts.
pub const MAX_DOCUMENT_LEN: usize = 5 * 1024 * 1024;

/// Decodes a complete metainfo document.
///
/// The input must be non-empty, at most [`MAX_DOCUMENT_LEN`] bytes, and its
/// top-level value must decode to a non-empty dictionary. Bytes after the
/// root value are ignored.
pub fn decode(data: &[u8]) -> Result<Node, BencodeError> {
    if data.is_empty() || data.len() > MAX_DOCUMENT_LEN {
        return Err(BencodeError::DocumentLength(data.len()));
    }

    let mut cur = Cursor::new(data);
    match decode_node(&mut cur) {
        Some(root) => match &root.value {
            Value::Dict(entries) if !entries.is_empty() => Ok(root),
            _ => Err(BencodeError::RootNotDictionary),
        },
        None => Err(BencodeError::RootNotDictionary),
    }
}

/// Decodes a single value from the start of `data`, without the document
/// rules `decode` adds on top.
///
/// `None` when the first byte cannot start a value.
pub fn decode_value(data: &[u8]) -> Option<Node> {
    decode_node(&mut Cursor::new(data))
}

fn decode_node(cur: &mut Cursor) -> Option<Node> {
    let start = cur.pos();

    let value = match cur.peek()? {
        b'0'..=b'9' => Value::Bytes(read_string(cur)),
        b'i' => {
            cur.advance(1);
            Value::Integer(read_integer(cur))
        }
        b'l' => {
            cur.advance(1);
            let mut items = Vec::new();
            while cur.peek().is_some_and(|b| b != b'e') {
                match decode_node(cur) {
                    Some(item) => items.push(item),
                    // Unknown byte: end the list here, the byte is consumed
                    // below in place of the terminator.
                    None => break,
                }
            }
            cur.advance(1);
            Value::List(items)
        }
        b'd' => {
            cur.advance(1);
            let mut entries = BTreeMap::new();
            while cur.peek().is_some_and(|b| b != b'e') {
                let key = read_string(cur);
                match decode_node(cur) {
                    // Duplicate keys: last write wins.
                    Some(val) => {
                        entries.insert(key, val);
                    }
                    None => break,
                }
            }
            cur.advance(1);
            Value::Dict(entries)
        }
        _ => return None,
    };

    Some(Node {
        value,
        offset: start,
        length: cur.pos() - start,
    })
}

fn read_integer(cur: &mut Cursor) -> i64 {
    let mut run = Vec::new();
    while let Some(b) = cur.peek() {
        if b == b'e' {
            break;
        }
        run.push(b);
        cur.advance(1);
    }
    cur.advance(1); // past the terminator

    let text = String::from_utf8_lossy(&run);
    if text.bytes().any(|b| matches!(b, b'd' | b'D' | b'e' | b'E')) {
        // Exponent form from buggy encoders, e.g. i4E2e. Parse as a float
        // and truncate toward zero.
        let normalized = text.replace(|c| c == 'd' || c == 'D', "e");
        normalized.parse::<f64>().map_or(0, |f| f as i64)
    } else {
        text.parse().unwrap_or(0)
    }
}

fn read_string(cur: &mut Cursor) -> Bytes {
    let mut digits = Vec::new();
    while let Some(b) = cur.peek() {
        if b == b':' {
            break;
        }
        digits.push(b);
        cur.advance(1);
    }
    cur.advance(1); // past the ':'

    let declared = std::str::from_utf8(&digits)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0);

    // Nonsense or overlong lengths degrade to an empty string so the rest
    // of the document still decodes.
    if declared <= 0 || declared as usize > cur.remaining() {
        return Bytes::new();
    }

    Bytes::copy_from_slice(cur.take(declared as usize))
}
