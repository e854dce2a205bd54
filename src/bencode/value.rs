use bytes::Bytes;
use std::collections::BTreeMap;

/// A bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and
/// dictionaries. Container entries are [`Node`]s, so nested values keep
/// their source spans too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// A signed 64-bit integer.
    Integer(i64),
    /// An ordered list of values.
    List(Vec<Node>),
    /// A dictionary with byte string keys. Duplicate keys in the input
    /// resolve last-write-wins.
    Dict(BTreeMap<Bytes, Node>),
}

/// A decoded value together with the byte range it was decoded from.
///
/// `offset` and `length` span the node's complete encoding in the source
/// buffer, type markers and delimiters included: re-slicing that range
/// reproduces the encoded form byte for byte. The info-hash computation
/// relies on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The decoded value.
    pub value: Value,
    /// Start of this node's encoding in the source buffer.
    pub offset: usize,
    /// Byte count of the encoding, delimiters included.
    pub length: usize,
}

impl Node {
    /// Returns the value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match &self.value {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.value {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a byte string holding
    /// valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use rmagnet::bencode::decode_value;
    ///
    /// let node = decode_value(b"4:spam").unwrap();
    /// assert_eq!(node.as_str(), Some("spam"));
    /// assert_eq!(node.as_integer(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&Vec<Node>> {
        match &self.value {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Node>> {
        match &self.value {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary, byte-exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use rmagnet::bencode::decode;
    ///
    /// let doc = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(doc.get(b"foo").and_then(|n| n.as_str()), Some("bar"));
    /// assert_eq!(doc.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Node> {
        self.as_dict()?.get(key)
    }

    /// Looks up a key under ASCII case-insensitive comparison.
    ///
    /// Metainfo keys are case-sensitive per BEP-3, but encoders vary;
    /// this relaxed lookup is what the `info`/`announce` searches use. The
    /// first matching entry in key order wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use rmagnet::bencode::decode;
    ///
    /// let doc = decode(b"d8:Announce4:spame").unwrap();
    /// assert!(doc.find("announce").is_some());
    /// assert!(doc.get(b"announce").is_none());
    /// ```
    pub fn find(&self, key: &str) -> Option<&Node> {
        self.as_dict()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key.as_bytes()))
            .map(|(_, node)| node)
    }

    /// Re-slices this node's exact source encoding out of the buffer it was
    /// decoded from.
    pub fn raw<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.offset..self.offset + self.length]
    }
}
