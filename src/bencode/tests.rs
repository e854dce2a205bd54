use bytes::Bytes;

use super::cursor::Cursor;
use super::*;

fn string(s: &[u8]) -> Value {
    Value::Bytes(Bytes::copy_from_slice(s))
}

#[test]
fn test_decode_integer() {
    let node = decode_value(b"i42e").unwrap();
    assert_eq!(node.value, Value::Integer(42));
    assert_eq!((node.offset, node.length), (0, 4));

    assert_eq!(decode_value(b"i-42e").unwrap().value, Value::Integer(-42));
    assert_eq!(decode_value(b"i0e").unwrap().value, Value::Integer(0));
}

#[test]
fn test_decode_integer_exponent_form() {
    // Exponent markers from buggy encoders parse as floats, truncated.
    assert_eq!(decode_value(b"i4E2e").unwrap().value, Value::Integer(400));
    assert_eq!(decode_value(b"i1D3e").unwrap().value, Value::Integer(1000));
    assert_eq!(decode_value(b"i-2E1e").unwrap().value, Value::Integer(-20));
}

#[test]
fn test_decode_integer_garbage_is_zero() {
    let node = decode_value(b"iabce").unwrap();
    assert_eq!(node.value, Value::Integer(0));
    // The run is consumed through its terminator either way.
    assert_eq!(node.length, 5);
}

#[test]
fn test_decode_string() {
    let node = decode_value(b"4:spam").unwrap();
    assert_eq!(node.value, string(b"spam"));
    assert_eq!((node.offset, node.length), (0, 6));
}

#[test]
fn test_decode_string_overlong_length() {
    // A declared length past the end of input degrades to an empty string
    // covering just the prefix, and decoding continues after it.
    let node = decode_value(b"10:abc").unwrap();
    assert_eq!(node.value, string(b""));
    assert_eq!((node.offset, node.length), (0, 3));
}

#[test]
fn test_decode_string_zero_length() {
    let node = decode_value(b"0:").unwrap();
    assert_eq!(node.value, string(b""));
    assert_eq!((node.offset, node.length), (0, 2));
}

#[test]
fn test_decode_list() {
    let node = decode_value(b"l4:spami42ee").unwrap();
    match &node.value {
        Value::List(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].value, string(b"spam"));
            assert_eq!(items[1].value, Value::Integer(42));
        }
        _ => panic!("expected list"),
    }
    assert_eq!((node.offset, node.length), (0, 12));
}

#[test]
fn test_decode_dict() {
    let node = decode_value(b"d3:cow3:moo4:spam4:eggse").unwrap();
    match &node.value {
        Value::Dict(entries) => {
            assert_eq!(entries.len(), 2);
        }
        _ => panic!("expected dict"),
    }
    assert_eq!(node.get(b"cow").unwrap().value, string(b"moo"));
    assert_eq!(node.get(b"spam").unwrap().value, string(b"eggs"));
}

#[test]
fn test_dict_duplicate_keys_last_write_wins() {
    let node = decode_value(b"d3:key1:a3:key1:be").unwrap();
    assert_eq!(node.get(b"key").unwrap().value, string(b"b"));
    assert_eq!(node.as_dict().unwrap().len(), 1);
}

#[test]
fn test_find_is_case_insensitive() {
    let doc = decode(b"d8:Announce4:spame").unwrap();
    assert!(doc.find("announce").is_some());
    assert!(doc.find("ANNOUNCE").is_some());
    assert!(doc.find("announce-list").is_none());
    assert_eq!(doc.get(b"announce"), None);
}

#[test]
fn test_source_spans_reproduce_encoding() {
    let data = b"d3:fool3:bari-2ee4:spam4:eggse";
    let doc = decode(data).unwrap();

    assert_eq!(doc.raw(data), &data[..]);

    let list = doc.find("foo").unwrap();
    assert_eq!(list.raw(data), b"l3:bari-2ee");

    let items = list.as_list().unwrap();
    assert_eq!(items[0].raw(data), b"3:bar");
    assert_eq!(items[1].raw(data), b"i-2e");

    assert_eq!(doc.find("spam").unwrap().raw(data), b"4:eggs");
}

#[test]
fn test_decode_rejects_non_dictionary_root() {
    assert_eq!(decode(b"i42e"), Err(BencodeError::RootNotDictionary));
    assert_eq!(decode(b"4:spam"), Err(BencodeError::RootNotDictionary));
    assert_eq!(decode(b"l4:spame"), Err(BencodeError::RootNotDictionary));
    assert_eq!(decode(b"de"), Err(BencodeError::RootNotDictionary));
    assert_eq!(decode(b"xyz"), Err(BencodeError::RootNotDictionary));
}

#[test]
fn test_decode_rejects_out_of_range_lengths() {
    assert_eq!(decode(b""), Err(BencodeError::DocumentLength(0)));

    let oversized = vec![b'd'; MAX_DOCUMENT_LEN + 1];
    assert_eq!(
        decode(&oversized),
        Err(BencodeError::DocumentLength(MAX_DOCUMENT_LEN + 1))
    );
}

#[test]
fn test_unknown_byte_ends_container() {
    // 'z' cannot start a node; the list ends there instead of failing the
    // whole document.
    let doc = decode(b"d1:xl3:abcz2:okee").unwrap();

    let list = doc.find("x").unwrap().as_list().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].value, string(b"abc"));

    // The dictionary entry after the damage is gone, but decode succeeded.
    assert!(doc.find("ok").is_none());
}

#[test]
fn test_trailing_data_is_ignored() {
    let doc = decode(b"d3:foo3:bareTRAILING").unwrap();
    assert_eq!(doc.length, 12);
    assert_eq!(doc.find("foo").unwrap().value, string(b"bar"));
}

#[test]
fn test_cursor_advances_and_clamps() {
    let mut cur = Cursor::new(b"abc");
    assert_eq!(cur.peek(), Some(b'a'));
    assert_eq!(cur.remaining(), 3);

    cur.advance(2);
    assert_eq!(cur.pos(), 2);
    assert_eq!(cur.peek(), Some(b'c'));

    cur.advance(5);
    assert_eq!(cur.pos(), 3);
    assert_eq!(cur.peek(), None);
    assert_eq!(cur.remaining(), 0);
}

#[test]
fn test_cursor_take() {
    let mut cur = Cursor::new(b"abcdef");
    assert_eq!(cur.take(4), b"abcd");
    assert_eq!(cur.pos(), 4);
    // Short reads clamp at the end.
    assert_eq!(cur.take(10), b"ef");
    assert_eq!(cur.remaining(), 0);
}
