//! YABE ("Yet Another Binary Encoding"): a compact, self-describing binary
//! encoding for null, bool, integers, floats, UTF-8 strings, MIME-typed
//! blobs, arrays, and objects.
//!
//! The crate is a thin, allocation-free layer over caller-owned byte slices:
//! [`cursor::WriteCursor`] and [`cursor::ReadCursor`] track a position
//! within a borrowed buffer, and [`writer`]/[`reader`] add the per-value
//! tag + payload encode/decode methods. Every operation is atomic — it
//! either fully succeeds and advances the cursor, or fails and leaves the
//! cursor exactly where it was.

pub mod cursor;
mod float;
pub mod reader;
pub mod tag;
pub mod writer;

pub use cursor::{ReadCursor, WriteCursor};
pub use tag::Kind;

#[cfg(test)]
mod tests {
    use super::*;

    /// Renders `buf` as space-separated hex bytes, for failure messages in
    /// the round-trip tests below.
    fn hex_dump(buf: &[u8]) -> String {
        buf.iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn signature_then_small_object_of_mixed_values_roundtrips() {
        let mut buf = [0u8; 64];
        let n = {
            let mut w = WriteCursor::new(&mut buf);
            w.write_signature();
            w.write_small_object(3);
            w.write_string(3);
            w.write_data(b"key");
            w.write_integer(-17);
            w.write_string(4);
            w.write_data(b"name");
            w.write_bool(true);
            w.write_string(5);
            w.write_data(b"count");
            w.write_float(4.5);
            w.pos()
        };
        let encoded = &buf[..n];

        let mut r = ReadCursor::new(encoded);
        assert_eq!(r.read_signature(), 5, "{}", hex_dump(encoded));
        let (count, _) = r.read_small_object().expect("small object header");
        assert_eq!(count, 3);

        let (klen, _) = r.read_string().unwrap();
        let mut key = vec![0u8; klen];
        r.read_data(&mut key);
        assert_eq!(&key, b"key");
        assert_eq!(r.read_integer(), Some((-17, 1)));

        let (klen, _) = r.read_string().unwrap();
        let mut key = vec![0u8; klen];
        r.read_data(&mut key);
        assert_eq!(&key, b"name");
        assert_eq!(r.read_bool(), Some((true, 1)));

        let (klen, _) = r.read_string().unwrap();
        let mut key = vec![0u8; klen];
        r.read_data(&mut key);
        assert_eq!(&key, b"count");
        assert_eq!(r.read_float(), Some((4.5, 3)));

        assert!(r.end_of_buffer());
    }

    #[test]
    fn streamed_array_of_unknown_length_roundtrips() {
        let mut buf = [0u8; 32];
        let n = {
            let mut w = WriteCursor::new(&mut buf);
            w.write_array_stream();
            w.write_integer(1);
            w.write_integer(2);
            w.write_integer(3);
            w.write_end_stream();
            w.pos()
        };
        let encoded = &buf[..n];

        let mut r = ReadCursor::new(encoded);
        assert_eq!(r.read_array_stream(), 1, "{}", hex_dump(encoded));
        let mut items = Vec::new();
        loop {
            if r.read_end_stream() == 1 {
                break;
            }
            let (v, _) = r.read_integer().expect("array item");
            items.push(v);
        }
        assert_eq!(items, vec![1, 2, 3]);
        assert!(r.end_of_buffer());
    }

    #[test]
    fn peek_kind_does_not_advance_cursor() {
        let buf = [0xC9u8, 0x2A];
        let r = ReadCursor::new(&buf);
        assert_eq!(r.peek_kind(), Kind::True);
        assert_eq!(r.pos(), 0);
    }

    #[test]
    fn truncated_buffer_fails_atomically_mid_stream() {
        let mut buf = [0u8; 3];
        let n = {
            let mut w = WriteCursor::new(&mut buf);
            w.write_integer(1);
            w.write_integer(1_000_000); // needs int32, only 2 bytes remain
            w.pos()
        };
        assert_eq!(n, 1, "second write must not have partially landed");

        let mut r = ReadCursor::new(&buf[..n]);
        assert_eq!(r.read_integer(), Some((1, 1)));
        assert_eq!(r.read_integer(), None);
        assert!(r.end_of_buffer());
    }
}
