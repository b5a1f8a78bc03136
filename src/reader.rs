//! Per-value decoding. Every operation here either fully succeeds and
//! advances the cursor, or fails and leaves the cursor unchanged (atomic
//! failure) — mirrored as `Option<(T, usize)>` rather than a raw byte
//! count, since a Rust reader also needs to hand back the decoded value.
//! The byte count in the `Some` case is the number of bytes the tag and
//! its payload occupied on the wire.

use crate::cursor::ReadCursor;
use crate::float;
use crate::tag;

impl<'a> ReadCursor<'a> {
    #[inline]
    fn take_after_tag(&mut self, payload_len: usize) -> Option<&'a [u8]> {
        let total = 1 + payload_len;
        if self.remaining() < total {
            return None;
        }
        Some(&self.take(total)?[1..])
    }

    #[inline]
    fn skip_tag_if(&mut self, t: u8) -> usize {
        match self.peek_tag() {
            Some(tag) if tag == t => {
                self.take(1);
                1
            }
            _ => 0,
        }
    }

    pub fn read_null(&mut self) -> usize {
        self.skip_tag_if(tag::NULL)
    }

    /// Skips zero or more consecutive `none` tags, returning how many were
    /// skipped (0 is not a failure: `none` is padding, not a value).
    pub fn read_none(&mut self) -> usize {
        let mut n = 0;
        while self.skip_tag_if(tag::NONE) == 1 {
            n += 1;
        }
        n
    }

    pub fn read_bool(&mut self) -> Option<(bool, usize)> {
        match self.peek_tag()? {
            tag::TRUE => {
                self.take(1);
                Some((true, 1))
            }
            tag::FALSE => {
                self.take(1);
                Some((false, 1))
            }
            _ => None,
        }
    }

    pub fn read_blob(&mut self) -> usize {
        self.skip_tag_if(tag::BLOB)
    }

    pub fn read_array_stream(&mut self) -> usize {
        self.skip_tag_if(tag::ARRAY_STREAM)
    }

    pub fn read_object_stream(&mut self) -> usize {
        self.skip_tag_if(tag::OBJECT_STREAM)
    }

    /// Compares against the `ends` tag.
    pub fn read_end_stream(&mut self) -> usize {
        self.skip_tag_if(tag::ENDS)
    }

    /// Returns `(item_count, bytes_read)`. `None` if the next tag is not a
    /// small-array tag (including when it's the streamed `arrays` form,
    /// which must be read with `read_array_stream` instead).
    pub fn read_small_array(&mut self) -> Option<(u8, usize)> {
        let t = self.peek_tag()?;
        if !tag::is_small_array(t) {
            return None;
        }
        self.take(1);
        Some((tag::container_count(t), 1))
    }

    pub fn read_small_object(&mut self) -> Option<(u8, usize)> {
        let t = self.peek_tag()?;
        if !tag::is_small_object(t) {
            return None;
        }
        self.take(1);
        Some((tag::container_count(t), 1))
    }

    /// Returns `(value, bytes_read)`. Packed tags are self-representing (the
    /// tag byte reinterpreted as `i8` is the value); int16/32/64 follow.
    pub fn read_integer(&mut self) -> Option<(i64, usize)> {
        let t = self.peek_tag()?;
        if tag::is_packed_int(t) {
            self.take(1);
            return Some((t as i8 as i64, 1));
        }
        match t {
            tag::INT16 => {
                let p = self.take_after_tag(2)?;
                Some((i16::from_le_bytes([p[0], p[1]]) as i64, 3))
            }
            tag::INT32 => {
                let p = self.take_after_tag(4)?;
                Some((i32::from_le_bytes([p[0], p[1], p[2], p[3]]) as i64, 5))
            }
            tag::INT64 => {
                let p = self.take_after_tag(8)?;
                let mut b = [0u8; 8];
                b.copy_from_slice(p);
                Some((i64::from_le_bytes(b), 9))
            }
            _ => None,
        }
    }

    /// Returns `(value, bytes_read)`. See `crate::float::decode_half`/
    /// `decode_single` for the half/single reconstruction rules.
    pub fn read_float(&mut self) -> Option<(f64, usize)> {
        let t = self.peek_tag()?;
        match t {
            tag::FLT0 => {
                self.take(1);
                Some((0.0, 1))
            }
            tag::FLT16 => {
                let p = self.take_after_tag(2)?;
                let hr = u16::from_le_bytes([p[0], p[1]]);
                Some((float::decode_half(hr), 3))
            }
            tag::FLT32 => {
                let p = self.take_after_tag(4)?;
                let fr = u32::from_le_bytes([p[0], p[1], p[2], p[3]]);
                Some((float::decode_single(fr), 5))
            }
            tag::FLT64 => {
                let p = self.take_after_tag(8)?;
                let mut b = [0u8; 8];
                b.copy_from_slice(p);
                Some((f64::from_bits(u64::from_le_bytes(b)), 9))
            }
            _ => None,
        }
    }

    /// Returns `(string_len, bytes_read)` for the tag + length header; the
    /// caller follows with `read_data` for the payload bytes.
    pub fn read_string(&mut self) -> Option<(usize, usize)> {
        let t = self.peek_tag()?;
        if tag::is_str6(t) {
            self.take(1);
            return Some((tag::str6_len(t) as usize, 1));
        }
        match t {
            tag::STR16 => {
                let p = self.take_after_tag(2)?;
                Some((u16::from_le_bytes([p[0], p[1]]) as usize, 3))
            }
            tag::STR32 => {
                let p = self.take_after_tag(4)?;
                Some((u32::from_le_bytes([p[0], p[1], p[2], p[3]]) as usize, 5))
            }
            tag::STR64 => {
                let p = self.take_after_tag(8)?;
                let mut b = [0u8; 8];
                b.copy_from_slice(p);
                Some((u64::from_le_bytes(b) as usize, 9))
            }
            _ => None,
        }
    }

    /// Returns 0 if fewer than 5 bytes remain or the magic doesn't match,
    /// 4 if the magic matches but the version byte is nonzero (`BadVersion`,
    /// only the magic is consumed), 5 on full success.
    pub fn read_signature(&mut self) -> usize {
        let bytes = match self.peek(5) {
            Some(b) => b,
            None => return 0,
        };
        if &bytes[..4] != b"YABE" {
            return 0;
        }
        if bytes[4] != 0 {
            self.take(4);
            return 4;
        }
        self.take(5);
        5
    }
}
