//! Per-value encoding. Every operation here returns the number of bytes
//! written: 0 means the value didn't fit and the cursor is unchanged
//! (atomic failure); a positive value means the whole encoding was written
//! and the cursor advanced by exactly that many bytes.

use crate::cursor::WriteCursor;
use crate::float;
use crate::tag;

impl<'a> WriteCursor<'a> {
    #[inline]
    fn write_tag(&mut self, t: u8) -> usize {
        if self.put(&[t]) {
            1
        } else {
            0
        }
    }

    #[inline]
    fn write_tag_and_payload(&mut self, t: u8, payload: &[u8]) -> usize {
        let total = 1 + payload.len();
        if self.remaining() < total {
            return 0;
        }
        let ok = self.put(&[t]) && self.put(payload);
        debug_assert!(ok, "capacity was checked above");
        total
    }

    pub fn write_null(&mut self) -> usize {
        self.write_tag(tag::NULL)
    }

    pub fn write_none(&mut self) -> usize {
        self.write_tag(tag::NONE)
    }

    pub fn write_bool(&mut self, v: bool) -> usize {
        self.write_tag(if v { tag::TRUE } else { tag::FALSE })
    }

    pub fn write_blob(&mut self) -> usize {
        self.write_tag(tag::BLOB)
    }

    pub fn write_array_stream(&mut self) -> usize {
        self.write_tag(tag::ARRAY_STREAM)
    }

    pub fn write_object_stream(&mut self) -> usize {
        self.write_tag(tag::OBJECT_STREAM)
    }

    pub fn write_end_stream(&mut self) -> usize {
        self.write_tag(tag::ENDS)
    }

    /// Fails (returns 0) if `n > 6`; a streamed array must be used instead.
    pub fn write_small_array(&mut self, n: u8) -> usize {
        if n > 6 {
            return 0;
        }
        self.write_tag(tag::small_array_tag(n))
    }

    pub fn write_small_object(&mut self, n: u8) -> usize {
        if n > 6 {
            return 0;
        }
        self.write_tag(tag::small_object_tag(n))
    }

    /// Narrowest-fits width selection: packed tag (-32..127), else int16,
    /// int32, int64 in that order.
    pub fn write_integer(&mut self, v: i64) -> usize {
        if (-32..=127).contains(&v) {
            self.write_tag(v as i8 as u8)
        } else if (i16::MIN as i64..=i16::MAX as i64).contains(&v) {
            self.write_tag_and_payload(tag::INT16, &(v as i16).to_le_bytes())
        } else if (i32::MIN as i64..=i32::MAX as i64).contains(&v) {
            self.write_tag_and_payload(tag::INT32, &(v as i32).to_le_bytes())
        } else {
            self.write_tag_and_payload(tag::INT64, &v.to_le_bytes())
        }
    }

    /// IEEE-754 bit-decomposition width selection; see `crate::float::select`
    /// for the algorithm and its documented zero/Inf/NaN edge cases.
    pub fn write_float(&mut self, v: f64) -> usize {
        match float::select(v) {
            float::Encoded::Zero => self.write_tag(tag::FLT0),
            float::Encoded::Half(h) => self.write_tag_and_payload(tag::FLT16, &h.to_le_bytes()),
            float::Encoded::Single(s) => self.write_tag_and_payload(tag::FLT32, &s.to_le_bytes()),
            float::Encoded::Double(d) => self.write_tag_and_payload(tag::FLT64, &d.to_le_bytes()),
        }
    }

    /// Writes only the tag + length header; the caller follows with
    /// `write_data` for the payload bytes. str16/str32/str64 use distinct
    /// tags per width.
    pub fn write_string(&mut self, len: usize) -> usize {
        let len64 = len as u64;
        if len64 < 64 {
            self.write_tag(tag::str6_tag(len as u8))
        } else if len64 < 1u64 << 16 {
            self.write_tag_and_payload(tag::STR16, &(len as u16).to_le_bytes())
        } else if len64 < 1u64 << 32 {
            self.write_tag_and_payload(tag::STR32, &(len as u32).to_le_bytes())
        } else {
            self.write_tag_and_payload(tag::STR64, &len64.to_le_bytes())
        }
    }

    /// Atomic: fails if fewer than 5 bytes remain.
    pub fn write_signature(&mut self) -> usize {
        if self.put(b"YABE\0") {
            5
        } else {
            0
        }
    }
}
