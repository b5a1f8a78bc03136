//! Cursors: a position + remaining-bytes pair over a caller-owned byte
//! region, split into a write-side and a read-side type so that aliasing
//! two writers over the same region is a borrow-checker error rather than
//! a runtime hazard.

use crate::tag::Kind;

/// Write-side cursor over a caller-owned, exclusively-borrowed byte region.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn end_of_buffer(&self) -> bool {
        self.remaining() == 0
    }

    /// Atomically write `bytes` if there is room, advancing the cursor by
    /// `bytes.len()`. Returns `false` and leaves the cursor unchanged
    /// otherwise.
    #[must_use]
    pub(crate) fn put(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() > self.remaining() {
            return false;
        }
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        true
    }

    /// Non-atomic raw copy: writes as many of `data`'s bytes as fit,
    /// advancing the cursor to the end of the buffer on a partial write.
    pub fn write_data(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.remaining());
        let end = self.pos + n;
        self.buf[self.pos..end].copy_from_slice(&data[..n]);
        self.pos = end;
        n
    }
}

/// Read-side cursor over a caller-owned, shared-borrowed byte region.
#[derive(Debug, Clone, Copy)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn end_of_buffer(&self) -> bool {
        self.remaining() == 0
    }

    /// The tag byte at the cursor without advancing it, or `None` at
    /// end of buffer.
    #[inline]
    pub fn peek_tag(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Inspect the kind of the next value without advancing the cursor or
    /// failing; see `crate::tag::Kind`.
    pub fn peek_kind(&self) -> Kind {
        match self.peek_tag() {
            Some(tag) => Kind::from_tag(tag),
            None => Kind::Invalid,
        }
    }

    /// Inspect the next `n` bytes without advancing the cursor, or `None`
    /// if fewer than `n` bytes remain.
    pub(crate) fn peek(&self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        Some(&self.buf[self.pos..self.pos + n])
    }

    /// Atomically read and advance past `n` bytes, or return `None` and
    /// leave the cursor unchanged if fewer than `n` bytes remain.
    pub(crate) fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let end = self.pos + n;
        let out = &self.buf[self.pos..end];
        self.pos = end;
        Some(out)
    }

    /// Non-atomic raw copy: reads as many bytes as fit into `out`,
    /// advancing the cursor by that count.
    pub fn read_data(&mut self, out: &mut [u8]) -> usize {
        let n = out.len().min(self.remaining());
        let end = self.pos + n;
        out[..n].copy_from_slice(&self.buf[self.pos..end]);
        self.pos = end;
        n
    }
}
