//! Fixed-width field encoding shared by every record schema.
//!
//! A record is a flat run of fields with no header and no padding between
//! them. Text is NUL-padded UTF-8, numbers are little-endian, booleans are a
//! single byte.

/// A schema that serializes to exactly [`FixedRecord::SIZE`] bytes.
pub trait FixedRecord: Sized {
    /// Human-readable name of the record kind (used in errors and logs).
    const KIND: &'static str;

    /// Encoded size in bytes. Every record of this kind occupies exactly this
    /// many bytes on disk.
    const SIZE: usize;

    /// Write every field, in order, to `out`.
    fn encode(&self, out: &mut FieldWriter<'_>);

    /// Read every field, in order, from `input`.
    fn decode(input: &mut FieldReader<'_>) -> Self;
}

/// Encode a record into a freshly allocated buffer of `R::SIZE` bytes.
#[must_use]
pub fn encode_record<R: FixedRecord>(record: &R) -> Vec<u8> {
    let mut buf = vec![0u8; R::SIZE];
    let mut writer = FieldWriter::new(&mut buf);
    record.encode(&mut writer);
    debug_assert_eq!(writer.position(), R::SIZE, "{} layout mismatch", R::KIND);
    buf
}

/// Decode a record from a buffer of exactly `R::SIZE` bytes.
#[must_use]
pub fn decode_record<R: FixedRecord>(buf: &[u8]) -> R {
    debug_assert_eq!(buf.len(), R::SIZE);
    let mut reader = FieldReader::new(buf);
    R::decode(&mut reader)
}

/// Cut `value` to at most `width` bytes without splitting a character.
#[must_use]
pub fn truncate(value: &str, width: usize) -> &str {
    if value.len() <= width {
        return value;
    }
    let mut end = width;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Sequential writer over a record buffer.
#[derive(Debug)]
pub struct FieldWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    /// Start writing at the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, width: usize) -> &mut [u8] {
        let field = &mut self.buf[self.pos..self.pos + width];
        self.pos += width;
        field
    }

    /// Write a NUL-padded text field, truncating values that do not fit.
    pub fn text(&mut self, value: &str, width: usize) {
        let bytes = truncate(value, width).as_bytes();
        let field = self.take(width);
        field[..bytes.len()].copy_from_slice(bytes);
        field[bytes.len()..].fill(0);
    }

    /// Write a little-endian `i32`.
    pub fn i32(&mut self, value: i32) {
        self.take(4).copy_from_slice(&value.to_le_bytes());
    }

    /// Write a little-endian `f64`.
    pub fn f64(&mut self, value: f64) {
        self.take(8).copy_from_slice(&value.to_le_bytes());
    }

    /// Write a one-byte boolean.
    pub fn bool(&mut self, value: bool) {
        self.take(1)[0] = u8::from(value);
    }
}

/// Sequential reader over a record buffer.
#[derive(Debug)]
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    /// Start reading at the beginning of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, width: usize) -> &'a [u8] {
        let field = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        field
    }

    /// Read a NUL-padded text field. Invalid UTF-8 is replaced, not rejected.
    pub fn text(&mut self, width: usize) -> String {
        let field = self.take(width);
        let end = field.iter().position(|&b| b == 0).unwrap_or(width);
        String::from_utf8_lossy(&field[..end]).into_owned()
    }

    /// Read a little-endian `i32`.
    pub fn i32(&mut self) -> i32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4));
        i32::from_le_bytes(raw)
    }

    /// Read a little-endian `f64`.
    pub fn f64(&mut self) -> f64 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8));
        f64::from_le_bytes(raw)
    }

    /// Read a one-byte boolean; any non-zero byte is `true`.
    pub fn bool(&mut self) -> bool {
        self.take(1)[0] != 0
    }
}
