//! Cursors over length prefixed record streams
//!
//! Advertising data is a contiguous series of records where each record starts with a length
//! byte. Two flavors of this appear:
//!
//! * *length-value* records. This is the format of the AD structures within advertising data and
//!   an EIR. The length byte is followed by that many bytes of payload (the AD type is the first
//!   byte of the payload).
//! * *type-length-value* records. This is the format of the Apple Continuity messages nested
//!   within manufacturer specific data. A type byte comes before the length byte and the length
//!   does not count the type.
//!
//! Both cursors stop silently at the first record whose length would run past the end of the
//! buffer. Advertising data is frequently truncated or mangled, and the records before the broken
//! one are still good.

/// Cursor over length-value records
///
/// Each call to `next` reads a length byte `n` at the current position, returns the following
/// `n` bytes and moves the position forward by `1 + n`. A length of zero produces an empty
/// payload and the walk continues with the next byte.
///
/// ```
/// # use btle_core::tlv::LengthValueIter;
/// let raw = [2, 0x01, 0x1a, 3, 0x16, 0x0d, 0x18];
///
/// let mut iter = LengthValueIter::new(&raw);
///
/// assert_eq!(Some(&[0x01, 0x1a][..]), iter.next());
/// assert_eq!(Some(&[0x16, 0x0d, 0x18][..]), iter.next());
/// assert_eq!(None, iter.next());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LengthValueIter<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> LengthValueIter<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        LengthValueIter { buffer, position: 0 }
    }

    /// Get the offset of the next record within the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the bytes that have not been consumed by the cursor
    ///
    /// After the cursor is exhausted this is empty unless the last record was truncated, in which
    /// case it starts with the length byte of the truncated record.
    pub fn remainder(&self) -> &'a [u8] {
        self.buffer.get(self.position..).unwrap_or_default()
    }
}

impl<'a> Iterator for LengthValueIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.remainder().split_first()?;

        let payload = rest.get(..usize::from(len))?;

        self.position += 1 + payload.len();

        Some(payload)
    }
}

impl core::iter::FusedIterator for LengthValueIter<'_> {}

/// Cursor over type-length-value records
///
/// Each call to `next` reads a type byte and then a length byte `n`, returns the type with the
/// following `n` bytes, and moves the position forward by `2 + n`.
///
/// ```
/// # use btle_core::tlv::TypeLengthValueIter;
/// let raw = [0x10, 2, 0x0b, 0x1c, 0x0c, 9];
///
/// let mut iter = TypeLengthValueIter::new(&raw);
///
/// assert_eq!(Some((0x10, &[0x0b, 0x1c][..])), iter.next());
///
/// // the second record claims nine bytes but there are none
/// assert_eq!(None, iter.next());
/// assert_eq!(&[0x0c, 9], iter.remainder());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TypeLengthValueIter<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> TypeLengthValueIter<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        TypeLengthValueIter { buffer, position: 0 }
    }

    /// Get the offset of the next record within the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the bytes that have not been consumed by the cursor
    pub fn remainder(&self) -> &'a [u8] {
        self.buffer.get(self.position..).unwrap_or_default()
    }
}

impl<'a> Iterator for TypeLengthValueIter<'a> {
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let [ty, len, rest @ ..] = self.remainder() else {
            return None;
        };

        let payload = rest.get(..usize::from(*len))?;

        self.position += 2 + payload.len();

        Some((*ty, payload))
    }
}

impl core::iter::FusedIterator for TypeLengthValueIter<'_> {}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec::Vec;
    use quickcheck_macros::quickcheck;

    /// Build a length-value stream from `records`, truncating any record that cannot be described
    /// by a single length byte.
    fn build_lv(records: &[Vec<u8>]) -> (Vec<u8>, Vec<Vec<u8>>) {
        let mut buffer = Vec::new();

        let records: Vec<Vec<u8>> = records
            .iter()
            .map(|r| r.iter().copied().take(u8::MAX.into()).collect())
            .collect();

        for record in records.iter() {
            buffer.push(record.len() as u8);
            buffer.extend_from_slice(record);
        }

        (buffer, records)
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(0, LengthValueIter::new(&[]).count());

        assert_eq!(0, TypeLengthValueIter::new(&[]).count());
    }

    #[test]
    fn zero_length_record_does_not_stop_the_walk() {
        let raw = [0, 1, 0xaa, 0];

        let payloads: Vec<&[u8]> = LengthValueIter::new(&raw).collect();

        assert_eq!(payloads, [&[][..], &[0xaa][..], &[][..]]);
    }

    #[test]
    fn truncated_length_value_record() {
        let raw = [2, 0x01, 0x06, 5, 0xff, 0x4c];

        let mut iter = LengthValueIter::new(&raw);

        assert_eq!(Some(&[0x01, 0x06][..]), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(3, iter.position());
        assert_eq!(&[5, 0xff, 0x4c], iter.remainder());
    }

    #[test]
    fn type_without_length() {
        let raw = [0x0c, 1, 0x00, 0x10];

        let records: Vec<_> = TypeLengthValueIter::new(&raw).collect();

        assert_eq!(records, [(0x0c, &[0x00][..])]);
    }

    #[test]
    fn type_length_value_positions() {
        let raw = [0x0c, 0, 0x10, 1, 0x0b];

        let mut iter = TypeLengthValueIter::new(&raw);

        assert_eq!(Some((0x0c, &[][..])), iter.next());
        assert_eq!(2, iter.position());
        assert_eq!(Some((0x10, &[0x0b][..])), iter.next());
        assert_eq!(5, iter.position());
        assert!(iter.remainder().is_empty());
    }

    #[quickcheck]
    fn length_value_covers_buffer(records: Vec<Vec<u8>>) -> bool {
        let (buffer, records) = build_lv(&records);

        let mut iter = LengthValueIter::new(&buffer);

        let payloads: Vec<&[u8]> = iter.by_ref().collect();

        let rebuilt: Vec<u8> = payloads
            .iter()
            .flat_map(|p| core::iter::once(p.len() as u8).chain(p.iter().copied()))
            .collect();

        payloads.len() == records.len() && rebuilt == buffer && iter.remainder().is_empty()
    }

    #[quickcheck]
    fn truncated_tail_is_dropped(records: Vec<Vec<u8>>, tail: Vec<u8>) -> bool {
        let (mut buffer, _) = build_lv(&records);

        let expected: Vec<Vec<u8>> = LengthValueIter::new(&buffer).map(|p| p.to_vec()).collect();

        let tail: Vec<u8> = tail.into_iter().take(u8::MAX as usize - 1).collect();

        // the length claims one more byte than is present
        buffer.push(tail.len() as u8 + 1);
        buffer.extend_from_slice(&tail);

        let actual: Vec<Vec<u8>> = LengthValueIter::new(&buffer).map(|p| p.to_vec()).collect();

        expected == actual
    }

    #[quickcheck]
    fn type_length_value_covers_buffer(records: Vec<(u8, Vec<u8>)>) -> bool {
        let mut buffer = Vec::new();

        let records: Vec<(u8, Vec<u8>)> = records
            .into_iter()
            .map(|(ty, data)| (ty, data.into_iter().take(u8::MAX.into()).collect()))
            .collect();

        for (ty, data) in records.iter() {
            buffer.push(*ty);
            buffer.push(data.len() as u8);
            buffer.extend_from_slice(data);
        }

        let decoded: Vec<(u8, Vec<u8>)> = TypeLengthValueIter::new(&buffer)
            .map(|(ty, data)| (ty, data.to_vec()))
            .collect();

        decoded == records
    }

    #[quickcheck]
    fn never_reads_past_the_end(raw: Vec<u8>) -> bool {
        let lv_total: usize = LengthValueIter::new(&raw).map(|p| 1 + p.len()).sum();

        let tlv_total: usize = TypeLengthValueIter::new(&raw).map(|(_, p)| 2 + p.len()).sum();

        lv_total <= raw.len() && tlv_total <= raw.len()
    }
}
