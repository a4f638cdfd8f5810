//! Bit level access to NMEA 2000 payloads
//!
//! Fields are packed LSB first: bit 0 is the least significant bit of byte 0 and
//! a field that crosses a byte boundary continues in the low bits of the next byte.

/// Outcome of checking a raw field value against the reserved values at the top
/// of its range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Present,
    NotPresent,
    Error,
}

/// All ones for the low `bit_count` bits
#[inline]
pub fn mask(bit_count: usize) -> u64 {
    if bit_count >= 64 {
        u64::MAX
    } else {
        (1u64 << bit_count) - 1
    }
}

/// Interpret the low `bit_count` bits of `raw` as a two's complement number
#[inline]
pub fn sign_extend(raw: u64, bit_count: usize) -> i64 {
    if bit_count == 0 {
        return 0;
    }
    if bit_count >= 64 {
        return raw as i64;
    }
    let shift = 64 - bit_count;
    ((raw << shift) as i64) >> shift
}

/// Read `bit_count` (1..=64) bits starting at `start_bit` as an unsigned value
///
/// # Returns
/// `None` when the requested range does not fit in `data`
pub fn read_unsigned(data: &[u8], start_bit: usize, bit_count: usize) -> Option<u64> {
    if bit_count == 0 || bit_count > 64 || start_bit + bit_count > data.len() * 8 {
        return None;
    }

    let mut value = 0u64;
    let mut done = 0;
    let mut bit = start_bit;
    while done < bit_count {
        let offset = bit % 8;
        let take = (8 - offset).min(bit_count - done);
        let chunk = (u64::from(data[bit / 8]) >> offset) & mask(take);
        value |= chunk << done;
        done += take;
        bit += take;
    }
    Some(value)
}

/// Read a field of `bit_count` bits, sign extending when `signed` is set
///
/// Unsigned 64 bit values above `i64::MAX` wrap; use [`read_unsigned`] for those.
pub fn read_bits(data: &[u8], start_bit: usize, bit_count: usize, signed: bool) -> Option<i64> {
    let raw = read_unsigned(data, start_bit, bit_count)?;
    if signed {
        Some(sign_extend(raw, bit_count))
    } else {
        Some(raw as i64)
    }
}

/// Write the low `bit_count` bits of `value` at `start_bit`, growing `buffer` as needed
///
/// Bits outside the written range are preserved.
pub fn write_bits(buffer: &mut Vec<u8>, start_bit: usize, bit_count: usize, value: u64) {
    if bit_count == 0 {
        return;
    }
    let bit_count = bit_count.min(64);
    let needed = (start_bit + bit_count).div_ceil(8);
    if buffer.len() < needed {
        buffer.resize(needed, 0);
    }

    let mut done = 0;
    let mut bit = start_bit;
    while done < bit_count {
        let offset = bit % 8;
        let take = (8 - offset).min(bit_count - done);
        let field_mask = (mask(take) << offset) as u8;
        let chunk = (((value >> done) & mask(take)) << offset) as u8;
        let byte = &mut buffer[bit / 8];
        *byte = (*byte & !field_mask) | chunk;
        done += take;
        bit += take;
    }
}

/// Largest raw value (as a bit pattern) that carries data for a field of this width
/// and sign, i.e. the "not present" sentinel
pub fn not_present_raw(bit_count: usize, signed: bool) -> u64 {
    if signed && bit_count >= 4 {
        mask(bit_count - 1)
    } else {
        mask(bit_count)
    }
}

/// Classify a raw bit pattern against the reserved sentinel values
///
/// | width | not present | error |
/// |---|---|---|
/// | 1 | none | none |
/// | 2-3 | all ones | none |
/// | >= 4 unsigned | all ones | all ones - 1 |
/// | >= 4 signed | max positive | max positive - 1 |
pub fn classify(raw: u64, bit_count: usize, signed: bool) -> Sentinel {
    if bit_count <= 1 || bit_count > 64 {
        return Sentinel::Present;
    }
    let raw = raw & mask(bit_count);
    let top = not_present_raw(bit_count, signed);
    if raw == top {
        Sentinel::NotPresent
    } else if bit_count >= 4 && raw == top - 1 {
        Sentinel::Error
    } else {
        Sentinel::Present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_aligned_little_endian() {
        let data = [0x5A, 0x1D, 0xFF, 0x7F];
        assert_eq!(read_bits(&data, 0, 8, false), Some(0x5A));
        assert_eq!(read_bits(&data, 0, 16, false), Some(0x1D5A));
        assert_eq!(read_bits(&data, 16, 16, true), Some(0x7FFF));
        assert_eq!(read_bits(&data, 16, 16, false), Some(0x7FFF));
    }

    #[test]
    fn test_read_across_byte_boundary() {
        // 0b1010_1100, 0b0000_0011: bits 6..10 are 0b1110 read as 4 bits starting at bit 6
        let data = [0b1010_1100, 0b0000_0011];
        assert_eq!(read_unsigned(&data, 6, 4), Some(0b1110));
        assert_eq!(read_unsigned(&data, 2, 3), Some(0b011));
    }

    #[test]
    fn test_read_signed_negative() {
        let data = (-2i16).to_le_bytes();
        assert_eq!(read_bits(&data, 0, 16, true), Some(-2));
        assert_eq!(read_bits(&data, 0, 16, false), Some(0xFFFE));

        // 4-bit signed -1 in the upper nibble
        let data = [0xF0];
        assert_eq!(read_bits(&data, 4, 4, true), Some(-1));
    }

    #[test]
    fn test_read_past_end() {
        let data = [0u8; 2];
        assert_eq!(read_unsigned(&data, 9, 8), None);
        assert_eq!(read_unsigned(&data, 0, 0), None);
        assert_eq!(read_unsigned(&data, 0, 65), None);
    }

    #[test]
    fn test_write_preserves_neighbours() {
        let mut buf = vec![0xFF, 0xFF];
        write_bits(&mut buf, 4, 6, 0);
        assert_eq!(buf, vec![0x0F, 0xFC]);
    }

    #[test]
    fn test_write_grows_buffer() {
        let mut buf = Vec::new();
        write_bits(&mut buf, 12, 16, 0xABCD);
        assert_eq!(buf.len(), 4);
        assert_eq!(read_unsigned(&buf, 12, 16), Some(0xABCD));
    }

    #[test]
    fn test_write_read_roundtrip_all_widths_and_offsets() {
        for offset in (0..1024).step_by(37).chain([1016, 1023]) {
            for width in 1..=64usize {
                let unsigned = 0x9E37_79B9_7F4A_7C15u64 & mask(width);
                let mut buf = Vec::new();
                write_bits(&mut buf, offset, width, unsigned);
                assert_eq!(read_unsigned(&buf, offset, width), Some(unsigned));

                let signed = -(((0x1234_5678_9ABC_DEF1u64 & mask(width - 1)) as i64) >> 1) - 1;
                let mut buf = vec![0xA5; 3];
                write_bits(&mut buf, offset, width, signed as u64);
                assert_eq!(read_bits(&buf, offset, width, true), Some(signed));
            }
        }
    }

    #[test]
    fn test_sentinels_signed_widths() {
        for width in [4usize, 8, 16, 24, 32, 64] {
            let max = (1u64 << (width - 1)) - 1;
            assert_eq!(classify(max, width, true), Sentinel::NotPresent, "width {}", width);
            assert_eq!(classify(max - 1, width, true), Sentinel::Error, "width {}", width);
            assert_eq!(classify(max - 2, width, true), Sentinel::Present);
            assert_eq!(classify(0, width, true), Sentinel::Present);
            // all ones is -1 for signed fields
            assert_eq!(classify(mask(width), width, true), Sentinel::Present);
        }
    }

    #[test]
    fn test_sentinels_unsigned_and_small() {
        assert_eq!(classify(0xFF, 8, false), Sentinel::NotPresent);
        assert_eq!(classify(0xFE, 8, false), Sentinel::Error);
        assert_eq!(classify(0xFD, 8, false), Sentinel::Present);
        assert_eq!(classify(u64::MAX, 64, false), Sentinel::NotPresent);
        assert_eq!(classify(3, 2, false), Sentinel::NotPresent);
        assert_eq!(classify(2, 2, false), Sentinel::Present);
        assert_eq!(classify(7, 3, false), Sentinel::NotPresent);
        assert_eq!(classify(6, 3, false), Sentinel::Present);
        assert_eq!(classify(1, 1, false), Sentinel::Present);
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x7F, 7), -1);
        assert_eq!(sign_extend(0x3F, 7), 63);
        assert_eq!(sign_extend(u64::MAX, 64), -1);
    }
}
