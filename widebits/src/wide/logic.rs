//! Element-wise logic over word arrays.
//!
//! Binary operations write into `dest`; `src` must have the same length.

use crate::Word;
use std::iter::zip;

/// Total number of set bits across `words`.
#[inline]
#[must_use]
pub fn pop_count<W: Word>(words: &[W]) -> usize {
    words.iter().map(|word| word.count_ones()).sum()
}

#[inline]
pub fn bit_clear<W: Word>(dest: &mut [W]) {
    dest.fill(W::ZERO);
}

#[inline]
pub fn bit_not<W: Word>(dest: &mut [W]) {
    for word in dest.iter_mut() {
        *word = !*word;
    }
}

#[inline]
pub fn bit_and<W: Word>(dest: &mut [W], src: &[W]) {
    assert_eq!(dest.len(), src.len());
    for (target, source) in zip(dest.iter_mut(), src) {
        *target &= *source;
    }
}

#[inline]
pub fn bit_or<W: Word>(dest: &mut [W], src: &[W]) {
    assert_eq!(dest.len(), src.len());
    for (target, source) in zip(dest.iter_mut(), src) {
        *target |= *source;
    }
}

#[inline]
pub fn bit_xor<W: Word>(dest: &mut [W], src: &[W]) {
    assert_eq!(dest.len(), src.len());
    for (target, source) in zip(dest.iter_mut(), src) {
        *target ^= *source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_arrays() {
        let mut empty: [u64; 0] = [];
        bit_clear(&mut empty);
        bit_not(&mut empty);
        bit_and(&mut empty, &[]);
        assert_eq!(pop_count(&empty), 0);
    }

    #[test]
    fn element_wise() {
        let mut dest = [0b1100u8, 0xF0];
        bit_and(&mut dest, &[0b1010, 0xFF]);
        assert_eq!(dest, [0b1000, 0xF0]);
        bit_or(&mut dest, &[0b0001, 0x0F]);
        assert_eq!(dest, [0b1001, 0xFF]);
        bit_xor(&mut dest, &[0b1111, 0x0F]);
        assert_eq!(dest, [0b0110, 0xF0]);
        bit_not(&mut dest);
        assert_eq!(dest, [0b1111_1001, 0x0F]);
        assert_eq!(pop_count(&dest), 10);
        bit_clear(&mut dest);
        assert_eq!(dest, [0, 0]);
    }

    #[test]
    fn pop_count_spans_words() {
        assert_eq!(pop_count(&[u64::MAX, 1, 0, 1 << 63]), 66);
        assert_eq!(pop_count(&[u128::MAX; 3]), 384);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn mismatched_lengths() {
        let mut dest = [0u32; 2];
        bit_xor(&mut dest, &[1, 2, 3]);
    }
}
