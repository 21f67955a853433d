//! Logical shifts of a word array viewed as one little-word-endian integer.
//!
//! Bits shifted past either end are discarded and zeros are shifted in. The
//! sub-word step rotates each word and splits the result with a carry mask:
//! the carried part is exactly the bits that overflow into the neighbouring
//! word.

use crate::Word;
use crate::wide::logic::bit_clear;

/// Rotates `word` left by `shift` and splits it into the bits that stay in
/// place and the bits that belong to the next more significant word.
///
/// `carry_mask` must select the low `shift` bits and `0 < shift < W::BITS`.
#[inline]
#[must_use]
pub fn rotate_left_split<W: Word>(word: W, shift: usize, carry_mask: W) -> (W, W) {
    debug_assert!(shift > 0 && shift < W::BITS);
    let rotated = word.rotate_left(shift as u32);
    (rotated & !carry_mask, rotated & carry_mask)
}

/// Rotates `word` right by `shift` and splits it into the bits that stay in
/// place and the bits that belong to the next less significant word.
///
/// `carry_mask` must select the high `shift` bits and `0 < shift < W::BITS`.
#[inline]
#[must_use]
pub fn rotate_right_split<W: Word>(word: W, shift: usize, carry_mask: W) -> (W, W) {
    debug_assert!(shift > 0 && shift < W::BITS);
    let rotated = word.rotate_right(shift as u32);
    (rotated & !carry_mask, rotated & carry_mask)
}

/// Shifts `dest` towards its most significant end by `shift` bits.
pub fn left_shift<W: Word>(dest: &mut [W], shift: usize) {
    let count = dest.len();
    if count == 0 {
        return;
    }

    let whole_words = shift / W::BITS;
    if whole_words >= count {
        bit_clear(dest);
        return;
    }
    if whole_words > 0 {
        dest.copy_within(..count - whole_words, whole_words);
        bit_clear(&mut dest[..whole_words]);
    }

    let shift = shift % W::BITS;
    if shift == 0 {
        return;
    }

    let carry_mask = !(W::ONES << shift);
    let top = count - 1;
    dest[top] <<= shift;
    for index in (0..top).rev() {
        let (stay, carry) = rotate_left_split(dest[index], shift, carry_mask);
        dest[index] = stay;
        dest[index + 1] |= carry;
    }
}

/// Shifts `dest` towards its least significant end by `shift` bits.
pub fn right_shift<W: Word>(dest: &mut [W], shift: usize) {
    let count = dest.len();
    if count == 0 {
        return;
    }

    let whole_words = shift / W::BITS;
    if whole_words >= count {
        bit_clear(dest);
        return;
    }
    if whole_words > 0 {
        dest.copy_within(whole_words.., 0);
        bit_clear(&mut dest[count - whole_words..]);
    }

    let shift = shift % W::BITS;
    if shift == 0 {
        return;
    }

    let carry_mask = !(W::ONES >> shift);
    dest[0] >>= shift;
    for index in 1..count {
        let (stay, carry) = rotate_right_split(dest[index], shift, carry_mask);
        dest[index] = stay;
        dest[index - 1] |= carry;
    }
}
