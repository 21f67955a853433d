use crate::error::BitsError;
use crate::wide::{self, BitwiseForSlice, word_count};
use crate::{Bitwise, BitwiseMut, Word};
use derive_more::Into;
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign};
use std::str::FromStr;

/// Names the [`Bits`] type of a given width, computing the word count.
///
/// `bits!(12)` is backed by one `u64`; `bits!(12, u8)` by two `u8` words.
#[macro_export]
macro_rules! bits {
    ($bits:expr) => {
        $crate::Bits<{ $bits }, { $crate::wide::word_count($bits, <u64 as $crate::UnsignedInt>::BITS) }>
    };
    ($bits:expr, $word:ty) => {
        $crate::Bits<{ $bits }, { $crate::wide::word_count($bits, <$word as $crate::UnsignedInt>::BITS) }, $word>
    };
}

/// An unsigned integer of exactly `BITS` bits stored in `SIZE` words of type `W`,
/// least significant word first.
///
/// Bits at positions `BITS` and above are always zero. `SIZE` must equal
/// `ceil(BITS / W::BITS)` and `BITS` must be positive; both are checked when a
/// value is first constructed, at compile time. Use [`bits!`](crate::bits) to
/// name the type without spelling out `SIZE`.
///
/// In-place operators (`&=`, `<<=`, [`Bits::invert`], ...) and the value
/// operators (`&`, `<<`, `!`, ...) are separate impls; the value operators copy
/// the left operand and apply the in-place form to the copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Into)]
pub struct Bits<const BITS: usize, const SIZE: usize, W: Word = u64> {
    words: [W; SIZE],
}

impl<const BITS: usize, const SIZE: usize, W: Word> Bits<BITS, SIZE, W> {
    /// Declared width in bits.
    pub const BIT_LEN: usize = BITS;
    /// Number of backing words.
    pub const WORD_COUNT: usize = SIZE;
    /// Number of meaningful bits in the top word, or 0 if the whole top word is used.
    pub const SPILL: usize = BITS % W::BITS;

    const SHAPE: () = {
        assert!(BITS > 0, "Bits must have a positive width");
        assert!(SIZE == word_count(BITS, W::BITS), "SIZE must be ceil(BITS / word bits)");
    };

    /// Mask of the usable bits of the top word.
    #[inline]
    fn spill_mask() -> W {
        if Self::SPILL == 0 {
            W::ONES
        } else {
            !(W::ONES << Self::SPILL)
        }
    }

    #[inline]
    fn fix_back(&mut self) {
        self.words[SIZE - 1] &= Self::spill_mask();
    }

    #[must_use]
    pub fn zero() -> Self {
        let () = Self::SHAPE;
        Self { words: [W::ZERO; SIZE] }
    }

    /// All `BITS` bits set.
    #[must_use]
    pub fn ones() -> Self {
        Self::from_words([W::ONES; SIZE])
    }

    /// Places `value` in the lowest word and truncates it to the declared width.
    #[must_use]
    pub fn from_word(value: W) -> Self {
        let mut result = Self::zero();
        result.words[0] = value;
        result.fix_back();
        result
    }

    /// Takes `words` least significant first, truncating to the declared width.
    #[must_use]
    pub fn from_words(words: [W; SIZE]) -> Self {
        let () = Self::SHAPE;
        let mut result = Self { words };
        result.fix_back();
        result
    }

    /// Like [`Bits::from_words`] but rejects slices of the wrong length and
    /// values that do not fit in `BITS` bits instead of truncating them.
    pub fn try_from_words(words: &[W]) -> Result<Self, BitsError> {
        let array: [W; SIZE] = words.try_into().map_err(|_| BitsError::LengthMismatch {
            expected: SIZE,
            found: words.len(),
        })?;
        let result = Self::from_words(array);
        if result.words[SIZE - 1] != array[SIZE - 1] {
            return Err(BitsError::ValueTooLarge { bits: BITS });
        }
        Ok(result)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        SIZE
    }

    #[inline]
    #[must_use]
    pub const fn as_words(&self) -> &[W; SIZE] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn into_words(self) -> [W; SIZE] {
        self.into()
    }

    /// Gives `update` mutable access to the raw words, then clears any bits it
    /// set at or above the declared width.
    pub fn data_mut<R>(&mut self, update: impl FnOnce(&mut [W; SIZE]) -> R) -> R {
        let result = update(&mut self.words);
        self.fix_back();
        result
    }

    pub fn clear(&mut self) {
        wide::bit_clear(&mut self.words);
    }

    /// Replaces the value with `value`, truncated to the declared width.
    pub fn assign_word(&mut self, value: W) {
        self.clear();
        self.words[0] = value;
        self.fix_back();
    }

    /// Complements every bit in place.
    pub fn invert(&mut self) {
        wide::bit_not(&mut self.words);
        self.fix_back();
    }

    /// Whether any bit is set; stops at the first non-zero word.
    #[inline]
    #[must_use]
    pub fn any(&self) -> bool {
        self.words.iter().any(|word| *word != W::ZERO)
    }

    #[inline]
    #[must_use]
    pub fn count_ones(&self) -> usize {
        wide::pop_count(&self.words)
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> Default for Bits<BITS, SIZE, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> From<Bits<BITS, SIZE, W>> for bool {
    fn from(bits: Bits<BITS, SIZE, W>) -> Self {
        bits.any()
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> TryFrom<&[W]> for Bits<BITS, SIZE, W> {
    type Error = BitsError;

    fn try_from(words: &[W]) -> Result<Self, Self::Error> {
        Self::try_from_words(words)
    }
}

macro_rules! logic_ops {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident, $primitive:path) => {
        impl<const BITS: usize, const SIZE: usize, W: Word> $assign_trait<&Bits<BITS, SIZE, W>> for Bits<BITS, SIZE, W> {
            #[inline]
            fn $assign(&mut self, other: &Bits<BITS, SIZE, W>) {
                $primitive(&mut self.words, &other.words);
            }
        }

        impl<const BITS: usize, const SIZE: usize, W: Word> $assign_trait for Bits<BITS, SIZE, W> {
            #[inline]
            fn $assign(&mut self, other: Self) {
                $primitive(&mut self.words, &other.words);
            }
        }

        impl<const BITS: usize, const SIZE: usize, W: Word> $op_trait<&Bits<BITS, SIZE, W>> for Bits<BITS, SIZE, W> {
            type Output = Self;

            #[inline]
            fn $op(mut self, other: &Bits<BITS, SIZE, W>) -> Self {
                $primitive(&mut self.words, &other.words);
                self
            }
        }

        impl<const BITS: usize, const SIZE: usize, W: Word> $op_trait for Bits<BITS, SIZE, W> {
            type Output = Self;

            #[inline]
            fn $op(mut self, other: Self) -> Self {
                $primitive(&mut self.words, &other.words);
                self
            }
        }
    };
}

logic_ops!(BitAnd, bitand, BitAndAssign, bitand_assign, wide::bit_and);
logic_ops!(BitOr, bitor, BitOrAssign, bitor_assign, wide::bit_or);
logic_ops!(BitXor, bitxor, BitXorAssign, bitxor_assign, wide::bit_xor);

impl<const BITS: usize, const SIZE: usize, W: Word> Not for Bits<BITS, SIZE, W> {
    type Output = Self;

    #[inline]
    fn not(mut self) -> Self {
        self.invert();
        self
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> ShlAssign<usize> for Bits<BITS, SIZE, W> {
    #[inline]
    fn shl_assign(&mut self, shift: usize) {
        wide::left_shift(&mut self.words, shift);
        self.fix_back();
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> ShrAssign<usize> for Bits<BITS, SIZE, W> {
    #[inline]
    fn shr_assign(&mut self, shift: usize) {
        wide::right_shift(&mut self.words, shift);
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> Shl<usize> for Bits<BITS, SIZE, W> {
    type Output = Self;

    #[inline]
    fn shl(mut self, shift: usize) -> Self {
        self <<= shift;
        self
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> Shr<usize> for Bits<BITS, SIZE, W> {
    type Output = Self;

    #[inline]
    fn shr(mut self, shift: usize) -> Self {
        self >>= shift;
        self
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> Bitwise for Bits<BITS, SIZE, W> {
    #[inline]
    fn bit_len(&self) -> usize {
        BITS
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        assert!(index < BITS, "index {index} out of range for {BITS} bits");
        BitwiseForSlice::<W>::bit(self.words.as_slice(), index)
    }

    #[inline]
    fn weight(&self) -> usize {
        self.count_ones()
    }

    #[inline]
    fn lowest_set_bit(&self) -> Option<usize> {
        BitwiseForSlice::<W>::lowest_set_bit(self.words.as_slice())
    }

    #[inline]
    fn highest_set_bit(&self) -> Option<usize> {
        BitwiseForSlice::<W>::highest_set_bit(self.words.as_slice())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        !self.any()
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> BitwiseMut for Bits<BITS, SIZE, W> {
    #[inline]
    fn set_bit(&mut self, index: usize, to: bool) {
        assert!(index < BITS, "index {index} out of range for {BITS} bits");
        BitwiseForSlice::<W>::set_bit(self.words.as_mut_slice(), index, to);
    }

    #[inline]
    fn flip_bit(&mut self, index: usize) {
        assert!(index < BITS, "index {index} out of range for {BITS} bits");
        BitwiseForSlice::<W>::flip_bit(self.words.as_mut_slice(), index);
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.clear();
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> Distribution<Bits<BITS, SIZE, W>> for Standard
where
    Standard: Distribution<W>,
{
    fn sample<R: Rng + ?Sized>(&self, random_number_generator: &mut R) -> Bits<BITS, SIZE, W> {
        let mut words = [W::ZERO; SIZE];
        for word in &mut words {
            *word = <Standard as Distribution<W>>::sample(self, random_number_generator);
        }
        Bits::from_words(words)
    }
}

/// Parses binary digits, most significant first. Accepts an optional `0b`
/// prefix and `_` separators; leading zeros beyond the width are allowed.
impl<const BITS: usize, const SIZE: usize, W: Word> FromStr for Bits<BITS, SIZE, W> {
    type Err = BitsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let digits = text.strip_prefix("0b").unwrap_or(text);
        let mut result = Self::zero();
        let mut position = 0usize;
        for character in digits.chars().rev() {
            match character {
                '_' => continue,
                '0' => {}
                '1' if position < BITS => result.set_bit(position, true),
                '1' => return Err(BitsError::ValueTooLarge { bits: BITS }),
                other => return Err(BitsError::InvalidDigit(other)),
            }
            position += 1;
        }
        if position == 0 {
            return Err(BitsError::EmptyValue);
        }
        Ok(result)
    }
}

/// Emits exactly `BITS` digits, leading zeros included, then applies the
/// formatter's width, fill, alignment and `0` flag on top.
impl<const BITS: usize, const SIZE: usize, W: Word> fmt::Binary for Bits<BITS, SIZE, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = (0..BITS)
            .rev()
            .map(|index| if self.bit(index) { '1' } else { '0' })
            .collect();
        formatter.pad_integral(true, "0b", &digits)
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> Bits<BITS, SIZE, W> {
    fn nibble(&self, nibble_index: usize) -> u32 {
        (0..4)
            .map(|offset| nibble_index * 4 + offset)
            .filter(|&index| index < BITS && self.bit(index))
            .fold(0, |nibble, index| nibble | (1 << (index % 4)))
    }

    fn fmt_hex(&self, formatter: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        let digits: String = (0..BITS.div_ceil(4))
            .rev()
            .filter_map(|nibble_index| char::from_digit(self.nibble(nibble_index), 16))
            .map(|digit| if upper { digit.to_ascii_uppercase() } else { digit })
            .collect();
        formatter.pad_integral(true, "0x", &digits)
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> fmt::LowerHex for Bits<BITS, SIZE, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(formatter, false)
    }
}

impl<const BITS: usize, const SIZE: usize, W: Word> fmt::UpperHex for Bits<BITS, SIZE, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(formatter, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spill_is_masked_on_construction() {
        let bits = <crate::bits!(12, u8)>::from_words([0xFF, 0xFF]);
        assert_eq!(bits.as_words(), &[0xFF, 0x0F]);
        assert_eq!(<crate::bits!(12, u8)>::SPILL, 4);
        assert_eq!(<crate::bits!(16, u8)>::SPILL, 0);
    }

    #[test]
    fn complement_of_full_value_is_zero() {
        let mut bits = <crate::bits!(12, u8)>::from_words([0xFF, 0x0F]);
        bits.invert();
        assert_eq!(bits.as_words(), &[0, 0]);
        assert!(!bits.any());

        let bits = <crate::bits!(12, u16)>::from_word(0xFFF);
        assert_eq!((!bits).into_words(), [0]);
    }

    #[test]
    fn full_top_word_is_not_masked() {
        let bits = <crate::bits!(128)>::ones();
        assert_eq!(bits.into_words(), [u64::MAX; 2]);
        assert_eq!(bits.count_ones(), 128);
    }

    #[test]
    fn assign_word_truncates() {
        let mut bits = <crate::bits!(70)>::from_words([1, 2]);
        bits.assign_word(u64::MAX);
        assert_eq!(bits.into_words(), [u64::MAX, 0]);

        let mut bits = <crate::bits!(5, u8)>::zero();
        bits.assign_word(0xFF);
        assert_eq!(bits.into_words(), [0x1F]);
    }

    #[test]
    fn data_mut_restores_mask() {
        let mut bits = <crate::bits!(3, u32)>::zero();
        let previous = bits.data_mut(|words| std::mem::replace(&mut words[0], u32::MAX));
        assert_eq!(previous, 0);
        assert_eq!(bits.into_words(), [0b111]);
    }

    #[test]
    fn formatting_honours_width_and_fill() {
        let ones = <crate::bits!(5)>::ones();
        assert_eq!(format!("[{ones:>10b}] [{ones:08x}]"), "[     11111] [0000001f]");
        assert_eq!(format!("{ones:#010b}"), "0b00011111");
        assert_eq!(format!("{ones:*<4X}"), "1F**");
        assert_eq!(format!("{:3b}", <crate::bits!(5)>::zero()), "00000");
    }
}
