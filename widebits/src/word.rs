use crate::{Bitwise, BitwiseMut};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign};

pub trait Counts {
    fn count_ones(&self) -> usize;
    fn leading_zeros(&self) -> usize;
    fn trailing_zeros(&self) -> usize;
}

pub trait Rotate: Copy {
    /// `n` must be strictly less than the bit width of `Self`.
    #[must_use]
    fn rotate_left(self, n: u32) -> Self;
    /// `n` must be strictly less than the bit width of `Self`.
    #[must_use]
    fn rotate_right(self, n: u32) -> Self;
}

/// Arithmetic surface of a machine word as used by the word-array primitives.
///
/// Shifts by `usize` are only ever issued with amounts below [`UnsignedInt::BITS`].
pub trait UnsignedInt
where
    Self: From<bool>
        + Counts
        + Rotate
        + Copy
        + Default
        + Debug
        + Eq
        + Hash
        + Send
        + Sync
        + 'static
        + Not<Output = Self>
        + BitAnd<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + BitAndAssign
        + BitOrAssign
        + BitXorAssign
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>
        + ShlAssign<usize>
        + ShrAssign<usize>,
{
    const BITS: usize;
    const ZERO: Self;
    const ONES: Self;
}

/// A word that can back a word array: arithmetic plus per-bit access.
pub trait Word: UnsignedInt + Bitwise + BitwiseMut {}

impl<T> Word for T where T: UnsignedInt + Bitwise + BitwiseMut {}

#[inline]
fn one<W: UnsignedInt>() -> W {
    W::from(true)
}

/// Per-bit access to a single word, forwarded to by [`Bitwise`] and [`BitwiseMut`].
pub trait BitwiseForWord: UnsignedInt {
    #[inline]
    fn bit_len(&self) -> usize {
        Self::BITS
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        assert!(index < Self::BITS);
        (*self >> index) & one::<Self>() != Self::ZERO
    }

    #[inline]
    fn weight(&self) -> usize {
        self.count_ones()
    }

    #[inline]
    fn lowest_set_bit(&self) -> Option<usize> {
        if *self == Self::ZERO {
            return None;
        }
        Some(self.trailing_zeros())
    }

    #[inline]
    fn highest_set_bit(&self) -> Option<usize> {
        if *self == Self::ZERO {
            return None;
        }
        Some(Self::BITS - 1 - self.leading_zeros())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    fn set_bit(&mut self, index: usize, to: bool) {
        assert!(index < Self::BITS);
        let mask = one::<Self>() << index;
        if to {
            *self |= mask;
        } else {
            *self &= !mask;
        }
    }

    #[inline]
    fn flip_bit(&mut self, index: usize) {
        assert!(index < Self::BITS);
        *self ^= one::<Self>() << index;
    }

    #[inline]
    fn clear_bits(&mut self) {
        *self = Self::ZERO;
    }
}

impl<T: UnsignedInt> BitwiseForWord for T {}

macro_rules! implement_word {
    ($word_type:ty) => {
        impl Counts for $word_type {
            #[inline]
            fn count_ones(&self) -> usize {
                <$word_type>::count_ones(*self) as usize
            }
            #[inline]
            fn leading_zeros(&self) -> usize {
                <$word_type>::leading_zeros(*self) as usize
            }
            #[inline]
            fn trailing_zeros(&self) -> usize {
                <$word_type>::trailing_zeros(*self) as usize
            }
        }

        impl Rotate for $word_type {
            #[inline]
            fn rotate_left(self, n: u32) -> Self {
                <$word_type>::rotate_left(self, n)
            }
            #[inline]
            fn rotate_right(self, n: u32) -> Self {
                <$word_type>::rotate_right(self, n)
            }
        }

        impl UnsignedInt for $word_type {
            const BITS: usize = <$word_type>::BITS as usize;
            const ZERO: Self = 0;
            const ONES: Self = <$word_type>::MAX;
        }

        delegate_bitwise!($word_type => BitwiseForWord);
    };
}

implement_word!(u8);
implement_word!(u16);
implement_word!(u32);
implement_word!(u64);
implement_word!(u128);
