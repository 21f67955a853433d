//! Primitives over word arrays, treated as one unsigned integer stored least
//! significant word first.

pub mod logic;
pub mod shift;

pub use logic::{bit_and, bit_clear, bit_not, bit_or, bit_xor, pop_count};
pub use shift::{left_shift, right_shift};

use crate::Word;
use std::borrow::{Borrow, BorrowMut};

/// Number of `word_bits`-wide words needed to hold `bits` bits.
#[must_use]
pub const fn word_count(bits: usize, word_bits: usize) -> usize {
    bits.div_ceil(word_bits)
}

// Common helper for calculating word and bit indices
#[inline]
#[must_use]
pub fn block_and_bit_index<W: Word>(index: usize) -> (usize, usize) {
    (index / W::BITS, index % W::BITS)
}

/// Per-bit access to a word array, forwarded to by [`crate::Bitwise`] and [`crate::BitwiseMut`].
pub trait BitwiseForSlice<W>
where
    Self: BorrowMut<[W]>,
    W: Word,
{
    #[inline]
    fn bit_len(&self) -> usize {
        self.borrow().len() * W::BITS
    }
    #[inline]
    fn bit(&self, index: usize) -> bool {
        let (word_index, bit_index) = block_and_bit_index::<W>(index);
        self.borrow()[word_index].bit(bit_index)
    }
    #[inline]
    fn weight(&self) -> usize {
        pop_count(self.borrow())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.borrow().iter().all(|word| *word == W::ZERO)
    }
    #[inline]
    fn highest_set_bit(&self) -> Option<usize> {
        for (word_index, word) in self.borrow().iter().enumerate().rev() {
            if let Some(bit_index) = word.highest_set_bit() {
                return Some(word_index * W::BITS + bit_index);
            }
        }
        None
    }
    #[inline]
    fn lowest_set_bit(&self) -> Option<usize> {
        for (word_index, word) in self.borrow().iter().enumerate() {
            if let Some(bit_index) = word.lowest_set_bit() {
                return Some(word_index * W::BITS + bit_index);
            }
        }
        None
    }

    #[inline]
    fn set_bit(&mut self, index: usize, to: bool) {
        let (word_index, bit_index) = block_and_bit_index::<W>(index);
        self.borrow_mut()[word_index].set_bit(bit_index, to);
    }
    #[inline]
    fn flip_bit(&mut self, index: usize) {
        let (word_index, bit_index) = block_and_bit_index::<W>(index);
        self.borrow_mut()[word_index].flip_bit(bit_index);
    }
    #[inline]
    fn clear_bits(&mut self) {
        bit_clear(self.borrow_mut());
    }
}

impl<Bits, W> BitwiseForSlice<W> for Bits
where
    Bits: ?Sized + BorrowMut<[W]>,
    W: Word,
{
}

delegate_bitwise!(impl[W: Word] [W] => BitwiseForSlice<W>);
delegate_bitwise!(impl[W: Word] Vec<W> => BitwiseForSlice<W>);
