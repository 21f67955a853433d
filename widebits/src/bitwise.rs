//! Per-bit access to values laid out least significant bit first: single
//! words, word arrays and [`crate::Bits`].
//!
//! Bit `i` of a word array lives in word `i / W::BITS` at position
//! `i % W::BITS`.

pub trait Bitwise {
    /// Number of addressable bits.
    fn bit_len(&self) -> usize;
    fn bit(&self, index: usize) -> bool;
    /// Number of set bits.
    fn weight(&self) -> usize;
    fn lowest_set_bit(&self) -> Option<usize>;
    fn highest_set_bit(&self) -> Option<usize>;
    #[inline]
    fn is_zero(&self) -> bool {
        self.weight() == 0
    }
}

pub trait BitwiseMut: Bitwise {
    fn set_bit(&mut self, index: usize, to: bool);
    fn flip_bit(&mut self, index: usize);
    fn clear_bits(&mut self);
}

/// Implements [`Bitwise`] and [`BitwiseMut`] for a type by forwarding every
/// method to a helper trait with the same method names.
///
/// `delegate_bitwise!(u8 => BitwiseForWord)` or, with generics,
/// `delegate_bitwise!(impl[W: Word] [W] => BitwiseForSlice<W>)`.
macro_rules! delegate_bitwise {
    (impl[$($generics:tt)*] $type:ty => $delegate:path) => {
        impl<$($generics)*> $crate::Bitwise for $type {
            #[inline]
            fn bit_len(&self) -> usize {
                <Self as $delegate>::bit_len(self)
            }
            #[inline]
            fn bit(&self, index: usize) -> bool {
                <Self as $delegate>::bit(self, index)
            }
            #[inline]
            fn weight(&self) -> usize {
                <Self as $delegate>::weight(self)
            }
            #[inline]
            fn lowest_set_bit(&self) -> Option<usize> {
                <Self as $delegate>::lowest_set_bit(self)
            }
            #[inline]
            fn highest_set_bit(&self) -> Option<usize> {
                <Self as $delegate>::highest_set_bit(self)
            }
            #[inline]
            fn is_zero(&self) -> bool {
                <Self as $delegate>::is_zero(self)
            }
        }

        impl<$($generics)*> $crate::BitwiseMut for $type {
            #[inline]
            fn set_bit(&mut self, index: usize, to: bool) {
                <Self as $delegate>::set_bit(self, index, to)
            }
            #[inline]
            fn flip_bit(&mut self, index: usize) {
                <Self as $delegate>::flip_bit(self, index)
            }
            #[inline]
            fn clear_bits(&mut self) {
                <Self as $delegate>::clear_bits(self)
            }
        }
    };
    ($type:ty => $delegate:path) => {
        delegate_bitwise!(impl[] $type => $delegate);
    };
}
