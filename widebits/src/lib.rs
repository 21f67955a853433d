//! Fixed-width bit vectors over arrays of machine words.
//!
//! [`wide`] holds the word-array primitives (logic, population count and
//! shifts that carry bits across word boundaries); [`Bits`] wraps a fixed
//! number of words as an unsigned integer of any declared width.

#[macro_use]
pub mod bitwise;
pub use bitwise::{Bitwise, BitwiseMut};

pub mod word;
pub use word::{UnsignedInt, Word};

pub mod wide;

pub mod bits;
pub use bits::Bits;

pub mod error;
pub use error::BitsError;

pub type Bits64 = crate::bits!(64);
pub type Bits128 = crate::bits!(128);
pub type Bits256 = crate::bits!(256);
