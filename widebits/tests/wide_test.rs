use proptest::prelude::*;
use widebits::wide::{bit_and, bit_not, bit_or, bit_xor, left_shift, pop_count, right_shift};

const TOTAL_BITS: usize = 128;

fn to_u64_words(value: u128) -> [u64; 2] {
    [value as u64, (value >> 64) as u64]
}

fn to_u32_words(value: u128) -> [u32; 4] {
    [
        value as u32,
        (value >> 32) as u32,
        (value >> 64) as u32,
        (value >> 96) as u32,
    ]
}

fn shifted_left(value: u128, shift: usize) -> u128 {
    if shift >= TOTAL_BITS { 0 } else { value << shift }
}

fn shifted_right(value: u128, shift: usize) -> u128 {
    if shift >= TOTAL_BITS { 0 } else { value >> shift }
}

proptest! {
    #[test]
    fn left_shift_matches_u128(value in any::<u128>(), shift in 0..200usize) {
        let expected = shifted_left(value, shift);

        let mut words = to_u64_words(value);
        left_shift(&mut words, shift);
        prop_assert_eq!(words, to_u64_words(expected));

        let mut words = to_u32_words(value);
        left_shift(&mut words, shift);
        prop_assert_eq!(words, to_u32_words(expected));

        let mut bytes = value.to_le_bytes();
        left_shift(&mut bytes, shift);
        prop_assert_eq!(bytes, expected.to_le_bytes());
    }

    #[test]
    fn right_shift_matches_u128(value in any::<u128>(), shift in 0..200usize) {
        let expected = shifted_right(value, shift);

        let mut words = to_u64_words(value);
        right_shift(&mut words, shift);
        prop_assert_eq!(words, to_u64_words(expected));

        let mut words = to_u32_words(value);
        right_shift(&mut words, shift);
        prop_assert_eq!(words, to_u32_words(expected));

        let mut bytes = value.to_le_bytes();
        right_shift(&mut bytes, shift);
        prop_assert_eq!(bytes, expected.to_le_bytes());
    }

    #[test]
    fn shift_round_trip_clears_top_bits(words in any::<[u64; 3]>(), shift in 0..192usize) {
        let mut shifted = words;
        left_shift(&mut shifted, shift);
        right_shift(&mut shifted, shift);

        let mut expected = words;
        for index in (192 - shift)..192 {
            expected[index / 64] &= !(1u64 << (index % 64));
        }
        prop_assert_eq!(shifted, expected);
    }

    #[test]
    fn oversized_shifts_clear(words in any::<[u16; 5]>(), extra in 0..1000usize) {
        let mut left = words;
        left_shift(&mut left, 80 + extra);
        prop_assert_eq!(left, [0; 5]);

        let mut right = words;
        right_shift(&mut right, 80 + extra);
        prop_assert_eq!(right, [0; 5]);
    }

    #[test]
    fn logic_matches_u128(left in any::<u128>(), right in any::<u128>()) {
        let mut and = to_u64_words(left);
        bit_and(&mut and, &to_u64_words(right));
        prop_assert_eq!(and, to_u64_words(left & right));

        let mut or = to_u64_words(left);
        bit_or(&mut or, &to_u64_words(right));
        prop_assert_eq!(or, to_u64_words(left | right));

        let mut xor = to_u64_words(left);
        bit_xor(&mut xor, &to_u64_words(right));
        prop_assert_eq!(xor, to_u64_words(left ^ right));

        let mut not = to_u64_words(left);
        bit_not(&mut not);
        prop_assert_eq!(not, to_u64_words(!left));

        prop_assert_eq!(pop_count(&to_u32_words(left)), left.count_ones() as usize);
    }

    #[test]
    fn pop_count_is_additive(
        front in prop::collection::vec(any::<u32>(), 0..8),
        back in prop::collection::vec(any::<u32>(), 0..8),
    ) {
        let concatenated: Vec<u32> = front.iter().chain(back.iter()).copied().collect();
        prop_assert_eq!(pop_count(&concatenated), pop_count(&front) + pop_count(&back));
    }
}

#[test]
fn shift_by_nine_over_bytes() {
    let mut words = [0b0000_0001u8, 0b0000_0000];
    left_shift(&mut words, 9);
    assert_eq!(words, [0b0000_0000, 0b0000_0010]);
}

#[test]
fn shift_by_word_multiples() {
    for shift in [0, 64, 128, 192] {
        let mut words = [u64::MAX; 4];
        left_shift(&mut words, shift);
        assert_eq!(pop_count(&words), 256 - shift, "{shift}");
        assert!(words[..shift / 64].iter().all(|word| *word == 0));
    }
}
