use bbse::{decode, decode_checked, decode_from, encode, encode_from, max_path_len};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip_holds_for_any_valid_target(
        start in -1_000_000i64..1_000_000,
        size in 1i64..5_000,
        offset in 0i64..5_000,
    ) {
        let end = start + size;
        let target = start + offset % size;

        let path = encode(start, end, target).expect("arguments are valid");
        prop_assert_eq!(decode(start, end, &path), target);

        let bound = max_path_len(start, end) as usize;
        prop_assert!(path.len() <= bound, "{} bits exceeds bound {}", path.len(), bound);
        prop_assert!(path.len() <= 64);
    }

    #[test]
    fn checked_decode_accepts_everything_the_encoder_emits(
        size in 1i64..3_000,
        offset in 0i64..3_000,
    ) {
        let target = offset % size;
        let path = encode(0, size, target).expect("arguments are valid");
        prop_assert_eq!(decode_checked(0, size, &path), Ok(target));
    }

    #[test]
    fn biased_first_split_roundtrips(
        size in 2i64..2_000,
        target_offset in 0i64..2_000,
        midpoint_offset in 0i64..2_000,
    ) {
        let target = target_offset % size;
        let midpoint = 1 + midpoint_offset % (size - 1);

        let path = encode_from(0, size, target, midpoint).expect("arguments are valid");
        prop_assert_eq!(decode_from(0, size, &path, midpoint), target);
    }

    #[test]
    fn wide_i64_ranges_do_not_overflow(
        offset in 0i64..1_000,
    ) {
        // Bounds near the extremes of i64 exercise the overflow-safe
        // midpoint; a naive (lo + hi) / 2 would wrap here.
        let start = i64::MAX - 4_096;
        let end = i64::MAX;
        let target = start + offset % 4_096;

        let path = encode(start, end, target).expect("arguments are valid");
        prop_assert_eq!(decode(start, end, &path), target);
    }
}
