use rivet_io::codec::io_bounds::from_bounds_str;
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn common_bounds_is_commutative(
        a in proptest_helpers::arb_bounds(),
        b in proptest_helpers::arb_bounds(),
    ) {
        prop_assert_eq!(a.common_bounds(&b), b.common_bounds(&a));
    }

    #[test]
    fn common_bounds_is_associative(
        a in proptest_helpers::arb_bounds(),
        b in proptest_helpers::arb_bounds(),
        c in proptest_helpers::arb_bounds(),
    ) {
        prop_assert_eq!(
            a.common_bounds(&b).common_bounds(&c),
            a.common_bounds(&b.common_bounds(&c))
        );
    }

    #[test]
    fn common_bounds_encloses_both_inputs(
        a in proptest_helpers::arb_bounds(),
        b in proptest_helpers::arb_bounds(),
    ) {
        let c = a.common_bounds(&b);
        for r in [a, b] {
            prop_assert!(c.lower_left.0 <= r.lower_left.0 && c.lower_left.1 <= r.lower_left.1);
            prop_assert!(c.upper_right.0 >= r.upper_right.0 && c.upper_right.1 >= r.upper_right.1);
        }
    }

    #[test]
    fn bounds_text_reads_back_exactly(b in proptest_helpers::arb_bounds()) {
        let text = format!(
            "low: {:?},{:?}\nhigh: {:?},{:?}\n",
            b.lower_left.0, b.lower_left.1, b.upper_right.0, b.upper_right.1
        );
        prop_assert_eq!(from_bounds_str(&text).expect("parse bounds"), b);
    }
}
