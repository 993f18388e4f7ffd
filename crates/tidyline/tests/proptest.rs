//! Property-based tests for pattern round-trips and the width ratchet.

use proptest::prelude::*;
use tidyline::{compose, decompose, LineWriter, Values};

fn tag_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('d'), Just('f')]
}

proptest! {
    /// Composing then decomposing yields the same triple back.
    #[test]
    fn compose_decompose_round_trip(
        tag in tag_strategy(),
        width in proptest::option::of(0usize..1000),
        precision in proptest::option::of(0usize..40),
    ) {
        // precision is only legal on floats
        let precision = if tag == 'f' { precision } else { None };

        let pattern = compose(Some(tag), width, precision);
        // decompose works on the text between the braces
        let inner = &pattern[1..pattern.len() - 1];
        let (t, w, p) = decompose(inner);

        prop_assert_eq!(t, Some(tag));
        prop_assert_eq!(w, width);
        prop_assert_eq!(p, precision);
    }

    /// The rendered width of a field never decreases across a sequence of
    /// calls, and always equals the widest value seen so far.
    #[test]
    fn rendered_width_is_monotone(values in prop::collection::vec(any::<i64>(), 1..40)) {
        let mut writer = LineWriter::with_fields([("n", "{:d}")]).unwrap();

        let mut last_width = 0;
        let mut widest_value = 0;
        for v in values {
            widest_value = widest_value.max(v.to_string().chars().count());

            let line = writer.format(&Values::new().set("n", v)).unwrap();
            let width = line.chars().count();

            prop_assert!(width >= last_width);
            prop_assert_eq!(width, widest_value);
            last_width = width;
        }
        prop_assert_eq!(writer.field("n").unwrap().width(), last_width);
    }

    /// A declared minimum width acts as a floor under the ratchet.
    #[test]
    fn declared_width_is_a_floor(v in any::<i64>(), declared in 0usize..30) {
        let message = format!("{{:{declared}d}}");
        let mut writer = LineWriter::with_fields([("n", message.as_str())]).unwrap();

        let line = writer.format(&Values::new().set("n", v)).unwrap();
        prop_assert!(line.chars().count() >= declared);
        prop_assert!(writer.field("n").unwrap().width() >= declared);
    }
}
