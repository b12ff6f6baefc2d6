use fibsol_core::is_fibonacci;
use proptest::prelude::*;

macro_rules! fib_case {
    ($name:ident, $value:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(is_fibonacci($value), $expected);
        }
    };
}

fib_case!(fib_zero_is_not_matched, 0, false);
fib_case!(fib_one, 1, true);
fib_case!(fib_two, 2, true);
fib_case!(fib_three, 3, true);
fib_case!(fib_four, 4, false);
fib_case!(fib_five, 5, true);
fib_case!(fib_six, 6, false);
fib_case!(fib_seven, 7, false);
fib_case!(fib_eight, 8, true);
fib_case!(fib_twelve, 12, false);
fib_case!(fib_thirteen, 13, true);
fib_case!(fib_twenty_one, 21, true);
fib_case!(fib_thirty_four, 34, true);
fib_case!(fib_fifty_five, 55, true);
fib_case!(fib_fifty_six, 56, false);
fib_case!(fib_eighty_nine, 89, true);
fib_case!(fib_one_forty_four, 144, true);
fib_case!(fib_two_thirty_three, 233, true);
fib_case!(fib_full_deck_total, 340, false);
fib_case!(fib_three_seventy_seven, 377, true);

fn terms_up_to(limit: u32) -> Vec<u32> {
    let mut terms = vec![1u32, 2];
    let (mut a, mut b) = (1u32, 2u32);
    while a + b <= limit {
        terms.push(a + b);
        (a, b) = (b, a + b);
    }
    terms
}

proptest! {
    #[test]
    fn matches_generated_terms(n in 0u32..100_000) {
        prop_assert_eq!(is_fibonacci(n), terms_up_to(100_000).contains(&n));
    }
}
