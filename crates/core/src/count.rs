//! Overflow-checked combinatorial counters.
//!
//! Both counters keep their running value inside the signed 64-bit range, so a
//! result is only returned when it fits an `i64` as well. `None` means the
//! count is too large to precompute and the caller should rely on direct
//! enumeration instead.

/// Largest value a counter may reach.
pub const COUNT_LIMIT: u64 = i64::MAX as u64;

/// Multiplies `value` by `factor` unless the product could leave the counter range.
#[inline]
fn guarded_mul(value: u64, factor: u64) -> Option<u64> {
    if COUNT_LIMIT / factor <= value {
        return None;
    }
    Some(value * factor)
}

/// Returns the product of `factors`, or `None` on overflow.
///
/// The guard runs before each multiply. A zero factor short-circuits to zero.
pub fn checked_product<I>(factors: I) -> Option<u64>
where
    I: IntoIterator<Item = usize>,
{
    let mut n: u64 = 1;
    for factor in factors {
        if factor == 0 {
            return Some(0);
        }
        n = guarded_mul(n, factor as u64)?;
    }
    Some(n)
}

/// Computes the multinomial coefficient `n! / (c1! * c2! * ...)`.
///
/// The factorial is built one factor at a time and the divisors of each
/// `ci!` are divided out as soon as the running value allows, which keeps it
/// small enough to count e.g. 24 instances of 12 pairwise-identical types.
/// Divisions still outstanding after the main pass are applied at the end.
///
/// `multiplicities` must sum to `n`; zero entries are ignored.
pub fn multinomial(n: usize, multiplicities: &[usize]) -> Option<u64> {
    debug_assert!(multiplicities.iter().sum::<usize>() <= n);

    let max_count = multiplicities.iter().copied().max().unwrap_or(0);

    // pending[k]: number of divisions by (k + 1) not yet applied
    let mut pending = vec![0usize; max_count.max(1)];
    for &count in multiplicities {
        for slot in pending.iter_mut().take(count).skip(1) {
            *slot += 1;
        }
    }

    let mut value: u64 = 1;
    for i in 0..n as u64 {
        value = guarded_mul(value, i + 1)?;

        for (k, outstanding) in pending.iter_mut().enumerate().skip(1) {
            let divisor = (k + 1) as u64;
            while *outstanding > 0 && value % divisor == 0 {
                value /= divisor;
                *outstanding -= 1;
            }
        }
    }

    for (k, outstanding) in pending.iter_mut().enumerate().skip(1) {
        let divisor = (k + 1) as u64;
        while *outstanding > 0 {
            value /= divisor;
            *outstanding -= 1;
        }
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_multinomial(multiplicities: &[usize]) -> Option<u64> {
        let n: usize = multiplicities.iter().sum();
        let mut value: u128 = 1;
        for i in 1..=n as u128 {
            value *= i;
        }
        for &c in multiplicities {
            for i in 1..=c as u128 {
                value /= i;
            }
        }
        u64::try_from(value).ok().filter(|v| *v <= COUNT_LIMIT)
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(checked_product(Vec::new()), Some(1));
        assert_eq!(checked_product(vec![6, 3, 1, 2]), Some(36));
        assert_eq!(checked_product(vec![6, 0, 2]), Some(0));
    }

    #[test]
    fn test_checked_product_overflow() {
        // 6^25 > i64::MAX
        assert_eq!(checked_product(std::iter::repeat(6).take(25)), None);
        assert_eq!(
            checked_product(std::iter::repeat(6).take(24)),
            Some(6u64.pow(24))
        );
    }

    #[test]
    fn test_multinomial_small() {
        assert_eq!(multinomial(0, &[]), Some(1));
        assert_eq!(multinomial(1, &[1]), Some(1));
        assert_eq!(multinomial(5, &[1, 1, 1, 1, 1]), Some(120));
        assert_eq!(multinomial(6, &[2, 4]), Some(15));
        assert_eq!(multinomial(4, &[2, 2]), Some(6));
        assert_eq!(multinomial(3, &[3]), Some(1));
    }

    #[test]
    fn test_multinomial_ignores_zero_multiplicities() {
        assert_eq!(multinomial(3, &[0, 2, 0, 1]), Some(3));
    }

    #[test]
    fn test_multinomial_factorial_limit() {
        // 20! fits in i64, 21! does not
        assert_eq!(multinomial(20, &[1; 20]), Some(2_432_902_008_176_640_000));
        assert_eq!(multinomial(21, &[1; 21]), None);
    }

    #[test]
    fn test_multinomial_interleaving_extends_range() {
        // 22! / 2^11 fits even though 22! alone does not
        let expected = reference_multinomial(&[2; 11]);
        assert!(expected.is_some());
        assert_eq!(multinomial(22, &[2; 11]), expected);
    }

    #[test]
    fn test_multinomial_overflow() {
        assert_eq!(multinomial(25, &[1; 25]), None);
        assert_eq!(multinomial(50, &[2; 25]), None);
    }

    proptest! {
        #[test]
        fn multinomial_matches_reference(
            multiplicities in proptest::collection::vec(1usize..5, 1..7)
        ) {
            let n: usize = multiplicities.iter().sum();
            let reference = reference_multinomial(&multiplicities);
            prop_assert!(reference.is_some());
            prop_assert_eq!(multinomial(n, &multiplicities), reference);
        }
    }
}
