//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn integer_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a.clone() + (b.clone() + c.clone())
            );
        }

        #[test]
        fn integer_mul_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a.clone() * (b.clone() * c.clone())
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_add_identity(a in small_int()) {
            let a = Integer::new(a);
            let zero = Integer::new(0);
            prop_assert_eq!(a.clone() + zero.clone(), a.clone());
            prop_assert_eq!(zero + a.clone(), a);
        }

        #[test]
        fn integer_mul_identity(a in small_int()) {
            let a = Integer::new(a);
            let one = Integer::new(1);
            prop_assert_eq!(a.clone() * one.clone(), a.clone());
            prop_assert_eq!(one * a.clone(), a);
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            let zero = Integer::new(0);
            prop_assert_eq!(a + neg_a, zero);
        }

        // Floor division laws

        #[test]
        fn floor_division_identity(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_floor(&b);
            let r = a.rem_floor(&b);
            prop_assert_eq!(b * q + r, a);
        }

        #[test]
        fn floor_remainder_is_zero_or_signed_like_divisor(
            a in small_int(),
            b in non_zero_int()
        ) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let r = a.rem_floor(&b);
            prop_assert!(r.is_zero() || r.is_negative() == b.is_negative());
        }

        #[test]
        fn floor_quotient_brackets_dividend(a in small_int(), b in 1i64..1000i64) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_floor(&b);
            // For positive b: b*q <= a < b*(q + 1)
            prop_assert!(b.clone() * q.clone() <= a);
            prop_assert!(a < b * (q + Integer::new(1)));
        }

        #[test]
        fn exact_division_matches_truncation(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let product = a.clone() * b.clone();
            prop_assert_eq!(product.clone().div_floor(&b), a.clone());
            prop_assert_eq!(product / b, a);
        }

        #[test]
        fn floor_quotient_never_exceeds_truncated(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert!(a.div_floor(&b) <= a.clone() / b);
        }
    }
}
