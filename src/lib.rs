pub mod unary;

pub trait PrimeCheck {
    fn is_prime(&self) -> bool;
}

impl PrimeCheck for u64 {
    fn is_prime(&self) -> bool {
        let n = *self;

        if n < 2 {
            return false;
        }

        if n < 4 {
            return true;
        }

        if n % 2 == 0 || n % 3 == 0 {
            return false;
        }

        // Remaining candidates are of the form 6k ± 1, checked up to
        // the integer square root without overflowing.
        let mut d = 5;
        while d <= n / d {
            if n % d == 0 || n % (d + 2) == 0 {
                return false;
            }
            d += 6;
        }

        true
    }
}

impl PrimeCheck for i64 {
    /// Negative numbers have no divisor structure and no unary
    /// representation; they are never prime.
    fn is_prime(&self) -> bool {
        u64::try_from(*self).is_ok_and(|n| n.is_prime())
    }
}
