//! Accumulative series: natural sums, factorials, Fibonacci terms, and
//! times tables.

use super::error::{OpError, OpResult};

/// Closed-form sum of the naturals 1..=n. `n = 0` sums to 0.
pub fn sum_of_naturals(n: i64) -> OpResult<i64> {
    if n < 0 {
        return Err(OpError::Negative(n));
    }
    let wide = n as u128;
    i64::try_from(wide * (wide + 1) / 2).map_err(|_| OpError::Overflow)
}

/// `n!` with checked accumulation. `0!` is 1; anything past 34! does not
/// fit in u128 and is an overflow error.
pub fn factorial(n: i64) -> OpResult<u128> {
    if n < 0 {
        return Err(OpError::Negative(n));
    }
    let mut acc: u128 = 1;
    for k in 2..=n as u128 {
        acc = acc.checked_mul(k).ok_or(OpError::Overflow)?;
    }
    Ok(acc)
}

/// First `n` Fibonacci terms starting 0, 1, space-joined.
/// `n = 0` yields the empty string, `n = 1` yields `"0"`.
pub fn fibonacci(n: i64) -> OpResult<String> {
    if n < 0 {
        return Err(OpError::Negative(n));
    }
    let mut terms = Vec::new();
    let (mut a, mut b): (u128, u128) = (0, 1);
    for i in 0..n {
        terms.push(a.to_string());
        // the sum produced here is term i+2; only fail on it if that term
        // is actually owed
        let next = if i + 2 < n {
            a.checked_add(b).ok_or(OpError::Overflow)?
        } else {
            0
        };
        a = b;
        b = next;
    }
    Ok(terms.join(" "))
}

/// Ten-line times table for `n`, rows formatted `n x i = product` and
/// joined by newlines.
pub fn multiplication_table(n: i64) -> OpResult<String> {
    let mut lines = Vec::with_capacity(10);
    for i in 1..=10i64 {
        let product = n.checked_mul(i).ok_or(OpError::Overflow)?;
        lines.push(format!("{n} x {i} = {product}"));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_naturals_matches_iterative_reference() {
        for n in 0..=200i64 {
            let reference: i64 = (1..=n).sum();
            assert_eq!(sum_of_naturals(n), Ok(reference), "mismatch at n={n}");
        }
        assert_eq!(sum_of_naturals(0), Ok(0));
        assert_eq!(sum_of_naturals(-1), Err(OpError::Negative(-1)));
    }

    #[test]
    fn factorial_satisfies_recurrence() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        for n in 1..=30i64 {
            let prev = factorial(n - 1).unwrap();
            assert_eq!(factorial(n), Ok(prev * n as u128), "recurrence at n={n}");
        }
    }

    #[test]
    fn factorial_overflow_is_reported() {
        assert!(factorial(34).is_ok());
        assert_eq!(factorial(35), Err(OpError::Overflow));
        assert_eq!(factorial(-2), Err(OpError::Negative(-2)));
    }

    #[test]
    fn fibonacci_series_edges() {
        assert_eq!(fibonacci(0), Ok(String::new()));
        assert_eq!(fibonacci(1), Ok("0".to_string()));
        assert_eq!(fibonacci(2), Ok("0 1".to_string()));
        assert_eq!(fibonacci(5), Ok("0 1 1 2 3".to_string()));
        assert_eq!(fibonacci(10), Ok("0 1 1 2 3 5 8 13 21 34".to_string()));
        assert_eq!(fibonacci(-1), Err(OpError::Negative(-1)));
    }

    #[test]
    fn fibonacci_overflows_past_u128_terms() {
        // term index 186 is the last Fibonacci number that fits in u128,
        // so 187 terms print and 188 do not
        assert!(fibonacci(187).is_ok());
        assert_eq!(fibonacci(188), Err(OpError::Overflow));
        assert_eq!(fibonacci(200), Err(OpError::Overflow));
    }

    #[test]
    fn multiplication_table_formats_ten_rows() {
        let table = multiplication_table(5).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "5 x 1 = 5");
        assert_eq!(lines[9], "5 x 10 = 50");

        let negative = multiplication_table(-3).unwrap();
        assert!(negative.starts_with("-3 x 1 = -3"));
        assert_eq!(multiplication_table(i64::MAX), Err(OpError::Overflow));
    }
}
