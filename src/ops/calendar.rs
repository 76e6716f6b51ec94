//! Calendar checks.

use std::fmt;

use super::error::{OpError, OpResult};

/// Leap-year verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeapYear {
    Yes,
    No,
}

impl LeapYear {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Leap Year",
            Self::No => "Not a Leap Year",
        }
    }
}

impl fmt::Display for LeapYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gregorian rule: divisible by 4 and not by 100, or divisible by 400.
/// Years are non-negative.
pub fn leap_year(year: i64) -> OpResult<LeapYear> {
    if year < 0 {
        return Err(OpError::Negative(year));
    }
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    Ok(if leap { LeapYear::Yes } else { LeapYear::No })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn century_years_need_divisibility_by_400() {
        assert_eq!(leap_year(2000), Ok(LeapYear::Yes));
        assert_eq!(leap_year(1900), Ok(LeapYear::No));
        assert_eq!(leap_year(2024), Ok(LeapYear::Yes));
        assert_eq!(leap_year(2023), Ok(LeapYear::No));
        assert_eq!(leap_year(0), Ok(LeapYear::Yes));
        assert_eq!(leap_year(-4), Err(OpError::Negative(-4)));
    }
}
