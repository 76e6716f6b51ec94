//! The operation library: twenty pure scalar routines plus the registry
//! that names them for the menu, the `eval` command, and JSON output.
//!
//! Every routine is referentially transparent: no I/O, no logging, no
//! shared state. Range and domain validation happens inside each routine;
//! parsing untrusted text into typed scalars is the shell's job
//! (`crate::io::input`).

pub mod basic;
pub mod calendar;
pub mod chars;
pub mod digits;
pub mod divisors;
pub mod error;
pub mod series;

pub use basic::Operator;
pub use error::{OpError, OpResult};

use std::fmt;

/// A single typed input value, as collected by the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Num(f64),
    Letter(char),
    Operator(Operator),
}

/// What an operation prompts for, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSpec {
    /// An integer, prompted with this label.
    Integer(&'static str),
    /// Any number, prompted with this label.
    Number(&'static str),
    /// A single alphabetic character.
    Letter(&'static str),
    /// One of `+ - * /`.
    Operator(&'static str),
}

impl InputSpec {
    /// Prompt label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Integer(l) | Self::Number(l) | Self::Letter(l) | Self::Operator(l) => l,
        }
    }

    /// Short type name for the `list` catalog and parse errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Letter(_) => "letter",
            Self::Operator(_) => "operator",
        }
    }
}

/// Identifier for each of the twenty operations, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Parity,
    MaxOfTwo,
    LeapYear,
    SumOfNaturals,
    Factorial,
    MultiplicationTable,
    ReverseDigits,
    Palindrome,
    Prime,
    DigitCount,
    DigitSum,
    Armstrong,
    Fibonacci,
    VowelConsonant,
    Calculator,
    Gcd,
    Perfect,
    Divisors,
    Sign,
    Power,
}

impl OpKind {
    /// Menu order.
    pub const ALL: [OpKind; 20] = [
        Self::Parity,
        Self::MaxOfTwo,
        Self::LeapYear,
        Self::SumOfNaturals,
        Self::Factorial,
        Self::MultiplicationTable,
        Self::ReverseDigits,
        Self::Palindrome,
        Self::Prime,
        Self::DigitCount,
        Self::DigitSum,
        Self::Armstrong,
        Self::Fibonacci,
        Self::VowelConsonant,
        Self::Calculator,
        Self::Gcd,
        Self::Perfect,
        Self::Divisors,
        Self::Sign,
        Self::Power,
    ];

    /// Stable name used by `eval` and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Parity => "even-odd",
            Self::MaxOfTwo => "max",
            Self::LeapYear => "leap-year",
            Self::SumOfNaturals => "sum-naturals",
            Self::Factorial => "factorial",
            Self::MultiplicationTable => "times-table",
            Self::ReverseDigits => "reverse",
            Self::Palindrome => "palindrome",
            Self::Prime => "prime",
            Self::DigitCount => "digit-count",
            Self::DigitSum => "digit-sum",
            Self::Armstrong => "armstrong",
            Self::Fibonacci => "fibonacci",
            Self::VowelConsonant => "vowel",
            Self::Calculator => "calc",
            Self::Gcd => "gcd",
            Self::Perfect => "perfect",
            Self::Divisors => "divisors",
            Self::Sign => "sign",
            Self::Power => "power",
        }
    }

    /// Human label shown in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parity => "Even or odd",
            Self::MaxOfTwo => "Maximum of two numbers",
            Self::LeapYear => "Leap year check",
            Self::SumOfNaturals => "Sum of naturals 1..n",
            Self::Factorial => "Factorial",
            Self::MultiplicationTable => "Multiplication table",
            Self::ReverseDigits => "Reverse digits",
            Self::Palindrome => "Palindrome check",
            Self::Prime => "Prime check",
            Self::DigitCount => "Count digits",
            Self::DigitSum => "Sum digits",
            Self::Armstrong => "Armstrong number check",
            Self::Fibonacci => "Fibonacci series",
            Self::VowelConsonant => "Vowel or consonant",
            Self::Calculator => "Simple calculator",
            Self::Gcd => "Greatest common divisor",
            Self::Perfect => "Perfect number check",
            Self::Divisors => "List all divisors",
            Self::Sign => "Sign of a number",
            Self::Power => "Power",
        }
    }

    /// One-line description for the `list` catalog.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Parity => "Report whether an integer is even or odd",
            Self::MaxOfTwo => "Return the larger of two numbers",
            Self::LeapYear => "Apply the Gregorian leap-year rule to a year",
            Self::SumOfNaturals => "Sum the naturals from 1 through n",
            Self::Factorial => "Compute n! (0! is 1)",
            Self::MultiplicationTable => "Print the ten-row times table for a number",
            Self::ReverseDigits => "Reverse the decimal digits, keeping the sign",
            Self::Palindrome => "Check whether the digits read the same reversed",
            Self::Prime => "Trial-division primality check",
            Self::DigitCount => "Count decimal digits, sign excluded",
            Self::DigitSum => "Sum decimal digits, sign excluded",
            Self::Armstrong => "Check the narcissistic-number property",
            Self::Fibonacci => "Print the first n Fibonacci terms",
            Self::VowelConsonant => "Classify a letter as vowel or consonant",
            Self::Calculator => "Apply +, -, * or / to two numbers",
            Self::Gcd => "Euclidean greatest common divisor",
            Self::Perfect => "Compare a number against its proper-divisor sum",
            Self::Divisors => "List every divisor in ascending order",
            Self::Sign => "Classify a number as positive, negative, or zero",
            Self::Power => "Raise a number to an integer exponent",
        }
    }

    /// Inputs the operation consumes, in prompt order.
    pub fn inputs(&self) -> &'static [InputSpec] {
        match self {
            Self::Parity => &[InputSpec::Integer("number")],
            Self::MaxOfTwo => &[InputSpec::Number("first number"), InputSpec::Number("second number")],
            Self::LeapYear => &[InputSpec::Integer("year")],
            Self::SumOfNaturals => &[InputSpec::Integer("n")],
            Self::Factorial => &[InputSpec::Integer("n")],
            Self::MultiplicationTable => &[InputSpec::Integer("number")],
            Self::ReverseDigits => &[InputSpec::Integer("number")],
            Self::Palindrome => &[InputSpec::Integer("number")],
            Self::Prime => &[InputSpec::Integer("number")],
            Self::DigitCount => &[InputSpec::Integer("number")],
            Self::DigitSum => &[InputSpec::Integer("number")],
            Self::Armstrong => &[InputSpec::Integer("number")],
            Self::Fibonacci => &[InputSpec::Integer("term count")],
            Self::VowelConsonant => &[InputSpec::Letter("letter")],
            Self::Calculator => &[
                InputSpec::Number("first number"),
                InputSpec::Operator("operator"),
                InputSpec::Number("second number"),
            ],
            Self::Gcd => &[InputSpec::Integer("first number"), InputSpec::Integer("second number")],
            Self::Perfect => &[InputSpec::Integer("number")],
            Self::Divisors => &[InputSpec::Integer("number")],
            Self::Sign => &[InputSpec::Number("number")],
            Self::Power => &[InputSpec::Number("base"), InputSpec::Integer("exponent")],
        }
    }

    /// Look up an operation by its stable name.
    pub fn from_name(name: &str) -> Option<OpKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn int_arg(op: &'static str, args: &[Scalar], index: usize) -> OpResult<i64> {
    match args[index] {
        Scalar::Int(n) => Ok(n),
        _ => Err(OpError::WrongType {
            op,
            expected: "an integer",
            index: index + 1,
        }),
    }
}

/// Numbers widen: an integer scalar is accepted where a number is expected.
fn num_arg(op: &'static str, args: &[Scalar], index: usize) -> OpResult<f64> {
    match args[index] {
        Scalar::Num(x) => Ok(x),
        Scalar::Int(n) => Ok(n as f64),
        _ => Err(OpError::WrongType {
            op,
            expected: "a number",
            index: index + 1,
        }),
    }
}

fn letter_arg(op: &'static str, args: &[Scalar], index: usize) -> OpResult<char> {
    match args[index] {
        Scalar::Letter(c) => Ok(c),
        _ => Err(OpError::WrongType {
            op,
            expected: "a letter",
            index: index + 1,
        }),
    }
}

fn operator_arg(op: &'static str, args: &[Scalar], index: usize) -> OpResult<Operator> {
    match args[index] {
        Scalar::Operator(o) => Ok(o),
        _ => Err(OpError::WrongType {
            op,
            expected: "an operator",
            index: index + 1,
        }),
    }
}

/// Run `kind` against already-typed arguments, formatting the outcome as
/// the text the shell prints.
pub fn evaluate(kind: OpKind, args: &[Scalar]) -> OpResult<String> {
    let expected = kind.inputs().len();
    if args.len() != expected {
        return Err(OpError::WrongArity {
            op: kind.name(),
            expected,
            got: args.len(),
        });
    }
    let op = kind.name();
    match kind {
        OpKind::Parity => Ok(basic::parity(int_arg(op, args, 0)?).to_string()),
        OpKind::MaxOfTwo => {
            Ok(basic::max_of(num_arg(op, args, 0)?, num_arg(op, args, 1)?).to_string())
        }
        OpKind::LeapYear => Ok(calendar::leap_year(int_arg(op, args, 0)?)?.to_string()),
        OpKind::SumOfNaturals => Ok(series::sum_of_naturals(int_arg(op, args, 0)?)?.to_string()),
        OpKind::Factorial => Ok(series::factorial(int_arg(op, args, 0)?)?.to_string()),
        OpKind::MultiplicationTable => series::multiplication_table(int_arg(op, args, 0)?),
        OpKind::ReverseDigits => Ok(digits::reverse_digits(int_arg(op, args, 0)?)?.to_string()),
        OpKind::Palindrome => Ok(digits::palindrome(int_arg(op, args, 0)?).to_string()),
        OpKind::Prime => Ok(divisors::prime(int_arg(op, args, 0)?)?.to_string()),
        OpKind::DigitCount => Ok(digits::digit_count(int_arg(op, args, 0)?).to_string()),
        OpKind::DigitSum => Ok(digits::digit_sum(int_arg(op, args, 0)?).to_string()),
        OpKind::Armstrong => Ok(digits::armstrong(int_arg(op, args, 0)?)?.to_string()),
        OpKind::Fibonacci => series::fibonacci(int_arg(op, args, 0)?),
        OpKind::VowelConsonant => {
            Ok(chars::vowel_or_consonant(letter_arg(op, args, 0)?)?.to_string())
        }
        OpKind::Calculator => {
            let a = num_arg(op, args, 0)?;
            let operator = operator_arg(op, args, 1)?;
            let b = num_arg(op, args, 2)?;
            Ok(basic::calculate(a, operator, b)?.to_string())
        }
        OpKind::Gcd => Ok(divisors::gcd(int_arg(op, args, 0)?, int_arg(op, args, 1)?)?.to_string()),
        OpKind::Perfect => Ok(divisors::perfect(int_arg(op, args, 0)?)?.to_string()),
        OpKind::Divisors => divisors::divisors(int_arg(op, args, 0)?),
        OpKind::Sign => Ok(basic::sign_of(num_arg(op, args, 0)?).to_string()),
        OpKind::Power => {
            Ok(basic::power(num_arg(op, args, 0)?, int_arg(op, args, 1)?).to_string())
        }
    }
}
