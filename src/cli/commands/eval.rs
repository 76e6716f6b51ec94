//! One-shot evaluation of a single operation.

use crate::debug_event;
use crate::io::{Envelope, ExitCode};
use crate::ops::{self, InputSpec, OpKind, Operator, Scalar};

/// Run the eval command, printing the outcome and returning the exit code.
pub fn run_eval(operation: &str, raw_args: &[String], json: bool) -> ExitCode {
    match evaluate_line(operation, raw_args) {
        Ok((kind, result)) => {
            if json {
                let data = serde_json::json!({
                    "operation": kind.name(),
                    "result": result,
                });
                println!("{}", Envelope::success(result.as_str(), Some(data)).to_json());
            } else {
                println!("{result}");
            }
            ExitCode::Success
        }
        Err((exit, message)) => {
            if json {
                println!(
                    "{}",
                    Envelope::<serde_json::Value>::error(message.as_str(), exit).to_json()
                );
            } else {
                eprintln!("Error: {message}");
            }
            exit
        }
    }
}

/// Resolve the operation, parse each argument per its input spec, and
/// evaluate. Usage problems (unknown name, wrong count, unparsable text)
/// and evaluation failures map to different exit codes.
fn evaluate_line(
    operation: &str,
    raw_args: &[String],
) -> Result<(OpKind, String), (ExitCode, String)> {
    let Some(kind) = OpKind::from_name(operation) else {
        return Err((
            ExitCode::UsageError,
            format!("unknown operation '{operation}', see 'mathkit list'"),
        ));
    };
    let specs = kind.inputs();
    if raw_args.len() != specs.len() {
        return Err((
            ExitCode::UsageError,
            format!(
                "{} expects {} argument(s), got {}",
                kind.name(),
                specs.len(),
                raw_args.len()
            ),
        ));
    }
    let mut args = Vec::with_capacity(specs.len());
    for (spec, raw) in specs.iter().zip(raw_args) {
        args.push(parse_arg(spec, raw).map_err(|m| (ExitCode::UsageError, m))?);
    }
    debug_event!("eval", "dispatch", "{}", kind.name());
    ops::evaluate(kind, &args)
        .map(|result| (kind, result))
        .map_err(|e| (ExitCode::GeneralError, e.to_string()))
}

/// Parse one raw argument according to its input spec.
fn parse_arg(spec: &InputSpec, raw: &str) -> Result<Scalar, String> {
    let trimmed = raw.trim();
    match spec {
        InputSpec::Integer(label) => trimmed
            .parse::<i64>()
            .map(Scalar::Int)
            .map_err(|_| format!("'{raw}' is not an integer ({label})")),
        InputSpec::Number(label) => trimmed
            .parse::<f64>()
            .map(Scalar::Num)
            .map_err(|_| format!("'{raw}' is not a number ({label})")),
        InputSpec::Letter(label) => trimmed
            .parse::<char>()
            .map(Scalar::Letter)
            .map_err(|_| format!("'{raw}' is not a single character ({label})")),
        InputSpec::Operator(_) => trimmed
            .parse::<Operator>()
            .map(Scalar::Operator)
            .map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn known_operation_evaluates() {
        let (kind, result) = evaluate_line("gcd", &strings(&["12", "18"])).unwrap();
        assert_eq!(kind, OpKind::Gcd);
        assert_eq!(result, "6");
    }

    #[test]
    fn unknown_operation_is_a_usage_error() {
        let (exit, message) = evaluate_line("cosine", &[]).unwrap_err();
        assert_eq!(exit, ExitCode::UsageError);
        assert!(message.contains("unknown operation 'cosine'"));
    }

    #[test]
    fn wrong_argument_count_is_a_usage_error() {
        let (exit, message) = evaluate_line("gcd", &strings(&["12"])).unwrap_err();
        assert_eq!(exit, ExitCode::UsageError);
        assert_eq!(message, "gcd expects 2 argument(s), got 1");
    }

    #[test]
    fn unparsable_argument_is_a_usage_error() {
        let (exit, message) = evaluate_line("factorial", &strings(&["five"])).unwrap_err();
        assert_eq!(exit, ExitCode::UsageError);
        assert!(message.contains("'five' is not an integer"));
    }

    #[test]
    fn evaluation_failure_keeps_the_library_message() {
        let (exit, message) = evaluate_line("calc", &strings(&["10", "/", "0"])).unwrap_err();
        assert_eq!(exit, ExitCode::GeneralError);
        assert_eq!(message, "division by zero");
    }

    #[test]
    fn calculator_parses_operator_argument() {
        let (_, result) = evaluate_line("calc", &strings(&["10", "/", "4"])).unwrap();
        assert_eq!(result, "2.5");
        let (exit, message) = evaluate_line("calc", &strings(&["1", "%", "2"])).unwrap_err();
        assert_eq!(exit, ExitCode::UsageError);
        assert!(message.contains("unknown operator '%'"));
    }

    #[test]
    fn negative_arguments_parse() {
        let (_, result) = evaluate_line("even-odd", &strings(&["-7"])).unwrap();
        assert_eq!(result, "Odd");
    }
}
