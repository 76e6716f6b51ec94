//! The interactive menu loop.
//!
//! Renders the numbered operation menu, prompts for each input the chosen
//! operation needs, prints the result or the error text, and repeats until
//! the exit choice or end of input.

use std::io::{self, BufRead, Write};

use console::style;

use crate::config::Settings;
use crate::debug_event;
use crate::display::Theme;
use crate::io::{Prompted, Prompter};
use crate::ops::{self, InputSpec, OpKind, Scalar};

/// Run the menu against locked stdin/stdout.
pub fn run_menu(config: &Settings) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = config.display.color && !Theme::should_disable_colors();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    menu_loop(prompter, config, color)
}

/// The read-dispatch-print loop, generic over its streams for testing.
fn menu_loop<R: BufRead, W: Write>(
    mut prompter: Prompter<R, W>,
    config: &Settings,
    color: bool,
) -> anyhow::Result<()> {
    let mut first_round = true;
    loop {
        if first_round || config.menu.banner_every_round {
            render_menu(&mut prompter, color)?;
            first_round = false;
        }
        let choice = match prompter.read_selection(&config.menu.prompt, OpKind::ALL.len())? {
            Prompted::Value(n) => n,
            Prompted::Eof => break,
        };
        if choice == 0 {
            break;
        }
        let kind = OpKind::ALL[choice - 1];
        debug_event!("menu", "selected", "{}", kind.name());
        let Some(args) = collect_inputs(&mut prompter, kind.inputs())? else {
            break;
        };
        match ops::evaluate(kind, &args) {
            Ok(result) => prompter.say(result)?,
            Err(e) => {
                let message = format!("Error: {e}");
                if color {
                    prompter.say(style(message).red())?;
                } else {
                    prompter.say(message)?;
                }
            }
        }
        prompter.say("")?;
    }
    prompter.say("Bye.")?;
    Ok(())
}

fn render_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    color: bool,
) -> io::Result<()> {
    let title = "mathkit operations";
    if color {
        prompter.say(style(title).cyan().bold())?;
    } else {
        prompter.say(title)?;
    }
    for (i, kind) in OpKind::ALL.iter().enumerate() {
        prompter.say(format_args!("{:>3}. {}", i + 1, kind.label()))?;
    }
    prompter.say(format_args!("{:>3}. Exit", 0))?;
    Ok(())
}

/// Prompt for every input the operation needs. `None` means the input
/// source ran dry mid-collection.
fn collect_inputs<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    specs: &[InputSpec],
) -> io::Result<Option<Vec<Scalar>>> {
    let mut args = Vec::with_capacity(specs.len());
    for spec in specs {
        let scalar = match spec {
            InputSpec::Integer(label) => match prompter.read_integer(label)? {
                Prompted::Value(v) => Scalar::Int(v),
                Prompted::Eof => return Ok(None),
            },
            InputSpec::Number(label) => match prompter.read_number(label)? {
                Prompted::Value(v) => Scalar::Num(v),
                Prompted::Eof => return Ok(None),
            },
            InputSpec::Letter(label) => match prompter.read_letter(label)? {
                Prompted::Value(v) => Scalar::Letter(v),
                Prompted::Eof => return Ok(None),
            },
            InputSpec::Operator(label) => match prompter.read_operator(label)? {
                Prompted::Value(v) => Scalar::Operator(v),
                Prompted::Eof => return Ok(None),
            },
        };
        args.push(scalar);
    }
    Ok(Some(args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_transcript(input: &str) -> String {
        let mut config = Settings::default();
        config.menu.banner_every_round = false;
        let mut output = Vec::new();
        menu_loop(
            Prompter::new(Cursor::new(input), &mut output),
            &config,
            false,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn gcd_round_trip_through_the_menu() {
        // 16 = gcd in menu order
        let transcript = run_transcript("16\n12\n18\n0\n");
        assert!(transcript.contains("16. Greatest common divisor"));
        assert!(transcript.contains("6\n"));
        assert!(transcript.ends_with("Bye.\n"));
    }

    #[test]
    fn errors_are_printed_and_the_loop_continues() {
        // 15 = calculator; divide by zero, then exit
        let transcript = run_transcript("15\n10\n/\n0\n0\n");
        assert!(transcript.contains("Error: division by zero"));
        assert!(transcript.ends_with("Bye.\n"));
    }

    #[test]
    fn invalid_selection_reprompts() {
        let transcript = run_transcript("42\n1\n8\n0\n");
        assert!(transcript.contains("42 is not on the menu"));
        assert!(transcript.contains("Even"));
    }

    #[test]
    fn eof_anywhere_exits_cleanly() {
        assert!(run_transcript("").ends_with("Bye.\n"));
        // EOF in the middle of input collection
        assert!(run_transcript("16\n12\n").ends_with("Bye.\n"));
    }
}
