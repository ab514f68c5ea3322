//! Line-oriented input for the terminal front end.
//!
//! A line is split on whitespace. Each word is either a command word
//! (`sin`, `clear`, `history`, ...), a key name accepted by
//! [`Event::from_key`], or a run of single-character keys such as `12.5*3=`.

use crate::core::{Event, Function, Operation, Tape};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Event(Event),
    /// Print the calculation tape.
    History,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognised input '{0}'")]
pub struct UnknownToken(pub String);

fn command_word(word: &str) -> Option<ConsoleInput> {
    let input = match word.to_ascii_lowercase().as_str() {
        "history" | "tape" => ConsoleInput::History,
        "quit" | "exit" => ConsoleInput::Quit,
        "clear" | "ac" | "esc" => ConsoleInput::Event(Event::Clear),
        "del" | "back" => ConsoleInput::Event(Event::Delete),
        "pow" | "power" => ConsoleInput::Event(Event::Operation(Operation::Power)),
        other => ConsoleInput::Event(Event::Function(other.parse::<Function>().ok()?)),
    };
    Some(input)
}

fn key(c: char) -> Option<Event> {
    if c == '^' {
        return Some(Event::Operation(Operation::Power));
    }
    Event::from_key(c.encode_utf8(&mut [0; 4])).map(|press| press.event)
}

/// Parse one line into the inputs it names, in order. Nothing is returned
/// if any token is unknown.
pub fn parse_line(line: &str) -> Result<Vec<ConsoleInput>, UnknownToken> {
    let mut inputs = Vec::new();
    for word in line.split_whitespace() {
        if let Some(input) = command_word(word) {
            inputs.push(input);
            continue;
        }
        if let Some(press) = Event::from_key(word) {
            inputs.push(ConsoleInput::Event(press.event));
            continue;
        }
        for c in word.chars() {
            let event = key(c).ok_or_else(|| UnknownToken(c.to_string()))?;
            inputs.push(ConsoleInput::Event(event));
        }
    }
    Ok(inputs)
}

/// One-line summary printed above the tape by the `history` command.
pub fn tape_summary(tape: &Tape) -> String {
    if tape.is_empty() {
        return "No calculations yet".to_string();
    }
    let seconds = tape.duration().unwrap_or_default().as_secs_f64();
    format!(
        "{} calculations, {} succeeded, over {seconds:.1}s",
        tape.len(),
        tape.successes().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Calculation, EvaluationRequest, Outcome, ResultValue};
    use uuid::Uuid;

    fn events(line: &str) -> Vec<Event> {
        parse_line(line)
            .unwrap()
            .into_iter()
            .map(|input| match input {
                ConsoleInput::Event(event) => event,
                other => panic!("expected an event, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn packed_keys_expand_to_events() {
        assert_eq!(
            events("12+3="),
            vec![
                Event::Digit('1'),
                Event::Digit('2'),
                Event::Operation(Operation::Add),
                Event::Digit('3'),
                Event::Compute,
            ]
        );
    }

    #[test]
    fn words_and_key_names() {
        assert_eq!(
            events("2 pow 10 Enter"),
            vec![
                Event::Digit('2'),
                Event::Operation(Operation::Power),
                Event::Digit('1'),
                Event::Digit('0'),
                Event::Compute,
            ]
        );
        assert_eq!(events("9 SIN"), vec![Event::Digit('9'), Event::Function(Function::Sin)]);
        assert_eq!(events("Backspace ac"), vec![Event::Delete, Event::Clear]);
    }

    #[test]
    fn caret_selects_power() {
        assert_eq!(
            events("2^3"),
            vec![
                Event::Digit('2'),
                Event::Operation(Operation::Power),
                Event::Digit('3'),
            ]
        );
    }

    #[test]
    fn session_commands() {
        assert_eq!(parse_line("history").unwrap(), vec![ConsoleInput::History]);
        assert_eq!(parse_line(" quit ").unwrap(), vec![ConsoleInput::Quit]);
        assert!(parse_line("").unwrap().is_empty());
    }

    #[test]
    fn unknown_characters_reject_the_line() {
        assert_eq!(parse_line("3+x"), Err(UnknownToken("x".to_string())));
    }

    #[test]
    fn summary_counts_successes() {
        assert_eq!(tape_summary(&Tape::new()), "No calculations yet");

        let tape = Tape::new()
            .record(Calculation::new(
                Uuid::new_v4(),
                EvaluationRequest::binary(1.0, 2.0, Operation::Add),
                Outcome::Success(ResultValue::Number(3.0)),
            ))
            .record(Calculation::new(
                Uuid::new_v4(),
                EvaluationRequest::binary(1.0, 0.0, Operation::Divide),
                Outcome::ServiceError(None),
            ));

        let summary = tape_summary(&tape);
        assert!(summary.starts_with("2 calculations, 1 succeeded, over "));
        assert!(summary.ends_with('s'));
    }
}
