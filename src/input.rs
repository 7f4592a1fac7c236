use clap::ValueEnum;
use tracing::{debug, warn};
use util::{parse_nice, parse_number};

use crate::accumulator::Token;

/// What to do with a line that is neither blank nor a number.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum MalformedLines {
    /// Close the current group, as a blank line would.
    #[default]
    Separator,
    /// Ignore the line and keep the current group open.
    Skip,
    /// Stop with an error.
    Reject,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("line {line}: {content:?} is not a number")]
    Malformed { line: usize, content: String },
}

/// `line` is 1-based and only used for reporting.
pub fn tokenize(
    line: usize,
    content: &str,
    policy: MalformedLines,
) -> Result<Option<Token>, InputError> {
    if content.trim().is_empty() {
        return Ok(Some(Token::Boundary));
    }

    let report = match parse_nice(content, parse_number) {
        Ok(n) => return Ok(Some(Token::Calories(n))),
        Err(report) => report,
    };

    match policy {
        MalformedLines::Separator => {
            warn!(line, "treating malformed line as a group boundary\n{report}");
            Ok(Some(Token::Boundary))
        }
        MalformedLines::Skip => {
            debug!(line, "skipping malformed line\n{report}");
            Ok(None)
        }
        MalformedLines::Reject => Err(InputError::Malformed {
            line,
            content: content.to_string(),
        }),
    }
}
