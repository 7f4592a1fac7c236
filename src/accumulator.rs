use tracing::trace;

use crate::top_k::TopK;

/// One input line as seen by the state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Calories(i64),
    Boundary,
}

impl From<Option<i64>> for Token {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(n) => Token::Calories(n),
            None => Token::Boundary,
        }
    }
}

/// Sums runs of calories and hands each finished total to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Ready(TopK<i64>),
    Counting { sum: i64, top: TopK<i64> },
}

impl State {
    pub fn new(capacity: usize) -> Self {
        State::Ready(TopK::new(capacity))
    }

    pub fn consume(self, token: Token) -> Self {
        match (self, token) {
            (State::Ready(top), Token::Boundary) => State::Ready(top),
            (State::Ready(top), Token::Calories(n)) => State::Counting { sum: n, top },
            (State::Counting { sum, top }, Token::Calories(n)) => State::Counting {
                sum: sum.saturating_add(n),
                top,
            },
            (State::Counting { sum, top }, Token::Boundary) => {
                trace!(sum, "group closed");
                State::Ready(top.with(sum))
            }
        }
    }

    pub fn top(&self) -> &TopK<i64> {
        match self {
            State::Ready(top) | State::Counting { top, .. } => top,
        }
    }

    /// Closes a group still open at the end of input.
    pub fn finish(self) -> TopK<i64> {
        match self {
            State::Ready(top) => top,
            State::Counting { sum, top } => {
                trace!(sum, "last group closed");
                top.with(sum)
            }
        }
    }
}
