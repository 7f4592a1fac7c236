use std::fmt;

use anyhow::Result;
use tracing::{debug, info};

mod accumulator;
mod config;
mod input;
mod top_k;

pub use accumulator::{State, Token};
pub use config::Args;
pub use input::{tokenize, InputError, MalformedLines};
pub use top_k::TopK;

/// The greatest group totals, greatest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub top: Vec<i64>,
}

impl Totals {
    /// Saturates rather than overflowing, like the group sums.
    pub fn sum(&self) -> i64 {
        self.top
            .iter()
            .fold(0i64, |acc, &total| acc.saturating_add(total))
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for total in &self.top {
            writeln!(f, "{total}")?;
        }
        write!(f, "{}", self.sum())
    }
}

pub fn get_top_totals(
    input: impl Iterator<Item = impl Into<String>>,
    n: usize,
    policy: MalformedLines,
) -> Result<Totals> {
    let mut state = State::new(n);

    for (i, line) in input.enumerate() {
        let line: String = line.into();
        if let Some(token) = tokenize(i + 1, line.as_str(), policy)? {
            state = state.consume(token);
        }
    }

    let top = state.finish();
    debug!(kept = top.len(), capacity = top.capacity(), "input exhausted");

    let totals = Totals {
        top: top.into_vec(),
    };
    info!(sum = totals.sum(), "top totals found");

    Ok(totals)
}

pub fn get_biggest_total(input: impl Iterator<Item = impl Into<String>>) -> Result<i64> {
    Ok(get_top_totals(input, 1, MalformedLines::default())?.sum())
}

pub fn get_biggest_three_total(input: impl Iterator<Item = impl Into<String>>) -> Result<i64> {
    Ok(get_top_totals(input, 3, MalformedLines::default())?.sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TEST_INPUT: &str = include_str!("../data/test_input");

    #[test]
    fn part1() {
        let res = get_biggest_total(TEST_INPUT.lines());
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), 24000);
    }

    #[test]
    fn part2() {
        let res = get_biggest_three_total(TEST_INPUT.lines());
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), 45000);
    }

    #[rstest]
    #[case(vec!["3", "4", "", "8"], 3, vec![8, 7], 15)]
    #[case(vec!["1", "2", "3", "", "10", "", "", "4", "5"], 3, vec![10, 9, 6], 25)]
    #[case(vec!["1", "2", "3", "", "10", "", "", "4", "5"], 0, vec![], 0)]
    #[case(vec!["7", "", "2", "3"], 0, vec![], 0)]
    #[case(vec!["5"], 3, vec![5], 5)]
    #[case(vec!["3", "+4"], 3, vec![7], 7)]
    #[case(
        vec!["9223372036854775807", "", "9223372036854775807"],
        3,
        vec![i64::MAX, i64::MAX],
        i64::MAX
    )]
    #[case(
        vec!["-9223372036854775808", "", "-9223372036854775808"],
        3,
        vec![i64::MIN, i64::MIN],
        i64::MIN
    )]
    #[case(vec!["", "", "5", ""], 3, vec![5], 5)]
    #[case(vec![], 3, vec![], 0)]
    fn top_totals(
        #[case] lines: Vec<&str>,
        #[case] n: usize,
        #[case] expected: Vec<i64>,
        #[case] sum: i64,
    ) {
        let totals = get_top_totals(lines.into_iter(), n, MalformedLines::Separator).unwrap();
        assert_eq!(totals.top, expected);
        assert_eq!(totals.sum(), sum);
    }

    #[rstest]
    #[case(MalformedLines::Separator, vec![4, 3])]
    #[case(MalformedLines::Skip, vec![7])]
    fn malformed_lines(#[case] policy: MalformedLines, #[case] expected: Vec<i64>) {
        let lines = ["3", "oops", "4"];
        let totals = get_top_totals(lines.into_iter(), 3, policy).unwrap();
        assert_eq!(totals.top, expected);
    }

    #[test]
    fn malformed_lines_rejected() {
        let lines = ["3", "", "oops", "4"];
        let err = get_top_totals(lines.into_iter(), 3, MalformedLines::Reject).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::Malformed {
                line: 3,
                content: "oops".to_string()
            })
        );
    }

    #[test]
    fn display_lists_then_sums() {
        let totals = Totals {
            top: vec![24000, 11000, 10000],
        };
        assert_eq!(totals.to_string(), "24000\n11000\n10000\n45000");

        let empty = Totals { top: vec![] };
        assert_eq!(empty.to_string(), "0");
    }
}
