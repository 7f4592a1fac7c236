use std::{
    io::{self, BufRead},
    str::FromStr,
};

use anyhow::Result;
use miette::GraphicalReportHandler;
use nom::{
    character::complete::{digit1, one_of},
    combinator::{map_res, opt, recognize},
    error::ParseError,
    sequence::tuple,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{BaseErrorKind, ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};
use tracing::Level;

// Thanks to FasterThanLime! https://fasterthanli.me/series/advent-of-code-2022/part-11

pub type Span<'a> = LocatedSpan<&'a str>;

type ErrorKind = BaseErrorKind<&'static str, Box<dyn std::error::Error + Send + Sync>>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: ErrorKind,
}

/// Logs to stderr so stdout only carries answers. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .try_init();
}

pub fn parse_number<'a, E>(i: Span<'a>) -> IResult<Span<'a>, i64, E>
where
    E: ParseError<Span<'a>> + nom::error::FromExternalError<Span<'a>, std::num::ParseIntError>,
{
    map_res(recognize(tuple((opt(one_of("+-")), digit1))), |i: Span<'a>| {
        FromStr::from_str(i.fragment())
    })(i)
}

fn first_base(e: ErrorTree<Span<'_>>) -> Option<(Span<'_>, ErrorKind)> {
    match e {
        GenericErrorTree::Base { location, kind } => Some((location, kind)),
        GenericErrorTree::Stack { base, .. } => first_base(*base),
        GenericErrorTree::Alt(alts) => alts.into_iter().find_map(first_base),
    }
}

/// Renders a pointer at the column where parsing of `l` gave up.
fn render_bad_input(l: &str, e: ErrorTree<Span<'_>>) -> String {
    let Some((location, kind)) = first_base(e) else {
        return format!("bad input: {l:?}");
    };

    let err = BadInput {
        src: l,
        bad_bit: miette::SourceSpan::new(location.location_offset().into(), 0.into()),
        kind,
    };

    let mut s = String::new();
    match GraphicalReportHandler::new().render_report(&mut s, &err) {
        Ok(()) => s,
        Err(_) => format!("bad input at column {}: {l:?}", location.get_column()),
    }
}

/// Runs `parse_fun` over the whole of `l`. A failure comes back as a rendered
/// report for the caller to log.
pub fn parse_nice<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T, String>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line_span = Span::new(l);
    let line: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(line_span);
    line.map_err(|e| render_bad_input(l, e))
}

pub fn read_input_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();

    stdin
        .lock()
        .lines()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(anyhow::Error::msg)
}
