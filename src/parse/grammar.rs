use winnow::ascii::{line_ending, space0, till_line_ending};
use winnow::combinator::{alt, cut_err, eof, opt, preceded};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

// -- Comments ---------------------------------------------------------------

fn comment(input: &mut &str) -> ModalResult<()> {
    (one_of(['#', '!']), till_line_ending)
        .void()
        .parse_next(input)
}

// -- Pairs ------------------------------------------------------------------

fn property_key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !matches!(c, '=' | ':' | '\r' | '\n'))
        .map(str::trim_end)
        .verify(|key: &str| !key.is_empty())
        .context(StrContext::Expected(StrContextValue::Description(
            "property key",
        )))
        .parse_next(input)
}

/// `key`, `key=value` or `key:value`; only the first separator splits.
pub fn pair(input: &mut &str) -> ModalResult<(String, String)> {
    preceded(
        space0,
        (
            property_key,
            opt(preceded(one_of(['=', ':']), till_line_ending)),
        ),
    )
    .map(|(key, value): (&str, Option<&str>)| {
        (
            key.to_owned(),
            value.map(str::trim).unwrap_or_default().to_owned(),
        )
    })
    .parse_next(input)
}

// -- Documents --------------------------------------------------------------

fn blank(input: &mut &str) -> ModalResult<()> {
    space0.void().parse_next(input)
}

fn newline(input: &mut &str) -> ModalResult<()> {
    line_ending.void().parse_next(input)
}

fn end_of_line(input: &mut &str) -> ModalResult<()> {
    alt((line_ending.void(), eof.void())).parse_next(input)
}

pub fn document(input: &mut &str) -> ModalResult<Vec<(String, String)>> {
    let mut entries = Vec::new();
    loop {
        blank.parse_next(input)?;
        if input.is_empty() {
            break;
        }
        if opt(newline).parse_next(input)?.is_some() {
            continue;
        }
        if opt(comment).parse_next(input)?.is_some() {
            continue;
        }
        entries.push(cut_err(pair).parse_next(input)?);
        cut_err(end_of_line).parse_next(input)?;
    }
    Ok(entries)
}
