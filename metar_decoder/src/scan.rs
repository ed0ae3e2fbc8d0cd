//! Helpers for running a nom grammar against every position of a report.
//!
//! METAR groups are looked up anywhere in the raw text rather than by
//! consuming the report token by token, so a garbled group never hides the
//! ones after it.

use nom::Parser;

/// Returns the output of the leftmost position where `parser` matches.
pub(crate) fn find_first<'a, O, P>(input: &'a str, mut parser: P) -> Option<O>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    input
        .char_indices()
        .find_map(|(start, _)| parser.parse(&input[start..]).ok())
        .map(|(_, output)| output)
}

/// Returns every non-overlapping match of `parser`, scanning left to right.
pub(crate) fn find_all<'a, O, P>(input: &'a str, mut parser: P) -> Vec<O>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    let mut found = Vec::new();
    let mut rest = input;
    while let Some(next) = rest.chars().next() {
        match parser.parse(rest) {
            Ok((after, output)) if after.len() < rest.len() => {
                found.push(output);
                rest = after;
            }
            _ => rest = &rest[next.len_utf8()..],
        }
    }
    found
}

/// Exactly `count` ASCII digits read as a number.
pub(crate) fn digits<'a>(
    count: usize,
) -> impl Parser<&'a str, Output = u32, Error = nom::error::Error<&'a str>> {
    nom::combinator::map_parser(
        nom::bytes::complete::take_while_m_n(count, count, |c: char| c.is_ascii_digit()),
        nom::character::complete::u32,
    )
}

#[cfg(test)]
mod tests {
    use nom::{bytes::complete::tag, sequence::preceded};

    use super::*;

    #[test]
    fn test_find_first_is_leftmost() {
        let found = find_first("A12 B34 A56", preceded(tag("A"), digits(2)));
        assert_eq!(found, Some(12));
    }

    #[test]
    fn test_find_first_inside_token() {
        let found = find_first("XXA12YY", preceded(tag("A"), digits(2)));
        assert_eq!(found, Some(12));
        assert_eq!(find_first("no match here", preceded(tag("A"), digits(2))), None);
    }

    #[test]
    fn test_find_all_non_overlapping() {
        let found = find_all("A12A34 A5 A678", preceded(tag("A"), digits(2)));
        assert_eq!(found, vec![12, 34, 67]);
    }

    #[test]
    fn test_digits_requires_exact_count() {
        assert_eq!(digits(3).parse("050KT"), Ok(("KT", 50)));
        assert!(digits(3).parse("05KT").is_err());
        assert_eq!(digits(2).parse("123"), Ok(("3", 12)));
    }

    #[test]
    fn test_find_all_handles_multibyte_text() {
        let found = find_all("ÆA12 øA34", preceded(tag("A"), digits(2)));
        assert_eq!(found, vec![12, 34]);
    }
}
