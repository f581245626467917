use fhub_derive::fhub_error;
use std::borrow::Cow;

#[fhub_error]
pub enum ParseError {
    #[error("Number parse error{}: {source}", format_context(.context))]
    Number { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },

    #[error("Out of range{}: {message}", format_context(.context))]
    OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> ParseResult<f64> {
    let value = raw.parse::<f64>().context("reading temperature")?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::OutOfRange { message: raw.to_owned().into(), context: None })
    }
}

fn main() {
    assert_eq!(parse("21.5").ok(), Some(21.5));

    let err = parse("warm").unwrap_err();
    assert!(err.to_string().starts_with("Number parse error (reading temperature): "));

    let err = parse("inf").unwrap_err();
    assert_eq!(err.to_string(), "Out of range: inf");
}
