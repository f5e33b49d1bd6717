use std::str::FromStr;
use std::str::Utf8Error;

use thiserror::Error;

/// Consumes the slice until a non-ascii whitespace character is reached.
pub fn take_ws(bytes: &[u8]) -> &[u8] {
    let i = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    &bytes[i..]
}

/// Like `take_ws`, but strips ascii whitespace from both ends of the slice.
pub fn trim_ws(bytes: &[u8]) -> &[u8] {
    let bytes = take_ws(bytes);
    let n = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);

    &bytes[..n]
}

/// Takes the next character from the slice. If none is found, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Advance the slice until `P` is satisfied, without consuming the satisfying byte.
///
/// If `P` is never satisfied, `bytes` is left as-is. The taken slice may be empty when the very
/// first byte satisfies `P`.
#[inline]
pub fn take_until_fn<P>(p: P, bytes: &[u8]) -> (Option<&[u8]>, &[u8])
where
    P: Fn(u8) -> bool,
{
    let Some(i) = bytes.iter().position(|&b| p(b)) else {
        return (None, bytes);
    };

    let (res, bytes) = bytes.split_at(i);

    (Some(res), bytes)
}

/// Advance the slice until byte `b` is found, without consuming it.
///
/// If `b` is never found, `bytes` is left as-is.
pub fn take_until(b: u8, bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    take_until_fn(|a| a == b, bytes)
}

/// Like `take_until`, but also consumes `b` without adding it to the output.
pub fn take_with(b: u8, bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    let (Some(res), bytes) = take_until(b, bytes) else {
        return (None, bytes);
    };

    let (_, bytes) = take_1(bytes);

    (Some(res), bytes)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Error parsing bytes from UTF-8: {0}")]
    InvalidUTF8(Utf8Error),

    #[error("Failed to convert \"{str}\"")]
    ParseError { str: String },
}

/// Converts `&[u8]` to `T` if `T: FromStr`.
pub fn convert<T: FromStr>(bytes: &[u8]) -> Result<T, ConvertError> {
    let str = std::str::from_utf8(bytes).map_err(ConvertError::InvalidUTF8)?;

    let Ok(res) = str.parse::<T>() else {
        return Err(ConvertError::ParseError {
            str: str.to_string(),
        });
    };

    Ok(res)
}
