//! String generators.

use super::logic;
use fuzz_core::{constant, literals, Density, Thunk, Wrapped};

pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Concatenate `size` unwraps of `substr`.
///
/// Length is counted in unwraps, not characters: multi-character
/// substrings make the result longer than `size`.
pub fn from(substr: impl Into<Wrapped<String>>, size: impl Into<Wrapped<usize>>) -> Thunk<String> {
    let substr = substr.into();
    let size = size.into();

    Thunk::new(move |src| {
        let tgt = size.unwrap(src)?;
        let mut result = String::new();

        for _ in 0..tgt {
            result.push_str(&substr.unwrap(src)?);
        }

        Ok(result)
    })
}

/// Join unwrapped `parts` with `separator`.
///
/// The separator is unwrapped once per call and the same text is used for
/// every gap.
pub fn join(separator: impl Into<Wrapped<String>>, parts: Vec<Wrapped<String>>) -> Thunk<String> {
    let separator = separator.into();

    Thunk::new(move |src| {
        let sep = separator.unwrap(src)?;
        let parts = parts
            .iter()
            .map(|part| part.unwrap(src))
            .collect::<fuzz_core::Result<Vec<String>>>()?;

        Ok(parts.join(&sep))
    })
}

/// A single digit, `0` through `9`.
pub fn digit<D: Density + 'static>(density: D) -> Thunk<String> {
    Thunk::new(move |src| Ok(density.sample(0.into(), 10.into()).unwrap(src)?.to_string()))
}

/// A single digit, `1` through `9`.
pub fn non_zero_digit<D: Density + 'static>(density: D) -> Thunk<String> {
    Thunk::new(move |src| Ok(density.sample(1.into(), 10.into()).unwrap(src)?.to_string()))
}

pub fn unix_newline() -> Thunk<String> {
    constant("\n".to_string())
}

pub fn windows_newline() -> Thunk<String> {
    constant("\r\n".to_string())
}

/// Either newline convention, picked by `density`.
pub fn newline<D: Density + 'static>(density: D) -> Thunk<String> {
    logic::one_of(density, literals(["\n".to_string(), "\r\n".to_string()]))
}

pub fn space() -> Thunk<String> {
    constant(" ".to_string())
}

pub fn tab() -> Thunk<String> {
    constant("\t".to_string())
}

pub fn hyphen() -> Thunk<String> {
    constant("-".to_string())
}

pub fn underscore() -> Thunk<String> {
    constant("_".to_string())
}

fn one_char_of<D: Density + 'static>(density: D, alphabet: &str) -> Thunk<String> {
    logic::one_of(density, literals(alphabet.chars().map(String::from)))
}

/// A single ASCII lowercase letter.
pub fn lowercase_letter<D: Density + 'static>(density: D) -> Thunk<String> {
    one_char_of(density, LOWERCASE_LETTERS)
}

/// A single ASCII uppercase letter.
pub fn uppercase_letter<D: Density + 'static>(density: D) -> Thunk<String> {
    one_char_of(density, UPPERCASE_LETTERS)
}

/// A single ASCII letter of either case.
pub fn letter<D: Density + 'static>(density: D) -> Thunk<String> {
    one_char_of(density, LETTERS)
}
