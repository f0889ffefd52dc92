//! Code point generators over named Unicode blocks.
//!
//! Each generator draws a code point from a block's inclusive range through
//! the supplied density and returns it as a one-character string. Code
//! points outside the Basic Multilingual Plane are assembled from their
//! UTF-16 surrogate pair.

use fuzz_core::{Density, FuzzError, Result, Source, Thunk};

const SURROGATE_OFFSET: u32 = 0x10000;
const HIGH_SURROGATE_START: u32 = 0xD800;
const LOW_SURROGATE_START: u32 = 0xDC00;
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Split a supplementary-plane code point into its UTF-16 surrogate pair.
///
/// Returns `None` for code points inside the BMP or past U+10FFFF.
pub fn surrogate_pair(code_point: u32) -> Option<(u16, u16)> {
    if !(SURROGATE_OFFSET..=MAX_CODE_POINT).contains(&code_point) {
        return None;
    }

    let offset = code_point - SURROGATE_OFFSET;
    let high = HIGH_SURROGATE_START + (offset >> 10);
    let low = LOW_SURROGATE_START + (offset & 0x3FF);
    Some((high as u16, low as u16))
}

/// Render a code point as a string.
pub fn code_point_to_string(code_point: u32) -> Result<String> {
    if code_point > 0xFFFF {
        let (high, low) =
            surrogate_pair(code_point).ok_or(FuzzError::InvalidCodePoint(code_point))?;
        return char::decode_utf16([high, low])
            .collect::<std::result::Result<String, _>>()
            .map_err(|_| FuzzError::InvalidCodePoint(code_point));
    }

    char::from_u32(code_point)
        .map(String::from)
        .ok_or(FuzzError::InvalidCodePoint(code_point))
}

fn sample_code_point<D: Density + ?Sized>(
    density: &D,
    first: u32,
    last: u32,
    src: &mut Source,
) -> Result<String> {
    let drawn = density
        .sample(i64::from(first).into(), (i64::from(last) + 1).into())
        .unwrap(src)?;

    let code_point = u32::try_from(drawn)
        .ok()
        .filter(|cp| (first..=last).contains(cp))
        .ok_or_else(|| FuzzError::density_out_of_range(drawn, i64::from(last) + 1))?;

    code_point_to_string(code_point)
}

/// A character with a code point in `first..=last`.
pub fn code_point<D: Density + 'static>(density: D, first: u32, last: u32) -> Thunk<String> {
    Thunk::new(move |src| sample_code_point(&density, first, last, src))
}

/// A character from the named block.
///
/// Fails with [`FuzzError::UnknownUnicodeBlock`] when the block table has
/// no entry for `name`.
pub fn block<D: Density + 'static>(density: D, name: &str) -> Result<Thunk<String>> {
    let block = unicode_blocks::lookup(name)
        .ok_or_else(|| FuzzError::UnknownUnicodeBlock(name.to_string()))?;
    Ok(code_point(density, block.first, block.last))
}

/// Like [`block`], but the lookup happens on every call.
fn deferred_block<D: Density + 'static>(density: D, name: &'static str) -> Thunk<String> {
    Thunk::new(move |src| {
        let block = unicode_blocks::lookup(name)
            .ok_or_else(|| FuzzError::UnknownUnicodeBlock(name.to_string()))?;
        sample_code_point(&density, block.first, block.last, src)
    })
}

macro_rules! named_blocks {
    ($($fn_name:ident => $block:literal,)*) => {
        $(
            #[doc = concat!("A character from the `", $block, "` block.")]
            pub fn $fn_name<D: Density + 'static>(density: D) -> Thunk<String> {
                deferred_block(density, $block)
            }
        )*

        /// Block names with a dedicated generator function.
        pub const NAMED_BLOCKS: &[&str] = &[$($block),*];
    };
}

named_blocks! {
    basic_latin => "Basic Latin",
    latin_1_supplement => "Latin-1 Supplement",
    latin_extended_a => "Latin Extended-A",
    greek_and_coptic => "Greek and Coptic",
    cyrillic => "Cyrillic",
    armenian => "Armenian",
    hebrew => "Hebrew",
    arabic => "Arabic",
    devanagari => "Devanagari",
    thai => "Thai",
    general_punctuation => "General Punctuation",
    currency_symbols => "Currency Symbols",
    arrows => "Arrows",
    mathematical_operators => "Mathematical Operators",
    box_drawing => "Box Drawing",
    dingbats => "Dingbats",
    hiragana => "Hiragana",
    katakana => "Katakana",
    cjk_unified_ideographs => "CJK Unified Ideographs",
    hangul_syllables => "Hangul Syllables",
    mathematical_alphanumeric_symbols => "Mathematical Alphanumeric Symbols",
    emoticons => "Emoticons",
    transport_and_map_symbols => "Transport and Map Symbols",
}
