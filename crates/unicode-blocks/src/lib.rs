//! Named Unicode block ranges.
//!
//! This crate is a static data asset: the block table lives in [`table`] and
//! is indexed by name once per process. Lookups use loose matching (case,
//! whitespace, `-` and `_` are ignored), so `"Hangul Syllables"`,
//! `"hangul_syllables"` and `"HANGULSYLLABLES"` all name the same block.
//!
//! ```rust
//! let block = unicode_blocks::lookup("Hangul Syllables").unwrap();
//! assert_eq!(block.first, 0xAC00);
//! assert_eq!(block.last, 0xD7AF);
//! ```

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use table::BLOCKS;

/// A contiguous, inclusive range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock {
    /// Block name as written in the Unicode Character Database
    pub name: &'static str,
    /// First code point in the block
    pub first: u32,
    /// Last code point in the block (inclusive)
    pub last: u32,
}

impl UnicodeBlock {
    /// Number of code points in the block.
    pub fn len(&self) -> u32 {
        self.last - self.first + 1
    }

    /// Blocks always contain at least one code point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the code point lies inside this block.
    pub fn contains(&self, code_point: u32) -> bool {
        (self.first..=self.last).contains(&code_point)
    }
}

fn loose_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn index() -> &'static HashMap<String, usize> {
    static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let map: HashMap<String, usize> = BLOCKS
            .iter()
            .enumerate()
            .map(|(idx, (name, _, _))| (loose_key(name), idx))
            .collect();
        tracing::debug!("Indexed {} unicode blocks", map.len());
        map
    })
}

/// Look up a block by name.
pub fn lookup(name: &str) -> Option<UnicodeBlock> {
    let idx = *index().get(&loose_key(name))?;
    let (name, first, last) = BLOCKS[idx];
    Some(UnicodeBlock { name, first, last })
}

/// Iterate over every block in code point order.
pub fn all() -> impl Iterator<Item = UnicodeBlock> {
    BLOCKS.iter().map(|&(name, first, last)| UnicodeBlock { name, first, last })
}

/// Find the block containing a code point.
pub fn block_of(code_point: u32) -> Option<UnicodeBlock> {
    let idx = BLOCKS
        .binary_search_by(|&(_, first, last)| {
            if last < code_point {
                std::cmp::Ordering::Less
            } else if first > code_point {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()?;
    let (name, first, last) = BLOCKS[idx];
    Some(UnicodeBlock { name, first, last })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_name() {
        let block = lookup("Basic Latin").unwrap();
        assert_eq!(block.first, 0x0000);
        assert_eq!(block.last, 0x007F);
        assert_eq!(block.len(), 128);
    }

    #[test]
    fn test_lookup_loose_name() {
        let exact = lookup("Hangul Syllables").unwrap();
        assert_eq!(lookup("hangul_syllables"), Some(exact));
        assert_eq!(lookup("HANGULSYLLABLES"), Some(exact));
        assert_eq!(lookup("Latin Extended A"), lookup("Latin Extended-A"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("Klingon"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_surrogates_are_absent() {
        assert_eq!(lookup("High Surrogates"), None);
        assert_eq!(lookup("Low Surrogates"), None);
        assert!(all().all(|b| b.last < 0xD800 || b.first > 0xDFFF));
    }

    #[test]
    fn test_table_is_sorted_and_disjoint() {
        for pair in BLOCKS.windows(2) {
            let (_, _, prev_last) = pair[0];
            let (_, next_first, next_last) = pair[1];
            assert!(prev_last < next_first);
            assert!(next_first <= next_last);
        }
    }

    #[test]
    fn test_block_of() {
        assert_eq!(block_of(0x41).map(|b| b.name), Some("Basic Latin"));
        assert_eq!(block_of(0x1F600).map(|b| b.name), Some("Emoticons"));
        assert!(block_of(0xD800).is_none());
    }
}
