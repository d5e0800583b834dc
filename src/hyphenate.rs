//! Syllable hyphenation built on the `hyphenation` crate's embedded
//! Knuth-Liang pattern dictionaries.

use anyhow::{Context, Result};
use hyphenation::{Hyphenator as _, Load, Standard};

use crate::config::Locale;

/// A span of a word. `break_after` marks a linguistically valid point at
/// which the line breaker may cut, rendering a visible hyphen.
///
/// Break opportunities used to be tracked with sentinel characters
/// spliced into the text; spans keep literal hyphens and break points
/// unambiguous even when the input itself contains the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub break_after: bool,
}

/// Locale-specific hyphenator; pure with respect to its input.
pub struct Hyphenator {
    dictionary: Standard,
}

impl Hyphenator {
    pub fn new(locale: Locale) -> Result<Self> {
        let language = locale.hyphenation_language();
        let dictionary = Standard::from_embedded(language)
            .with_context(|| format!("failed to load hyphenation dictionary for {language:?}"))?;
        Ok(Self { dictionary })
    }

    /// Cut a whitespace-free word into fragments at hyphenation points.
    ///
    /// Literal hyphens stay verbatim inside fragment text and are never
    /// break candidates; concatenating the fragments restores the word
    /// exactly. The final fragment always has `break_after == false`.
    pub fn fragments(&self, word: &str) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for piece in word.split_inclusive('-') {
            let (letters, literal_hyphen) = match piece.strip_suffix('-') {
                Some(head) => (head, true),
                None => (piece, false),
            };
            let mut syllables = self.syllables(letters);
            if literal_hyphen {
                match syllables.last_mut() {
                    Some(last) => last.text.push('-'),
                    None => syllables.push(Fragment {
                        text: "-".to_string(),
                        break_after: false,
                    }),
                }
            }
            fragments.extend(syllables);
        }
        fragments
    }

    fn syllables(&self, piece: &str) -> Vec<Fragment> {
        if piece.is_empty() {
            return Vec::new();
        }
        let hyphenated = self.dictionary.hyphenate(piece);
        let mut out = Vec::new();
        let mut prev = 0;
        for &cut in &hyphenated.breaks {
            out.push(Fragment {
                text: piece[prev..cut].to_string(),
                break_after: true,
            });
            prev = cut;
        }
        out.push(Fragment {
            text: piece[prev..].to_string(),
            break_after: false,
        });
        out
    }
}
