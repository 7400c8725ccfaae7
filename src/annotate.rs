//! Locate ingredient mentions inside instruction steps.
//!
//! Every variant of every ingredient is searched for in each step. Matching
//! is case-insensitive, treats any run of punctuation or whitespace inside a
//! variant as interchangeable ("green onion" finds "green-onion"), and requires
//! that a match is not glued to neighbouring letters, digits or `_`. A plural
//! "s"/"es" directly after a match is absorbed into it, so "onion" finds
//! "onions," but never the inside of "onionskin".
//!
//! Overlapping hits are resolved longest first, then earliest first, so a
//! mention of "green onion" is never split into a bare "onion".

use log::debug;

use crate::model::{Annotation, InstructionStep, ParsedIngredient};

/// A variant prepared for searching.
struct Candidate<'a> {
    ingredient: &'a ParsedIngredient,
    variant_key: &'a str,
    /// Lowercased ASCII word runs of the variant text
    tokens: Vec<String>,
    chars: usize,
}

struct Hit {
    start: usize,
    end: usize,
    chars: usize,
    candidate: usize,
}

/// Annotates step texts against one recipe's ingredients.
pub struct Annotator<'a> {
    candidates: Vec<Candidate<'a>>,
}

impl<'a> Annotator<'a> {
    pub fn new(ingredients: &'a [ParsedIngredient]) -> Self {
        let mut candidates: Vec<Candidate<'a>> = ingredients
            .iter()
            .flat_map(|ingredient| {
                ingredient.variants.iter().filter_map(move |variant| {
                    let tokens = word_tokens(&variant.text);
                    if variant.key.is_empty() || tokens.is_empty() {
                        return None;
                    }
                    Some(Candidate {
                        ingredient,
                        variant_key: &variant.key,
                        tokens,
                        chars: variant.text.chars().count(),
                    })
                })
            })
            .collect();
        candidates.sort_by(|a, b| b.chars.cmp(&a.chars));

        Annotator { candidates }
    }

    /// Annotate one step. Pure: the same text always yields the same
    /// annotations.
    pub fn annotate(&self, text: &str) -> InstructionStep {
        let mut hits = Vec::new();
        for (index, candidate) in self.candidates.iter().enumerate() {
            for (start, end) in find_occurrences(text, &candidate.tokens) {
                hits.push(Hit {
                    start,
                    end,
                    chars: text[start..end].chars().count(),
                    candidate: index,
                });
            }
        }

        hits.sort_by(|a, b| b.chars.cmp(&a.chars).then(a.start.cmp(&b.start)));

        let mut claimed = vec![false; text.len()];
        let mut accepted: Vec<&Hit> = Vec::new();
        for hit in &hits {
            if claimed[hit.start..hit.end].iter().any(|&c| c) {
                continue;
            }
            claimed[hit.start..hit.end].fill(true);
            accepted.push(hit);
        }
        accepted.sort_by_key(|hit| hit.start);

        let annotations = accepted
            .into_iter()
            .map(|hit| {
                let candidate = &self.candidates[hit.candidate];
                Annotation {
                    start: hit.start,
                    end: hit.end,
                    matched_text: text[hit.start..hit.end].to_string(),
                    ingredient_key: candidate.ingredient.primary_key.clone(),
                    variant_key: candidate.variant_key.to_string(),
                }
            })
            .collect();

        InstructionStep {
            text: text.to_string(),
            annotations,
        }
    }
}

/// Annotate each step text against the ingredients, preserving order.
pub fn annotate_steps<S: AsRef<str>>(
    steps: &[S],
    ingredients: &[ParsedIngredient],
) -> Vec<InstructionStep> {
    let annotator = Annotator::new(ingredients);
    let annotated: Vec<InstructionStep> = steps
        .iter()
        .map(|step| annotator.annotate(step.as_ref()))
        .collect();

    debug!(
        "Annotated {} steps with {} ingredient mentions",
        annotated.len(),
        annotated.iter().map(|s| s.annotations.len()).sum::<usize>()
    );
    annotated
}

const PLURAL_SUFFIXES: &[&[u8]] = &[b"s", b"es"];

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split a phrase into its ASCII word runs; everything else separates.
fn word_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii() && is_word_byte(c as u8)))
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Byte ranges of every boundary-delimited occurrence of `tokens` in `text`.
///
/// Tokens are ASCII, so every range starts and ends on a char boundary.
fn find_occurrences(text: &str, tokens: &[String]) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let boundary_at = |i: usize| i >= bytes.len() || !is_word_byte(bytes[i]);

    (0..bytes.len())
        .filter(|&start| start == 0 || !is_word_byte(bytes[start - 1]))
        .filter_map(|start| {
            let end = match_tokens(bytes, start, tokens)?;
            if boundary_at(end) {
                return Some((start, end));
            }
            PLURAL_SUFFIXES.iter().find_map(|suffix| {
                let plural_end = end + suffix.len();
                let is_plural = plural_end <= bytes.len()
                    && bytes[end..plural_end].eq_ignore_ascii_case(suffix)
                    && boundary_at(plural_end);
                is_plural.then_some((start, plural_end))
            })
        })
        .collect()
}

/// Match the tokens at `start`, allowing one or more non-word bytes between
/// consecutive tokens. Returns the end offset of the last token.
fn match_tokens(bytes: &[u8], start: usize, tokens: &[String]) -> Option<usize> {
    let mut pos = start;
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let separator_start = pos;
            while pos < bytes.len() && !is_word_byte(bytes[pos]) {
                pos += 1;
            }
            if pos == separator_start {
                return None;
            }
        }
        let end = pos + token.len();
        if end > bytes.len() || !bytes[pos..end].eq_ignore_ascii_case(token.as_bytes()) {
            return None;
        }
        pos = end;
    }
    Some(pos)
}
