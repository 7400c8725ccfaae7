//! Sentence splitting and step regrouping.
//!
//! Sites often publish a whole method as one paragraph. Each paragraph is
//! split into sentences, and a new step starts whenever a sentence opens
//! with a cooking verb ("Bake ...", "Then stir ..."). Sentences that don't
//! stay with the step before them, so "Bake for 20 minutes. It should be
//! golden." remains a single step.

const ACTION_VERBS: &[&str] = &[
    "add", "adjust", "bake", "beat", "blend", "boil", "braise", "break", "bring", "broil",
    "brush", "brown", "char", "chill", "chop", "combine", "cool", "cover", "crack", "drain",
    "drizzle", "fold", "fry", "garnish", "grate", "grease", "grill", "heat", "knead", "let",
    "marinate", "mash", "microwave", "mix", "peel", "place", "poach", "pour", "preheat",
    "press", "reduce", "roast", "sauté", "saute", "season", "sear", "serve", "set", "sift",
    "simmer", "slice", "spoon", "spread", "sprinkle", "stir", "stir-fry", "strain", "toss",
    "transfer", "turn", "warm", "whisk", "wipe", "wrap", "remove", "top", "zest", "ladle",
    "shred", "pull",
];

const LEADING_FILLERS: &[&str] = &["then", "next", "now", "and"];

/// Split text into sentences at `.`, `!` or `?` followed by whitespace.
///
/// The punctuation stays with its sentence; a trailing fragment without
/// punctuation is kept as the last sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let at_boundary = matches!(c, '.' | '!' | '?')
            && chars.peek().is_some_and(|(_, next)| next.is_whitespace());
        if !at_boundary {
            continue;
        }

        let sentence = text[last..i + c.len_utf8()].trim();
        if !sentence.is_empty() {
            parts.push(sentence);
        }
        while chars.next_if(|(_, next)| next.is_whitespace()).is_some() {}
        last = chars.peek().map_or(text.len(), |(j, _)| *j);
    }

    let tail = text[last..].trim();
    if !tail.is_empty() {
        parts.push(tail);
    }
    parts
}

/// Whether a sentence opens a new step: its first word is an action verb,
/// or a filler ("then", "next", ...) followed by one.
pub fn starts_new_step(sentence: &str) -> bool {
    let cleaned = sentence.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’')
    });
    let mut words = cleaned.split_whitespace().map(bare_word);
    let first = words.next().unwrap_or_default();
    let second = words.next().unwrap_or_default();

    is_action_verb(&first) || (LEADING_FILLERS.contains(&first.as_str()) && is_action_verb(&second))
}

fn is_action_verb(word: &str) -> bool {
    ACTION_VERBS.contains(&word)
}

/// Lowercased word with leading and trailing non-letters removed.
fn bare_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_lowercase()
}

/// Regroup one paragraph's sentences into steps.
pub fn regroup<'a>(sentences: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut steps = Vec::new();
    let mut bucket: Vec<&str> = Vec::new();

    for sentence in sentences {
        if starts_new_step(sentence) && !bucket.is_empty() {
            steps.push(bucket.join(" "));
            bucket.clear();
        }
        bucket.push(sentence);
    }
    if !bucket.is_empty() {
        steps.push(bucket.join(" "));
    }

    steps.retain(|s| !s.trim().is_empty());
    steps
}

/// Split and regroup each paragraph independently, keeping paragraph order.
pub fn split_into_steps<S: AsRef<str>>(paragraphs: &[S]) -> Vec<String> {
    paragraphs
        .iter()
        .flat_map(|p| regroup(split_sentences(p.as_ref())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Preheat oven to 400°F. Bake for 20 minutes. Let cool."),
            vec!["Preheat oven to 400°F.", "Bake for 20 minutes.", "Let cool."]
        );
    }

    #[test]
    fn test_split_keeps_trailing_fragment() {
        assert_eq!(
            split_sentences("Mix well!  Serve with rice"),
            vec!["Mix well!", "Serve with rice"]
        );
    }

    #[test]
    fn test_split_ignores_inner_punctuation() {
        assert_eq!(
            split_sentences("Add 1.5 cups of stock... then wait"),
            vec!["Add 1.5 cups of stock...", "then wait"]
        );
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_starts_new_step() {
        assert!(starts_new_step("Preheat the oven."));
        assert!(starts_new_step("\"Stir, then serve.\""));
        assert!(starts_new_step("Then whisk the eggs."));
        assert!(starts_new_step("Sauté the onions."));
        assert!(!starts_new_step("Then it thickens."));
        assert!(!starts_new_step("The sauce will thicken."));
        assert!(!starts_new_step(""));
    }

    #[test]
    fn test_regroup_splits_at_verbs() {
        let steps = regroup(split_sentences(
            "Preheat oven to 400°F. Bake for 20 minutes. Let cool.",
        ));
        assert_eq!(
            steps,
            vec!["Preheat oven to 400°F.", "Bake for 20 minutes.", "Let cool."]
        );
    }

    #[test]
    fn test_regroup_keeps_result_clauses() {
        let steps = regroup(split_sentences(
            "Simmer for 10 minutes. The sauce will thicken. Next add the cream.",
        ));
        assert_eq!(
            steps,
            vec![
                "Simmer for 10 minutes. The sauce will thicken.",
                "Next add the cream."
            ]
        );
    }

    #[test]
    fn test_leading_non_verb_sentences_form_first_step() {
        let steps = regroup(split_sentences(
            "While the pasta cooks, prepare the sauce. It takes a while. Stir often.",
        ));
        assert_eq!(
            steps,
            vec![
                "While the pasta cooks, prepare the sauce. It takes a while.",
                "Stir often."
            ]
        );
    }

    #[test]
    fn test_paragraphs_are_independent() {
        let steps = split_into_steps(&["The oven should be hot.", "It will smell great."]);
        assert_eq!(steps, vec!["The oven should be hot.", "It will smell great."]);
    }
}
