mod segment;
mod tree;

use log::debug;

pub use self::segment::{regroup, split_into_steps, split_sentences, starts_new_step};
pub use self::tree::InstructionNode;

/// Flatten an instruction tree and split it into discrete step texts.
pub fn segment_instructions(tree: &InstructionNode) -> Vec<String> {
    let paragraphs = tree.flatten();
    let steps = split_into_steps(&paragraphs);
    debug!(
        "Segmented {} instruction paragraphs into {} steps",
        paragraphs.len(),
        steps.len()
    );
    steps
}

/// Like [`segment_instructions`], but falls back to `fallback_lines` (step
/// texts scraped from the rendered page) when the tree yields nothing.
pub fn segment_with_fallback<S: AsRef<str>>(
    tree: &InstructionNode,
    fallback_lines: &[S],
) -> Vec<String> {
    let paragraphs = tree.flatten();
    if !paragraphs.is_empty() {
        return split_into_steps(&paragraphs);
    }

    let fallback: Vec<String> = fallback_lines
        .iter()
        .map(|line| line.as_ref().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();
    debug!(
        "No structured instructions, using {} rendered list items",
        fallback.len()
    );
    split_into_steps(&fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_run_on_paragraph() {
        let tree = InstructionNode::from(json!([
            {"@type": "HowToStep", "text": "Heat the oil. Add the onion and garlic. Cook until soft."}
        ]));
        assert_eq!(
            segment_instructions(&tree),
            vec!["Heat the oil.", "Add the onion and garlic. Cook until soft."]
        );
    }

    #[test]
    fn test_fallback_only_when_tree_is_empty() {
        let empty = InstructionNode::Unknown;
        let fallback = ["  Boil   water. ", "Add pasta."];
        assert_eq!(
            segment_with_fallback(&empty, &fallback),
            vec!["Boil water.", "Add pasta."]
        );

        let tree = InstructionNode::from("Stir.");
        assert_eq!(segment_with_fallback(&tree, &fallback), vec!["Stir."]);
    }

    #[test]
    fn test_no_steps_is_empty_not_error() {
        let none: [&str; 0] = [];
        assert!(segment_with_fallback(&InstructionNode::Unknown, &none).is_empty());
    }
}
