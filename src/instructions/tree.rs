use serde::Deserialize;
use serde_json::{Map, Value};

/// Fields probed for a step's own text, in order of preference.
const TEXT_FIELDS: &[&str] = &["text", "name", "@text"];

/// The shapes `recipeInstructions` comes in.
///
/// Built from any JSON value without failing; shapes that carry no usable
/// text end up as [`InstructionNode::Unknown`] and contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum InstructionNode {
    Text(String),
    List(Vec<InstructionNode>),
    /// A `HowToStep`, or any object that is not a section
    Step {
        text: Option<String>,
        items: Vec<InstructionNode>,
    },
    /// A `HowToSection`; its name is a heading, not an instruction
    Section {
        name: Option<String>,
        items: Vec<InstructionNode>,
    },
    #[default]
    Unknown,
}

impl From<Value> for InstructionNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => InstructionNode::Text(text),
            Value::Array(values) => {
                InstructionNode::List(values.into_iter().map(InstructionNode::from).collect())
            }
            Value::Object(map) => from_object(map),
            _ => InstructionNode::Unknown,
        }
    }
}

impl From<&str> for InstructionNode {
    fn from(text: &str) -> Self {
        InstructionNode::Text(text.to_string())
    }
}

fn from_object(mut map: Map<String, Value>) -> InstructionNode {
    let items = match map.remove("itemListElement") {
        Some(Value::Array(values)) => values.into_iter().map(InstructionNode::from).collect(),
        Some(value @ Value::Object(_)) => vec![InstructionNode::from(value)],
        _ => Vec::new(),
    };

    if has_type(&map, "HowToSection") && !items.is_empty() {
        return InstructionNode::Section {
            name: string_field(&map, "name"),
            items,
        };
    }

    let text = TEXT_FIELDS
        .iter()
        .find_map(|field| string_field(&map, field));
    InstructionNode::Step { text, items }
}

fn has_type(map: &Map<String, Value>, expected: &str) -> bool {
    match map.get("@type") {
        Some(Value::String(t)) => t == expected,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(expected)),
        _ => false,
    }
}

fn string_field(map: &Map<String, Value>, field: &str) -> Option<String> {
    map.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

impl InstructionNode {
    /// Flatten the tree into whitespace-normalised instruction texts, one
    /// per leaf, in document order.
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<String>) {
        match self {
            InstructionNode::Text(text) => push_normalized(out, text),
            InstructionNode::List(nodes) => nodes.iter().for_each(|n| n.collect_into(out)),
            InstructionNode::Step { text, items } => {
                if let Some(text) = text {
                    push_normalized(out, text);
                }
                items.iter().for_each(|n| n.collect_into(out));
            }
            InstructionNode::Section { name, items } => {
                if items.is_empty() {
                    if let Some(name) = name {
                        push_normalized(out, name);
                    }
                }
                items.iter().for_each(|n| n.collect_into(out));
            }
            InstructionNode::Unknown => {}
        }
    }
}

fn push_normalized(out: &mut Vec<String>, text: &str) {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !normalized.is_empty() {
        out.push(normalized);
    }
}
