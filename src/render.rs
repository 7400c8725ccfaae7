//! Text and HTML output for prepared recipes.

use html_escape::{encode_double_quoted_attribute, encode_safe};

use crate::amount::{format_amount, scale};
use crate::model::{InstructionStep, ParsedIngredient, PreparedRecipe};

/// Split a step into plain and annotated segments, in order.
fn segments(step: &InstructionStep) -> Vec<(&str, Option<&str>)> {
    let mut out = Vec::with_capacity(step.annotations.len() * 2 + 1);
    let mut pos = 0;
    for annotation in &step.annotations {
        if annotation.start > pos {
            out.push((&step.text[pos..annotation.start], None));
        }
        out.push((
            &step.text[annotation.start..annotation.end],
            Some(annotation.ingredient_key.as_str()),
        ));
        pos = annotation.end;
    }
    if pos < step.text.len() {
        out.push((&step.text[pos..], None));
    }
    out
}

/// HTML for one step, each mention wrapped in a clickable `ing-ref` span.
/// Plain and annotated text are escaped the same way.
pub fn render_step_html(step: &InstructionStep) -> String {
    segments(step)
        .into_iter()
        .map(|(text, key)| match key {
            Some(key) => format!(
                r#"<span class="ing-ref" data-key="{}" role="button" tabindex="0">{}</span>"#,
                encode_double_quoted_attribute(key),
                encode_safe(text)
            ),
            None => encode_safe(text).into_owned(),
        })
        .collect()
}

/// Plain text for one step with mentions in square brackets.
pub fn render_step_marked(step: &InstructionStep) -> String {
    segments(step)
        .into_iter()
        .map(|(text, key)| match key {
            Some(_) => format!("[{text}]"),
            None => text.to_string(),
        })
        .collect()
}

/// "1 1/2 cups basil", scaled by `factor`. Falls back to the raw line.
pub fn ingredient_line(ingredient: &ParsedIngredient, factor: f64) -> String {
    let amount = scale(ingredient.quantity, factor)
        .map(format_amount)
        .unwrap_or_default();

    let line = [amount.as_str(), ingredient.unit.as_str(), ingredient.name.as_str()]
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");

    if line.is_empty() {
        ingredient.raw.clone()
    } else {
        line
    }
}

/// "basil — 3 cups", the detail shown for a clicked mention. The amount is
/// a dash when the line had none.
pub fn ingredient_detail(ingredient: &ParsedIngredient, factor: f64) -> String {
    let amount = scale(ingredient.quantity, factor)
        .map(format_amount)
        .unwrap_or_else(|| "—".to_string());
    format!(
        "{} — {} {}",
        ingredient.display_name(),
        amount,
        ingredient.unit
    )
    .trim()
    .to_string()
}

/// A shareable plain-text copy of the recipe at the given servings.
pub fn export_recipe_text(
    recipe: &PreparedRecipe,
    servings: u32,
    source_url: Option<&str>,
) -> String {
    export_recipe_text_with(recipe, servings, source_url, |step| step.text.clone())
}

/// Like [`export_recipe_text`] with each step rendered by `render_step`.
pub fn export_recipe_text_with<F>(
    recipe: &PreparedRecipe,
    servings: u32,
    source_url: Option<&str>,
    render_step: F,
) -> String
where
    F: Fn(&InstructionStep) -> String,
{
    let factor = recipe.scale_factor(servings);

    let ingredient_lines = recipe
        .ingredients
        .iter()
        .map(|ing| format!("• {}", ingredient_line(ing, factor)))
        .collect::<Vec<_>>()
        .join("\n");

    let mut note = format!(
        "{}\nServings: {}\n\nINGREDIENTS\n{}\n\n",
        recipe.name, servings, ingredient_lines
    );

    if !recipe.steps.is_empty() {
        let step_lines = recipe
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, render_step(step)))
            .collect::<Vec<_>>()
            .join("\n");
        note.push_str(&format!("STEPS\n{step_lines}\n"));
    }

    if let Some(url) = source_url.filter(|url| !url.is_empty()) {
        note.push_str(&format!("\nSource: {url}"));
    }
    note
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Annotator;
    use crate::ingredients::{parse_ingredient, parse_ingredients};

    #[test]
    fn test_render_step_html_escapes_everything() {
        let ingredients = parse_ingredients(&["1 cup M&M candies"]);
        let step = Annotator::new(&ingredients).annotate("Fold in M&M candies <gently>.");
        let html = render_step_html(&step);

        assert!(html.starts_with("Fold in "));
        assert!(html.contains(r#"data-key="m m candies""#));
        assert!(html.contains(">M&amp;M candies</span>"));
        assert!(html.ends_with(" &lt;gently&gt;."));
    }

    #[test]
    fn test_render_without_annotations() {
        let step = Annotator::new(&[]).annotate("Rest for 5 minutes.");
        assert_eq!(render_step_html(&step), "Rest for 5 minutes.");
        assert_eq!(render_step_marked(&step), "Rest for 5 minutes.");
    }

    #[test]
    fn test_render_step_marked() {
        let ingredients = parse_ingredients(&["2 cups flour", "1 tsp salt"]);
        let step = Annotator::new(&ingredients).annotate("Whisk flour and salt.");
        assert_eq!(render_step_marked(&step), "Whisk [flour] and [salt].");
    }

    #[test]
    fn test_ingredient_line_scaling() {
        let ing = parse_ingredient("1 1/2 cups chopped fresh basil leaves");
        assert_eq!(ingredient_line(&ing, 1.0), "1 1/2 cups chopped fresh basil leaves");
        assert_eq!(ingredient_line(&ing, 2.0), "3 cups chopped fresh basil leaves");

        let salt = parse_ingredient("Salt to taste");
        assert_eq!(ingredient_line(&salt, 2.0), "Salt to taste");
    }

    #[test]
    fn test_export_recipe_text() {
        let ingredients = parse_ingredients(&["1 cup rice", "Salt"]);
        let recipe = PreparedRecipe {
            name: "Rice".to_string(),
            base_servings: 2,
            steps: crate::annotate::annotate_steps(&["Rinse the rice.", "Salt the water."], &ingredients),
            ingredients,
        };

        assert_eq!(
            export_recipe_text(&recipe, 4, Some("https://example.com/rice")),
            "Rice\nServings: 4\n\nINGREDIENTS\n• 2 cup rice\n• Salt\n\n\
             STEPS\n1. Rinse the rice.\n2. Salt the water.\n\nSource: https://example.com/rice"
        );

        let marked = export_recipe_text_with(&recipe, 2, None, render_step_marked);
        assert!(marked.ends_with("STEPS\n1. Rinse the [rice].\n2. [Salt] the water.\n"));
    }

    #[test]
    fn test_ingredient_detail() {
        let ing = parse_ingredient("3/4 cup sugar");
        assert_eq!(ingredient_detail(&ing, 2.0), "sugar — 1 1/2 cup");

        let eggs = parse_ingredient("2 eggs");
        assert_eq!(ingredient_detail(&eggs, 0.5), "eggs — 1");

        let salt = parse_ingredient("Salt");
        assert_eq!(ingredient_detail(&salt, 1.0), "Salt — —");
    }
}
