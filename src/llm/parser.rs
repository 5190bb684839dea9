use crate::error::{Error, Result};
use crate::models::ProductIdea;

/// Parses "Name | search term" lines out of a model response, skipping
/// numbered or bulleted lines the model was told not to produce anyway.
pub fn parse_product_ideas(raw: &str, want: usize) -> Result<Vec<ProductIdea>> {
    let mut ideas = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(|c: char| c.is_ascii_digit())
            || line.starts_with('-')
            || line.starts_with('•')
            || line.starts_with('*')
        {
            continue;
        }
        let Some((name, term)) = line.split_once('|') else {
            continue;
        };
        let name = name.trim();
        let term = term.trim();
        if name.is_empty() || term.is_empty() {
            continue;
        }
        ideas.push(ProductIdea {
            name: name.to_string(),
            search_term: term.to_string(),
        });
        if ideas.len() >= want {
            break;
        }
    }

    if ideas.is_empty() {
        return Err(Error::ParseError(format!(
            "No product ideas found in response: {}",
            raw
        )));
    }

    Ok(ideas)
}
