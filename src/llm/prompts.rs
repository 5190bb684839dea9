use chrono::Utc;

/// Prompt asking for a pipe-delimited list of trending product ideas.
pub fn trending_products_prompt(count: usize) -> String {
    let month = Utc::now().format("%B %Y");
    format!(
        "Give exactly {count} completely different trending Amazon products right now ({month}). \
Mix categories: gadgets, beauty, kitchen, cozy, fitness.\n\
NEVER number them. NEVER use dashes or bullets at the start.\n\
Format ONLY:\n\
Product Name | Amazon Search Term (exact, 4-8 words)\n\
Example:\n\
Cordless Water Flosser | cordless water flosser"
    )
}

/// Prompt asking for the full HTML review body for one product.
pub fn review_prompt(title: &str, detail_url: &str) -> String {
    format!(
        "Write a fun, honest 800-1200 word review for \"{title}\" as @snapreviews_.\n\
Sections with <h2>: Why It's Trending, Pros & Cons (bullets), Features, Who It's For, Verdict.\n\
End with a big blue button link to {detail_url}.\n\
NEVER number anything."
    )
}
