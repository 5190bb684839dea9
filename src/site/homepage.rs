use crate::models::ReviewPage;

const GRID_MARKER: &str = r#"id="reviews""#;

/// Splices review cards into the homepage just inside the reviews grid, so
/// the freshest batch sits on top. Returns `None` when the grid div is
/// missing, in which case the caller skips the update.
pub fn insert_cards(index_html: &str, pages: &[ReviewPage]) -> Option<String> {
    let marker = index_html.find(GRID_MARKER)?;
    let tag_end = marker + index_html[marker..].find('>')? + 1;

    let cards: String = pages.iter().map(render_card).collect();

    let mut out = String::with_capacity(index_html.len() + cards.len());
    out.push_str(&index_html[..tag_end]);
    out.push_str(&cards);
    out.push_str(&index_html[tag_end..]);
    Some(out)
}

fn render_card(page: &ReviewPage) -> String {
    let title = html_escape::encode_text(&page.title);
    let alt = html_escape::encode_double_quoted_attribute(&page.title);
    let img = html_escape::encode_double_quoted_attribute(&page.homepage_image);
    let href = html_escape::encode_double_quoted_attribute(&page.filename);

    format!(
        r#"
<div class="review-card">
  <img src="{img}" alt="{alt}" style="width:100%;height:400px;object-fit:cover;border-radius:16px;" />
  <h2>{title}</h2>
  <p>Honest review of this viral Amazon find</p>
  <a href="reviews/{href}" class="btn">Read Full Review</a>
</div>
"#,
        img = img,
        alt = alt,
        title = title,
        href = href,
    )
}
