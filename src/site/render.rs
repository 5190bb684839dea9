use chrono::NaiveDate;

use crate::site::slug::slugify;

/// Everything a review page needs. `body_html` is trusted markup from the
/// copy generator; title and image paths are escaped here.
pub struct PageContext<'a> {
    pub title: &'a str,
    pub image_src: &'a str,
    pub detail_url: &'a str,
    pub body_html: &'a str,
    pub published: NaiveDate,
}

pub fn render_review_page(ctx: &PageContext) -> String {
    let title = html_escape::encode_text(ctx.title);
    let alt = html_escape::encode_double_quoted_attribute(ctx.title);
    let image_src = html_escape::encode_double_quoted_attribute(ctx.image_src);
    let detail_url = html_escape::encode_double_quoted_attribute(ctx.detail_url);
    let year = ctx.published.format("%Y");

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{title} Review {year} – SnapReviews</title>
  <link rel="stylesheet" href="../assets/style.css" />
</head>
<body>
  <div class="container">
    <header>
      <h1>{title} Review {year}</h1>
      <p>Published {published}</p>
    </header>
    <main>
      <img src="{image_src}" alt="{alt}" style="width:100%;max-width:800px;border-radius:16px;margin:30px 0;box-shadow:0 8px 30px rgba(0,0,0,0.15);" />
      {body}
      <p><a href="{detail_url}" class="btn" rel="nofollow">Check Price on Amazon →</a></p>
    </main>
    <footer>
      <p>Affiliate link – may earn commission</p>
    </footer>
  </div>
</body>
</html>
"#,
        title = title,
        year = year,
        published = ctx.published,
        image_src = image_src,
        alt = alt,
        body = ctx.body_html,
        detail_url = detail_url,
    )
}

/// Canned five-section review used when the copy generator fails.
pub fn fallback_review(detail_url: &str) -> String {
    let detail_url = html_escape::encode_double_quoted_attribute(detail_url);
    format!(
        "<h2>Why It's Trending</h2><p>A trending find for shoppers.</p>\
         <h2>Pros & Cons</h2><ul><li>Pro: Great value</li><li>Con: Limited stock</li></ul>\
         <h2>Features</h2><p>Basic features described.</p>\
         <h2>Who It's For</h2><p>Anyone who wants convenience.</p>\
         <h2>Verdict</h2><p>Solid pick for the money.</p>\
         <p><a href=\"{}\" class=\"btn\" rel=\"nofollow\">Check Price on Amazon →</a></p>",
        detail_url
    )
}

/// Filename for a review page: slug of the resolved title, else of the idea
/// name, capped at 80 characters before the extension.
pub fn page_filename(title: &str, idea_name: &str) -> String {
    let mut base = slugify(title, 80);
    if base.is_empty() {
        base = slugify(idea_name, 80);
    }
    if base.is_empty() {
        base = "review".to_string();
    }
    format!("{}.html", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>() -> PageContext<'a> {
        PageContext {
            title: "Fancy Flosser 3000",
            image_src: "images/flosser.jpg",
            detail_url: "https://www.amazon.com/dp/B0TEST?tag=mytag-20",
            body_html: "<h2>Why It's Trending</h2><p>Everyone loves it.</p>",
            published: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        }
    }

    #[test]
    fn page_contains_title_image_and_cta() {
        let html = render_review_page(&ctx());
        assert!(html.contains("<title>Fancy Flosser 3000 Review 2025 – SnapReviews</title>"));
        assert!(html.contains("<h1>Fancy Flosser 3000 Review 2025</h1>"));
        assert!(html.contains("Published 2025-12-01"));
        assert!(html.contains(r#"<img src="images/flosser.jpg""#));
        assert!(html.contains("<h2>Why It's Trending</h2>"));
        assert!(html.contains(r#"href="https://www.amazon.com/dp/B0TEST?tag=mytag-20" class="btn" rel="nofollow""#));
    }

    #[test]
    fn title_is_escaped_body_is_not() {
        let page = PageContext {
            title: "Mugs & <Cups>",
            body_html: "<h2>Verdict</h2>",
            ..ctx()
        };
        let html = render_review_page(&page);
        assert!(html.contains("<h1>Mugs &amp; &lt;Cups&gt; Review 2025</h1>"));
        assert!(html.contains(r#"alt="Mugs &amp; &lt;Cups&gt;""#));
        assert!(html.contains("<h2>Verdict</h2>"));
    }

    #[test]
    fn fallback_review_has_all_sections() {
        let body = fallback_review("https://www.amazon.com/s?k=mug&tag=t-20");
        for section in [
            "Why It's Trending",
            "Pros & Cons",
            "Features",
            "Who It's For",
            "Verdict",
        ] {
            assert!(body.contains(section), "missing section {}", section);
        }
        assert!(body.contains(r#"href="https://www.amazon.com/s?k=mug&amp;tag=t-20""#));
    }

    #[test]
    fn filename_prefers_title_then_name() {
        assert_eq!(
            page_filename("Fancy Flosser 3000", "Cordless Water Flosser"),
            "fancy-flosser-3000.html"
        );
        assert_eq!(
            page_filename("!!!", "Cordless Water Flosser"),
            "cordless-water-flosser.html"
        );
        assert_eq!(page_filename("!!!", "???"), "review.html");
    }
}
