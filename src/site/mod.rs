pub mod homepage;
pub mod render;
pub mod slug;

pub use homepage::insert_cards;
pub use render::{fallback_review, page_filename, render_review_page, PageContext};
pub use slug::slugify;
