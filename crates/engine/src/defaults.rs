//! Built-in pages shown when the host supplies no page data.

use pagenav_types::PageRecord;

/// Declared default page of the built-in tree.
pub const FALLBACK_DEFAULT_ID: &str = "hpage";

/// The built-in page list: a homepage followed by a news page.
pub fn fallback_records() -> Vec<PageRecord> {
    vec![
        PageRecord::new(FALLBACK_DEFAULT_ID, "https://jeremyepstein.com", "homepage"),
        PageRecord::new("newspage", "https://nytimes.com", "the times"),
    ]
}
