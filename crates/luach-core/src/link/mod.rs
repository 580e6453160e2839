//! Finding the day's PDF link on the landing page.
//!
//! Strategies are tried in order and the first one that yields an href wins:
//! the structural menu lookup, then a pattern scan over the raw text.

mod pattern;
mod resolve;
mod structural;

pub use pattern::pattern_link;
pub use resolve::{normalize_href, resolve_link, site_origin};
pub use structural::structural_link;

use std::fmt;

/// Which strategy produced a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Structural,
    Pattern,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Structural => write!(f, "structural"),
            Strategy::Pattern => write!(f, "pattern"),
        }
    }
}

/// Raw href as found on the page, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    pub href: String,
    pub strategy: Strategy,
}

const STRATEGIES: &[(Strategy, fn(&str) -> Option<String>)] = &[
    (Strategy::Structural, structural_link),
    (Strategy::Pattern, pattern_link),
];

/// Runs the strategies in order over the page markup.
pub fn find_link(html: &str) -> Option<ExtractedLink> {
    STRATEGIES.iter().find_map(|(strategy, extract)| {
        extract(html)
            .filter(|href| !normalize_href(href).is_empty())
            .map(|href| ExtractedLink {
                href,
                strategy: *strategy,
            })
    })
}
