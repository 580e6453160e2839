//! Link discovery through the site's download menu.

use scraper::{Html, Selector};

/// Menu container holding the PDF links.
const MENU_SELECTOR: &str = "div.topnav.download_pdf";
/// Link list nested inside the menu.
const LIST_SELECTOR: &str = "div#myLinks2";
/// Visible text marking the current day's issue.
const TODAY_MARKER: &str = "Today";

/// Finds the `href` of the first anchor in the download menu whose text
/// contains "Today". `None` if any level of the menu is missing.
pub fn structural_link(html: &str) -> Option<String> {
    let menu_sel = Selector::parse(MENU_SELECTOR).ok()?;
    let list_sel = Selector::parse(LIST_SELECTOR).ok()?;
    let anchor_sel = Selector::parse("a").ok()?;

    let doc = Html::parse_document(html);
    let menu = doc.select(&menu_sel).next()?;
    let list = menu.select(&list_sel).next()?;
    let anchor = list
        .select(&anchor_sel)
        .find(|a| a.text().collect::<String>().contains(TODAY_MARKER))?;

    anchor
        .value()
        .attr("href")
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
}
