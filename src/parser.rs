use once_cell::sync::Lazy;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::data_models::{
    Appeal, AppealStatus, Decision, PER_PAGE, Paginated, Pagination,
};

/// Structural markers the portal's listing pages are assumed to carry.
/// Everything else in the markup is ignored.
mod markers {
    /// Result rows live in one designated table body.
    pub const RESULT_ROWS: &str = "#myTable tbody tr";
    pub const CELLS: &str = "td";
    pub const ANCHOR: &str = "a";
    /// Rendered 1-based "current page" marker.
    pub const PAGER_CURRENT: &str = "li.pager-current";
    /// Link whose href carries the 0-based index of the last page.
    pub const PAGER_LAST_LINK: &str = "li.pager-last a";
    pub const PAGER_NEXT: &str = "li.pager-next";
    pub const PAGER_PREV: &str = "li.pager-previous";
    /// Numbered pager items, current page included; fallback source for the
    /// page count when the last-page link is not rendered.
    pub const PAGER_NUMBERED: &str = "li.pager-item, li.pager-current";
}

struct Selectors {
    rows: Selector,
    cells: Selector,
    anchor: Selector,
    pager_current: Selector,
    pager_last_link: Selector,
    pager_next: Selector,
    pager_prev: Selector,
    pager_numbered: Selector,
}

static SELECTORS: Lazy<Selectors> = Lazy::new(|| Selectors {
    rows: Selector::parse(markers::RESULT_ROWS).unwrap(),
    cells: Selector::parse(markers::CELLS).unwrap(),
    anchor: Selector::parse(markers::ANCHOR).unwrap(),
    pager_current: Selector::parse(markers::PAGER_CURRENT).unwrap(),
    pager_last_link: Selector::parse(markers::PAGER_LAST_LINK).unwrap(),
    pager_next: Selector::parse(markers::PAGER_NEXT).unwrap(),
    pager_prev: Selector::parse(markers::PAGER_PREV).unwrap(),
    pager_numbered: Selector::parse(markers::PAGER_NUMBERED).unwrap(),
});

/// One `<td>`: its trimmed text plus the target of the first anchor, if any.
pub(crate) struct Cell {
    text: String,
    href: Option<String>,
}

impl Cell {
    fn text(&self) -> String {
        self.text.clone()
    }

    /// Anchor target, or `""` when the cell carries no link. A missing link
    /// is data, not an error.
    fn href(&self) -> String {
        self.href.clone().unwrap_or_default()
    }
}

/// A domain record readable off one table row by cell position.
pub(crate) trait TableRecord: Sized {
    /// Number of data cells a row must have to yield a record. Rows below
    /// this arity are dropped whole; no partial record is ever built.
    const ARITY: usize;

    /// Build the record from a row's cells. Only called with
    /// `cells.len() >= ARITY`.
    fn from_cells(cells: &[Cell]) -> Self;
}

impl TableRecord for Appeal {
    const ARITY: usize = 10;

    fn from_cells(cells: &[Cell]) -> Self {
        Appeal {
            registration_number: cells[0].text(),
            entry_date: cells[1].text(),
            exit_number: cells[2].text(),
            challenger: cells[3].text(),
            contracting_authority: cells[4].text(),
            complaint_object: cells[5].text(),
            procedure_number: final_path_segment(&cells[6].href()).to_string(),
            procedure_type: cells[7].text(),
            procurement_object: cells[8].text(),
            status: AppealStatus::from_label(&cells[9].text),
        }
    }
}

impl TableRecord for Decision {
    const ARITY: usize = 6;

    fn from_cells(cells: &[Cell]) -> Self {
        Decision {
            date: cells[0].text(),
            challenger: cells[1].text(),
            contracting_authority: cells[2].text(),
            complaint_object: cells[3].text(),
            document_url: cells[4].href(),
            reporting_status: cells[5].text(),
        }
    }
}

/// Parse one appeals listing page into records plus inferred pagination.
/// The document is parsed exactly once; extraction and pagination inference
/// both run against that single parse.
pub fn parse_appeals_page(html: &str, requested_page: u32) -> Paginated<Appeal> {
    parse_listing(html, requested_page)
}

/// Parse one decisions listing page; see [`parse_appeals_page`].
pub fn parse_decisions_page(html: &str, requested_page: u32) -> Paginated<Decision> {
    parse_listing(html, requested_page)
}

fn parse_listing<T: TableRecord>(html: &str, requested_page: u32) -> Paginated<T> {
    let doc = Html::parse_document(html);
    Paginated {
        items: extract_records(&doc),
        pagination: infer_pagination(&doc, requested_page),
    }
}

/// Records in document order. Header rows, footer rows, and stray markup
/// sharing the table container all fall short of the arity and are skipped.
fn extract_records<T: TableRecord>(doc: &Html) -> Vec<T> {
    doc.select(&SELECTORS.rows)
        .filter_map(|row| {
            let cells = row_cells(row);
            if cells.len() < T::ARITY {
                return None;
            }
            Some(T::from_cells(&cells))
        })
        .collect()
}

fn row_cells(row: ElementRef) -> Vec<Cell> {
    row.select(&SELECTORS.cells)
        .map(|cell| Cell {
            text: element_text(cell),
            href: cell
                .select(&SELECTORS.anchor)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string),
        })
        .collect()
}

/// Reconstruct pagination state from the pager markup alone; the portal
/// returns no explicit pagination object.
///
/// `has_next_page`/`has_prev_page` are read straight from marker presence
/// and are not derived from the numeric page computation. The two sources
/// can disagree on odd markup; both are reported as found.
fn infer_pagination(doc: &Html, requested_page: u32) -> Pagination {
    // rendered marker is 1-based; absent or non-numeric means page 1
    let current_page = doc
        .select(&SELECTORS.pager_current)
        .next()
        .and_then(|marker| element_text(marker).parse::<u32>().ok())
        .unwrap_or(1)
        .saturating_sub(1);

    let total_pages = last_link_total(doc)
        .or_else(|| numbered_item_total(doc))
        .unwrap_or(1);

    let has_next_page = doc.select(&SELECTORS.pager_next).next().is_some();
    let has_prev_page = doc.select(&SELECTORS.pager_prev).next().is_some();

    if current_page != requested_page {
        // the portal clamps out-of-range requests to its last page; report
        // what was actually served
        log::warn!(
            "portal served page {current_page} instead of requested page {requested_page}"
        );
    }

    Pagination {
        current_page,
        total_pages,
        per_page: PER_PAGE,
        has_next_page,
        has_prev_page,
    }
}

/// Preferred page-count source: the last-page link, whose href carries the
/// 0-based index of the final page.
fn last_link_total(doc: &Html) -> Option<u32> {
    let href = doc
        .select(&SELECTORS.pager_last_link)
        .next()?
        .value()
        .attr("href")?;
    Some(page_query_value(href)? + 1)
}

/// Fallback: the maximum numeric label among the numbered pager items.
/// `None` when no pager is rendered at all (single-page result sets often
/// drop it entirely).
fn numbered_item_total(doc: &Html) -> Option<u32> {
    doc.select(&SELECTORS.pager_numbered)
        .filter_map(|item| element_text(item).parse::<u32>().ok())
        .max()
}

/// Value of the `page` query parameter in a pager href. Hrefs come
/// site-relative, so resolve against a throwaway base first.
fn page_query_value(href: &str) -> Option<u32> {
    let base = Url::parse("https://localhost/").ok()?;
    let url = base.join(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// Final path segment of a link, which is where the portal embeds the
/// procurement-process identifier.
fn final_path_segment(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or_default()
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
