//! Structural extraction from portal response documents.
//!
//! The portal exposes no stable identifiers, so extraction anchors on table
//! CSS classes/attributes plus fixed column ordinals, and on the inline
//! click-handler micro-grammar `name('arg1','arg2',...)` embedded in row
//! attributes. Rows that fall below their table's minimum cell count, carry
//! the "No data found" placeholder, or whose handler arguments do not fully
//! match are skipped as data-quality filtering, never as errors.

use crate::constants::{
    CODE_HANDLER_PATTERN, DETAIL_HANDLER_PATTERN, DETAIL_ROW_MIN_CELLS, DETAIL_ROW_SELECTOR,
    LOOKUP_ROW_SELECTOR, NO_DATA_SENTINEL, SEARCH_ROW_MIN_CELLS, SEARCH_ROW_SELECTOR,
};
use crate::models::{DetailKey, TaxLineItem, VehicleRecord};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

static LOOKUP_ROWS: OnceLock<Selector> = OnceLock::new();
static SEARCH_ROWS: OnceLock<Selector> = OnceLock::new();
static DETAIL_ROWS: OnceLock<Selector> = OnceLock::new();
static CELLS: OnceLock<Selector> = OnceLock::new();
static ANCHORS: OnceLock<Selector> = OnceLock::new();

/// Cached regex for the 1-argument `selectCommonCode` handler.
static CODE_HANDLER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Cached regex for the 5-argument `goDetail` handler.
static DETAIL_HANDLER_REGEX: OnceLock<Regex> = OnceLock::new();

fn lookup_rows() -> &'static Selector {
    LOOKUP_ROWS.get_or_init(|| {
        Selector::parse(LOOKUP_ROW_SELECTOR).expect("LOOKUP_ROW_SELECTOR is a valid CSS selector")
    })
}

fn search_rows() -> &'static Selector {
    SEARCH_ROWS.get_or_init(|| {
        Selector::parse(SEARCH_ROW_SELECTOR).expect("SEARCH_ROW_SELECTOR is a valid CSS selector")
    })
}

fn detail_rows() -> &'static Selector {
    DETAIL_ROWS.get_or_init(|| {
        Selector::parse(DETAIL_ROW_SELECTOR).expect("DETAIL_ROW_SELECTOR is a valid CSS selector")
    })
}

fn cells() -> &'static Selector {
    CELLS.get_or_init(|| Selector::parse("td").expect("td is a valid CSS selector"))
}

fn anchors() -> &'static Selector {
    ANCHORS.get_or_init(|| Selector::parse("a").expect("a is a valid CSS selector"))
}

/// Extracts the first single-quoted argument of a `selectCommonCode(...)`
/// handler, the portal's code-selection callback.
pub fn select_common_code_arg(handler: &str) -> Option<String> {
    let re = CODE_HANDLER_REGEX.get_or_init(|| {
        Regex::new(CODE_HANDLER_PATTERN).expect("CODE_HANDLER_PATTERN is a valid regex pattern")
    });
    re.captures(handler)
        .map(|caps| caps[1].to_string())
}

/// Extracts the five single-quoted arguments of a `goDetail(...)` handler
/// into a [`DetailKey`]. Returns `None` unless all five are captured.
pub fn go_detail_args(handler: &str) -> Option<DetailKey> {
    let re = DETAIL_HANDLER_REGEX.get_or_init(|| {
        Regex::new(DETAIL_HANDLER_PATTERN).expect("DETAIL_HANDLER_PATTERN is a valid regex pattern")
    });
    let caps = re.captures(handler)?;
    Some(DetailKey {
        customs_office_cd: caps[1].to_string(),
        declaration_year: caps[2].to_string(),
        declaration_seq_no: caps[3].to_string(),
        assessment_seq_no: caps[4].to_string(),
        item_no: caps[5].to_string(),
    })
}

/// Trimmed text content of the cell at `idx`, or an empty string when the
/// row has no such cell.
fn cell_text(row_cells: &[ElementRef], idx: usize) -> String {
    row_cells
        .get(idx)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn row_text(row: &ElementRef) -> String {
    row.text().collect()
}

/// Scans a code-lookup response for the row whose make column (3rd)
/// case-insensitively equals `make_name`, and returns the code from its
/// click handler.
pub fn find_make_code(document: &Html, make_name: &str) -> Option<String> {
    for row in document.select(lookup_rows()) {
        let row_cells: Vec<ElementRef> = row.select(cells()).collect();
        if !cell_text(&row_cells, 2).eq_ignore_ascii_case(make_name) {
            continue;
        }
        if let Some(code) = row.value().attr("onclick").and_then(select_common_code_arg) {
            return Some(code);
        }
    }
    None
}

/// Scans a code-lookup response for the row whose model column (3rd) equals
/// `model_name` AND whose make column (5th) equals `make_name`, both
/// case-insensitively. The make predicate disambiguates identically-named
/// models across different makes.
pub fn find_model_code(document: &Html, make_name: &str, model_name: &str) -> Option<String> {
    for row in document.select(lookup_rows()) {
        let row_cells: Vec<ElementRef> = row.select(cells()).collect();
        if !cell_text(&row_cells, 2).eq_ignore_ascii_case(model_name)
            || !cell_text(&row_cells, 4).eq_ignore_ascii_case(make_name)
        {
            continue;
        }
        if let Some(code) = row.value().attr("onclick").and_then(select_common_code_arg) {
            return Some(code);
        }
    }
    None
}

/// Parses the search-results table into vehicle records.
///
/// Column map (0-based): 0 sequence no, 1 trim level (whose anchor carries
/// the `goDetail` handler), 2 year, 3 make, 4 model, 9 exchange rate,
/// 10 receipt date, 11 assessment date, 13 total tax.
pub fn parse_vehicle_rows(document: &Html) -> Vec<VehicleRecord> {
    let mut records = Vec::new();

    for row in document.select(search_rows()) {
        let row_cells: Vec<ElementRef> = row.select(cells()).collect();
        if row_cells.len() < SEARCH_ROW_MIN_CELLS {
            continue;
        }
        if row_text(&row).contains(NO_DATA_SENTINEL) {
            continue;
        }

        let href = row_cells[1]
            .select(anchors())
            .next()
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default();
        let detail_key = match go_detail_args(href) {
            Some(key) => key,
            None => continue,
        };

        records.push(VehicleRecord {
            no: cell_text(&row_cells, 0),
            trim_level: cell_text(&row_cells, 1),
            year: cell_text(&row_cells, 2),
            make: cell_text(&row_cells, 3),
            model: cell_text(&row_cells, 4),
            exchange_rate: cell_text(&row_cells, 9),
            receipt_date: cell_text(&row_cells, 10),
            assessment_date: cell_text(&row_cells, 11),
            total_tax: cell_text(&row_cells, 13),
            detail_key,
        });
    }

    records
}

/// Parses a tax-breakdown response into line items, preserving document
/// order (the portal lists duties before levies, and the order matters to
/// the rendered breakdown).
pub fn parse_tax_rows(document: &Html) -> Vec<TaxLineItem> {
    let mut items = Vec::new();

    for row in document.select(detail_rows()) {
        let row_cells: Vec<ElementRef> = row.select(cells()).collect();
        if row_cells.len() < DETAIL_ROW_MIN_CELLS {
            continue;
        }
        if row_text(&row).contains(NO_DATA_SENTINEL) {
            continue;
        }

        items.push(TaxLineItem {
            no: cell_text(&row_cells, 0),
            tax_code: cell_text(&row_cells, 1),
            tax_code_name: cell_text(&row_cells, 2),
            tax_rate: cell_text(&row_cells, 3),
            tax_ncy: cell_text(&row_cells, 4),
        });
    }

    items
}
