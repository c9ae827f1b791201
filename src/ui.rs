use crate::models::{TaxLineItem, VehicleRecord};

/// Renders the vehicle list as an aligned console table.
pub fn vehicle_table(records: &[VehicleRecord]) -> String {
    let headers = [
        "Make",
        "Model",
        "Year",
        "Exchange Rate",
        "Receipt Date",
        "Assessment Date",
        "Total Tax",
    ];
    let rows: Vec<Vec<&str>> = records
        .iter()
        .map(|r| {
            vec![
                r.make.as_str(),
                r.model.as_str(),
                r.year.as_str(),
                r.exchange_rate.as_str(),
                r.receipt_date.as_str(),
                r.assessment_date.as_str(),
                r.total_tax.as_str(),
            ]
        })
        .collect();
    render_table(&headers, &rows)
}

/// Renders a tax breakdown as an aligned console table, keeping row order.
pub fn tax_table(items: &[TaxLineItem]) -> String {
    let headers = ["No.", "Tax Code", "Tax Code Name", "Tax Rate", "Tax NCY"];
    let rows: Vec<Vec<&str>> = items
        .iter()
        .map(|item| {
            vec![
                item.no.as_str(),
                item.tax_code.as_str(),
                item.tax_code_name.as_str(),
                item.tax_rate.as_str(),
                item.tax_ncy.as_str(),
            ]
        })
        .collect();
    render_table(&headers, &rows)
}

/// Pads each column to its widest value, two spaces between columns, with a
/// dashed rule under the header.
fn render_table(headers: &[&str], rows: &[Vec<&str>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule_refs: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_row(&mut out, &rule_refs, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            out.push_str(cell);
        } else {
            out.push_str(&format!("{cell:<width$}  ", width = widths[i]));
        }
    }
    out.push('\n');
}
