/// One assessed used-vehicle entry from the search results table.
///
/// Every field holds the portal's rendered text verbatim (whitespace-trimmed
/// only). Exchange rates, dates and amounts stay as strings so the portal's
/// own formatting survives to the output untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    pub no: String,
    pub trim_level: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub exchange_rate: String,
    pub receipt_date: String,
    pub assessment_date: String,
    pub total_tax: String,
    /// Key for fetching this record's itemized tax breakdown.
    pub detail_key: DetailKey,
}

/// The five-tuple the detail endpoint needs to locate one assessment.
///
/// Extracted from the `goDetail(...)` handler embedded in a search row;
/// the tokens are opaque to this client and passed back as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailKey {
    pub customs_office_cd: String,
    pub declaration_year: String,
    pub declaration_seq_no: String,
    pub assessment_seq_no: String,
    pub item_no: String,
}

/// One row of a tax breakdown, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxLineItem {
    pub no: String,
    pub tax_code: String,
    pub tax_code_name: String,
    pub tax_rate: String,
    pub tax_ncy: String,
}
