// Portal endpoints
pub const PORTAL_BASE_URL: &str = "https://external.unipassghana.com";
pub const MAKE_LOOKUP_PATH: &str = "/co/popup/selectCommonVehicleMakePopup.do";
pub const MODEL_LOOKUP_PATH: &str = "/co/popup/selectCommonVehicleModelPopup.do";
pub const VEHICLE_SEARCH_PATH: &str =
    "/cl/tm/tax/selectUsedVehicleTaxCalculate.do?decorator=popup&MENU_ID=IIM01S03V02";
pub const TAX_DETAIL_PATH: &str = "/cl/tm/tax/selectUsedVehicleDetails.do";

// The portal's session checks key off a browser-looking User-Agent
pub const PORTAL_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

// Selectors and Patterns
pub const LOOKUP_ROW_SELECTOR: &str = "table.g-table tbody tr";
pub const SEARCH_ROW_SELECTOR: &str = r#"table[data-table="rwd"] tbody tr"#;
pub const DETAIL_ROW_SELECTOR: &str = "tbody tr";
pub const CODE_HANDLER_PATTERN: &str = r"selectCommonCode\('([^']*)'";
pub const DETAIL_HANDLER_PATTERN: &str =
    r"goDetail\('([^']*)', '([^']*)', '([^']*)', '([^']*)', '([^']*)'";

// Placeholder row the portal renders when a search has no matches
pub const NO_DATA_SENTINEL: &str = "No data found";

// Minimum cell counts below which a row is treated as a placeholder
pub const SEARCH_ROW_MIN_CELLS: usize = 10;
pub const DETAIL_ROW_MIN_CELLS: usize = 5;

// Request body logged in debug mode is cut off past this many characters
pub const DEBUG_BODY_LIMIT: usize = 500;
