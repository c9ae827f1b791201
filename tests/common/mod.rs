//! Common test fixtures for integration tests
//!
//! The HTML snippets mirror the portal's response structure: result tables
//! addressed by class/attribute selectors, fixed column positions, and
//! inline click handlers carrying the codes and detail keys.

use uvtax_cli::config::ClientConfig;
use uvtax_cli::portal::PortalClient;

/// Builds a client pointed at a local mock server.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> PortalClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        debug: true,
    };
    PortalClient::new(config).expect("client builds")
}

/// Make lookup response: code in the row's click handler, name in the third
/// column.
#[allow(dead_code)]
pub const MAKE_POPUP_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<table class="g-table">
  <tbody>
    <tr onclick="selectCommonCode('H01','HONDA')">
      <td>1</td><td>VEHICLE MAKE</td><td>Honda</td>
    </tr>
    <tr onclick="selectCommonCode('T01','TOYOTA')">
      <td>3</td><td>VEHICLE MAKE</td><td>Toyota</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

/// Model lookup response: model in the third column, its make in the fifth.
/// "Camry" appears under two makes to exercise disambiguation.
#[allow(dead_code)]
pub const MODEL_POPUP_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<table class="g-table">
  <tbody>
    <tr onclick="selectCommonCode('CAM-D','CAMRY')">
      <td>1</td><td>MODEL</td><td>Camry</td><td>SEDAN</td><td>Daihatsu</td>
    </tr>
    <tr onclick="selectCommonCode('CAM-T','CAMRY')">
      <td>2</td><td>MODEL</td><td>Camry</td><td>SEDAN</td><td>Toyota</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

/// Lookup response with no usable rows.
#[allow(dead_code)]
pub const EMPTY_POPUP_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<table class="g-table"><tbody></tbody></table>
</body></html>"#;

/// Search response: two full 14-column rows (most recent first), one
/// malformed short row the parser must drop.
#[allow(dead_code)]
pub const SEARCH_RESULTS_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<table data-table="rwd">
  <tbody>
    <tr>
      <td>1</td>
      <td><a href="javascript:goDetail('GH01', '2024', '50123', '1', '1');">LE 2.5</a></td>
      <td>2022</td>
      <td>TOYOTA</td>
      <td>CAMRY</td>
      <td>USD</td>
      <td>12,500.00</td>
      <td>11,000.00</td>
      <td>GHS</td>
      <td>10.45</td>
      <td>01/06/2024</td>
      <td>05/06/2024</td>
      <td>FULL</td>
      <td>45,120.00</td>
    </tr>
    <tr>
      <td>2</td>
      <td><a href="javascript:goDetail('GH02', '2024', '49876', '2', '1');">XLE 3.5</a></td>
      <td>2021</td>
      <td>TOYOTA</td>
      <td>CAMRY</td>
      <td>USD</td>
      <td>14,200.00</td>
      <td>12,900.00</td>
      <td>GHS</td>
      <td>10.41</td>
      <td>28/05/2024</td>
      <td>30/05/2024</td>
      <td>FULL</td>
      <td>52,480.00</td>
    </tr>
    <tr>
      <td>3</td><td>truncated placeholder</td><td>2020</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

/// Search response when nothing matches.
#[allow(dead_code)]
pub const NO_DATA_SEARCH_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<table data-table="rwd">
  <tbody>
    <tr>
      <td colspan="14">No data found</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

/// Tax breakdown response: line items in document order.
#[allow(dead_code)]
pub const TAX_DETAIL_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<table>
  <thead>
    <tr><th>No.</th><th>Code</th><th>Name</th><th>Rate</th><th>NCY</th></tr>
  </thead>
  <tbody>
    <tr><td>1</td><td>A10</td><td>Import Duty</td><td>10%</td><td>4,512.00</td></tr>
    <tr><td>2</td><td>V15</td><td>VAT</td><td>15%</td><td>6,768.00</td></tr>
    <tr><td>3</td><td>N05</td><td>NHIL</td><td>2.5%</td><td>1,128.00</td></tr>
  </tbody>
</table>
</body></html>"#;
