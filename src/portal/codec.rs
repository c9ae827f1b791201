//! Request body construction for the portal's form endpoints.
//!
//! The code-lookup and detail endpoints accept a conventional
//! `application/x-www-form-urlencoded` mapping. The vehicle-search endpoint
//! does not: its handler is order-sensitive, so [`encode_search_body`] emits
//! the fields in a literal, hardcoded sequence reverse-engineered from live
//! traffic.

use url::form_urlencoded;

/// Filter template the search endpoint expects in its `LISTOP` field: all
/// filters nulled, pagination pinned to the first page of ten.
const LISTOP_TEMPLATE: &str = r#"{"searchEndApprovalDate":null,"miv_pageNo":"1","searchChassisNo":null,"searchStartApprovalDate":null,"searchType":null,"miv_start_index":"0","searchMakeCd":null,"searchMakeNm":null,"searchManufactureYear":null,"miv_end_index":"10","searchModelTypeNm":null,"miv_sort":"","miv_pageSize":"10","searchModelTypeCd":null}"#;

/// Applies one standard form-encoding layer to a single value.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encodes a field mapping as an `application/x-www-form-urlencoded` body.
///
/// Used for the two code-lookup endpoints and the detail endpoint, where
/// the server accepts fields in any order.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Builds the vehicle-search request body with its exact field order.
///
/// The `LISTOP` value must carry two encoding layers: one internal layer on
/// the JSON template, then the body layer every field receives. It is
/// spliced in pre-encoded; re-escaping it here would add a third layer and
/// break the search call. Missing values encode as empty strings, which the
/// portal treats as blank filters.
#[allow(clippy::too_many_arguments)]
pub fn encode_search_body(
    make_name: &str,
    make_code: &str,
    model_name: &str,
    model_code: &str,
    year: &str,
    start_date: &str,
    end_date: &str,
) -> String {
    let encoded_listop = encode_component(&encode_component(LISTOP_TEMPLATE));

    let ordered_params = [
        format!("screenType={}", encode_component("S")),
        format!("MENU_ID={}", encode_component("IIM01S03V02")),
        format!("LISTOP={encoded_listop}"),
        format!("searchType={}", encode_component("02")),
        format!("searchChassisNo={}", encode_component("")),
        format!("searchMakeCd={}", encode_component(make_code)),
        format!("searchMakeNm={}", encode_component(make_name)),
        format!("searchModelTypeCd={}", encode_component(model_code)),
        format!("searchModelTypeNm={}", encode_component(model_name)),
        format!("searchManufactureYear={}", encode_component(year)),
        format!("searchStartApprovalDate={}", encode_component(start_date)),
        format!("searchEndApprovalDate={}", encode_component(end_date)),
        format!("miv_pageNo={}", encode_component("")),
        format!("miv_pageSize={}", encode_component("10")),
    ];

    ordered_params.join("&")
}
