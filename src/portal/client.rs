//! HTTP client for the portal's form endpoints.
//!
//! The four operations form a strict dependency chain: the two code lookups
//! feed the search, whose first result feeds the detail call. All of them
//! share one network primitive, [`PortalClient::post_form`], which applies
//! the uniform header set the portal's session checks expect.

use crate::config::ClientConfig;
use crate::constants::{
    DEBUG_BODY_LIMIT, MAKE_LOOKUP_PATH, MODEL_LOOKUP_PATH, PORTAL_USER_AGENT, TAX_DETAIL_PATH,
    VEHICLE_SEARCH_PATH,
};
use crate::errors::{AppError, AppResult};
use crate::models::{DetailKey, TaxLineItem, VehicleRecord};
use crate::portal::{codec, extractor};
use crate::utils::truncate_for_log;
use scraper::Html;
use std::time::Duration;
use tracing::debug;

/// Client for the vehicle-tax assessment portal.
///
/// Holds a connection pool and the read-only configuration; no state is
/// shared between operations beyond these.
pub struct PortalClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PortalClient {
    /// Builds a client with the configured per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the underlying HTTP client cannot be
    /// constructed (e.g. TLS backend initialization failure).
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Resolves a human-readable make name into the portal's internal code.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row of the lookup response matches the make
    /// name, or the matching rows carry no extractable code.
    pub async fn resolve_make_code(&self, make_name: &str) -> AppResult<String> {
        let body = codec::encode_form(&[
            ("codeObjId", "searchMakeCd"),
            ("codeNameObjId", "searchMakeNm"),
            ("callBackNm", "usedVehicleTax.setVehicleMakeCallBack"),
            ("searchCodeName", make_name),
        ]);
        let document = self.post_form(MAKE_LOOKUP_PATH, body).await?;

        extractor::find_make_code(&document, make_name).ok_or_else(|| {
            AppError::NotFound(format!("could not find make code for '{make_name}'"))
        })
    }

    /// Resolves a model name into the portal's internal code, requiring the
    /// model's make to match `make_name` (model names are not unique across
    /// makes).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` under the same conditions as
    /// [`resolve_make_code`](Self::resolve_make_code).
    pub async fn resolve_model_code(
        &self,
        make_name: &str,
        model_name: &str,
    ) -> AppResult<String> {
        let body = codec::encode_form(&[
            ("codeObjId", "searchModelTypeCd"),
            ("codeNameObjId", "searchModelTypeNm"),
            ("callBackNm", "usedVehicleTax.setVehicleModelCallBack"),
            ("searchModelDescription", model_name),
        ]);
        let document = self.post_form(MODEL_LOOKUP_PATH, body).await?;

        extractor::find_model_code(&document, make_name, model_name).ok_or_else(|| {
            AppError::NotFound(format!(
                "could not find model code for '{model_name}' by make '{make_name}'"
            ))
        })
    }

    /// Searches used-vehicle tax assessments for a resolved make/model pair
    /// within a manufacture year and assessment date range.
    ///
    /// An empty vector is a valid outcome: not every search has matches.
    #[allow(clippy::too_many_arguments)]
    pub async fn search_vehicles(
        &self,
        make_name: &str,
        make_code: &str,
        model_name: &str,
        model_code: &str,
        year: &str,
        start_date: &str,
        end_date: &str,
    ) -> AppResult<Vec<VehicleRecord>> {
        let body = codec::encode_search_body(
            make_name, make_code, model_name, model_code, year, start_date, end_date,
        );
        let document = self.post_form(VEHICLE_SEARCH_PATH, body).await?;
        Ok(extractor::parse_vehicle_rows(&document))
    }

    /// Fetches the itemized tax breakdown for one assessment.
    ///
    /// An empty vector is a valid outcome.
    pub async fn fetch_tax_details(&self, key: &DetailKey) -> AppResult<Vec<TaxLineItem>> {
        let body = codec::encode_form(&[
            ("customsOfficeCd", &key.customs_office_cd),
            ("declarationYear", &key.declaration_year),
            ("declarationSeqNo", &key.declaration_seq_no),
            ("assessmentSeqNo", &key.assessment_seq_no),
            ("itemNo", &key.item_no),
        ]);
        let document = self.post_form(TAX_DETAIL_PATH, body).await?;
        Ok(extractor::parse_tax_rows(&document))
    }

    /// Submits a form body to a portal endpoint and parses the response as
    /// HTML.
    ///
    /// The portal's session checks key off the same header set on every
    /// endpoint: form content type, browser User-Agent, Origin, and a
    /// Referer pointing at the search page.
    ///
    /// # Errors
    ///
    /// - `Transport` for connection or timeout failures, surfaced
    ///   unmodified; the caller does not retry.
    /// - `BadStatus` for any non-success status, carrying the status and
    ///   response body for diagnosis.
    /// - `ParseFailure` if the response body cannot be decoded as text.
    async fn post_form(&self, path: &str, body: String) -> AppResult<Html> {
        let url = format!("{}{}", self.config.base_url, path);
        let referer = format!("{}{}", self.config.base_url, VEHICLE_SEARCH_PATH);

        if self.config.debug {
            debug!(
                url = %url,
                body = %truncate_for_log(&body, DEBUG_BODY_LIMIT),
                "Sending portal request"
            );
        }

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("User-Agent", PORTAL_USER_AGENT)
            .header("Origin", self.config.base_url.as_str())
            .header("Referer", referer)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::ParseFailure(format!("failed to decode response body: {e}")))?;
        Ok(Html::parse_document(&text))
    }
}
