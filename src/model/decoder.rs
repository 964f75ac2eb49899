/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::application::config::{Config, DecodeConfig};
use crate::error::{AppError, AppResult};
use crate::model::responses::{
    ApiError, ApiErrorResponse, DataResponse, ItemsResponse, Pagination,
};
use crate::presentation::serialization::is_malformed_number_message;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::any::type_name;
use std::io::Read;
use tracing::{debug, error, warn};

/// Turns raw response bodies into models
///
/// Error envelopes are reported as [`AppError::Api`], malformed lenient
/// numbers as [`AppError::MalformedNumber`] and any other JSON problem as
/// [`AppError::Json`]. Holds only immutable settings, so a single decoder can
/// be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoder {
    config: DecodeConfig,
}

impl ResponseDecoder {
    /// Creates a decoder with the given settings
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Creates a decoder from the decoding section of the library configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.decode.clone())
    }

    /// Settings in use
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decodes a body into `T` as-is
    ///
    /// # Errors
    /// See the type level documentation
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> AppResult<T> {
        let target = type_name::<T>();
        debug!("Decoding {} bytes into {}", body.len(), target);

        if body.iter().all(u8::is_ascii_whitespace) {
            error!("Cannot decode {} from an empty body", target);
            return Err(AppError::Deserialization(format!(
                "empty response body for {target}"
            )));
        }

        if mentions_error_key(body) {
            if let Some(api_error) = detect_api_error(body) {
                return Err(api_failure(api_error, target));
            }
        }

        serde_json::from_slice::<T>(body).map_err(|e| self.decode_error(e, body, target))
    }

    /// Reads a whole body from `reader`, then decodes it like [`Self::decode`]
    ///
    /// # Errors
    /// [`AppError::Io`] when reading fails, otherwise as [`Self::decode`]
    pub fn decode_reader<T: DeserializeOwned, R: Read>(&self, mut reader: R) -> AppResult<T> {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;
        self.decode(&body)
    }

    /// Decodes a `{"data": ...}` envelope and returns its payload
    ///
    /// # Errors
    /// See the type level documentation
    pub fn decode_data<T: DeserializeOwned>(&self, body: &[u8]) -> AppResult<T> {
        self.decode::<DataResponse<T>>(body)
            .map(|response| response.data)
    }

    /// Decodes a `{"data": {"items": [...]}}` envelope
    ///
    /// # Returns
    /// The items together with the paging state, when the endpoint is paginated
    ///
    /// # Errors
    /// See the type level documentation
    pub fn decode_items<T: DeserializeOwned>(
        &self,
        body: &[u8],
    ) -> AppResult<(Vec<T>, Option<Pagination>)> {
        let response = self.decode::<ItemsResponse<T>>(body)?;
        debug!(
            "Decoded {} items, has next page: {}",
            response.len(),
            response.pagination.as_ref().is_some_and(Pagination::has_next)
        );
        Ok((response.data.items, response.pagination))
    }

    fn decode_error(&self, e: serde_json::Error, body: &[u8], target: &str) -> AppError {
        if self.config.log_payload_on_error {
            error!(
                "Failed to decode {}: {} | payload: {}",
                target,
                e,
                payload_excerpt(body, self.config.max_logged_payload_bytes)
            );
        } else {
            error!("Failed to decode {}: {}", target, e);
        }
        classify_error(e)
    }
}

/// Only bodies containing an `"error"` key token can be error envelopes
fn mentions_error_key(body: &[u8]) -> bool {
    const KEY: &[u8] = b"\"error\"";
    body.windows(KEY.len()).any(|window| window == KEY)
}

fn api_failure(api_error: ApiError, target: &str) -> AppError {
    warn!(
        "API returned an error instead of {}: {:?} {}",
        target, api_error.code, api_error.message
    );
    AppError::Api {
        code: api_error.code,
        message: api_error.message,
    }
}

fn detect_api_error(body: &[u8]) -> Option<ApiError> {
    serde_json::from_slice::<ApiErrorResponse>(body)
        .ok()
        .map(|response| response.error)
}

fn classify_error(e: serde_json::Error) -> AppError {
    let message = e.to_string();
    if e.classify() == Category::Data && is_malformed_number_message(&message) {
        AppError::MalformedNumber(message)
    } else {
        AppError::Json(e)
    }
}

/// Returns at most `max_bytes` of the payload as text, cut on a character boundary
pub fn payload_excerpt(body: &[u8], max_bytes: usize) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= max_bytes {
        return text.into_owned();
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &text[..end], body.len())
}
