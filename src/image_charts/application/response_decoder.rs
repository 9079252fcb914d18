use super::error::ApplicationError;
use crate::domain::remote_error::{join_validation_messages, ERROR_CODE_HEADER, ERROR_VALIDATION_HEADER};
use crate::domain::transport_trait::TransportResponse;
use tracing::warn;

/// Returns the image bytes of a 2xx response, otherwise the remote error.
pub fn decode_response(response: TransportResponse) -> Result<Vec<u8>, ApplicationError> {
    if response.is_success() {
        return Ok(response.body);
    }

    let message = remote_error_message(&response);
    warn!(status = response.status, error = %message, "Image-Charts rejected the request");
    Err(ApplicationError::RemoteValidation(message))
}

// 検証メッセージ > エラーコード > 空文字 の順で採用する
fn remote_error_message(response: &TransportResponse) -> String {
    let validation = response
        .header(ERROR_VALIDATION_HEADER)
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            join_validation_messages(raw).unwrap_or_else(|e| {
                warn!(error = %e, "malformed {} header", ERROR_VALIDATION_HEADER);
                raw.to_string()
            })
        })
        .unwrap_or_default();

    if !validation.is_empty() {
        return validation;
    }
    response
        .header(ERROR_CODE_HEADER)
        .unwrap_or_default()
        .to_string()
}
