use contracts::domain::product_type::{product_type_path, DeleteProductTypeResponse};
use gloo_net::http::Request;
use thiserror::Error;

/// Failure of the delete call itself, as opposed to a refusal by the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// URL of the delete endpoint for product type `id`
pub fn delete_url(id: &str) -> String {
    product_type_path(
        &crate::config::get().product_type_base_path,
        &urlencoding::encode(id),
    )
}

/// Delete product type.
///
/// The status code is not checked: refusals come back as JSON bodies without
/// a `success` flag and are reported through the response.
pub async fn delete_product_type(id: &str) -> Result<DeleteProductTypeResponse, DeleteError> {
    let response = Request::delete(&delete_url(id))
        .send()
        .await
        .map_err(|e| DeleteError::Network(e.to_string()))?;

    response
        .json::<DeleteProductTypeResponse>()
        .await
        .map_err(|e| DeleteError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_url_uses_configured_base() {
        assert_eq!(delete_url("15"), "/settings/product_type/15");
    }

    #[test]
    fn test_delete_url_encodes_id() {
        assert_eq!(delete_url("a/b"), "/settings/product_type/a%2Fb");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DeleteError::Parse("expected value at line 1".into()).to_string(),
            "failed to parse response: expected value at line 1"
        );
    }
}
