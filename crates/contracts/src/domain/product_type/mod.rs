use serde::{Deserialize, Serialize};

/// Path prefix of the product type settings endpoints.
pub const PRODUCT_TYPE_BASE_PATH: &str = "/settings/product_type";

/// Body of the `DELETE /settings/product_type/{id}` response.
///
/// The server answers `{"success": true}` on deletion and
/// `{"error": "..."}` (without `success`) when the caller is not allowed to
/// delete, so a missing flag reads as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProductTypeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Builds the delete path for a product type under `base_path`.
pub fn product_type_path(base_path: &str, id: &str) -> String {
    format!("{}/{}", base_path.trim_end_matches('/'), id)
}

/// DOM id of the settings table row rendered for a product type.
pub fn product_row_element_id(id: &str) -> String {
    format!("product-{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response: DeleteProductTypeResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_error_body_without_flag_is_failure() {
        let response: DeleteProductTypeResponse =
            serde_json::from_str(r#"{"error": "Unauthorized"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            product_type_path(PRODUCT_TYPE_BASE_PATH, "42"),
            "/settings/product_type/42"
        );
        assert_eq!(product_type_path("/api/types/", "7"), "/api/types/7");
        assert_eq!(product_row_element_id("42"), "product-42");
    }
}
