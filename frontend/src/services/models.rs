use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a storefront call reports back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl SubmissionResult {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            transaction_id: None,
        }
    }

    pub fn with_transaction(mut self, transaction_id: String) -> Self {
        self.transaction_id = Some(transaction_id);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub product: String,
    pub price: u32,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("email subscription failed: {0}")]
    Subscription(String),
    #[error("checkout failed: {0}")]
    Checkout(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_without_transaction_omits_the_field() {
        let value = serde_json::to_value(SubmissionResult::succeeded("Successfully subscribed!")).unwrap();
        assert_eq!(value, json!({ "success": true, "message": "Successfully subscribed!" }));
    }

    #[test]
    fn result_uses_camel_case_transaction_id() {
        let result = SubmissionResult::succeeded("ok").with_transaction("TXN_abc123xyz".to_string());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["transactionId"], "TXN_abc123xyz");
    }

    #[test]
    fn boundary_response_without_transaction_parses() {
        let result: SubmissionResult =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.transaction_id, None);
    }

    #[test]
    fn order_matches_checkout_payload() {
        let order = PurchaseOrder { product: "TikTok 150K Playbook".to_string(), price: 29 };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({ "product": "TikTok 150K Playbook", "price": 29 })
        );
    }

    #[test]
    fn error_messages_name_the_failed_call() {
        assert_eq!(
            ServiceError::Checkout("timeout".to_string()).to_string(),
            "checkout failed: timeout"
        );
    }
}
