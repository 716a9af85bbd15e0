//! Small shared helpers

use uuid::Uuid;

/// Current wall-clock time as Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque token (cart tokens, order ids)
pub fn new_token() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = new_token();
        let b = new_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // Sanity: after 2020-01-01 in millis
        assert!(now_millis() > 1_577_836_800_000);
    }
}
