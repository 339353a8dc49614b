use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn register_request_sends_null_for_missing_name() {
    let req = RegisterRequest { email: "a@b.com".to_owned(), password: "secret1".to_owned(), full_name: None };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "secret1", "full_name": null}));
}

#[test]
fn register_request_sends_name_when_present() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
        full_name: Some("Ada".to_owned()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["full_name"], "Ada");
}

#[test]
fn login_request_has_exactly_email_and_password() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "pw"}));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn token_response_defaults_token_type() {
    let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(resp.access_token, "abc");
    assert_eq!(resp.token_type, "bearer");
}

#[test]
fn token_response_without_access_token_is_rejected() {
    assert!(serde_json::from_str::<TokenResponse>(r#"{"token_type":"bearer"}"#).is_err());
}

#[test]
fn user_profile_optional_fields_default_to_none() {
    let user: UserProfile = serde_json::from_str(r#"{"id":"u1","email":"a@b.com","is_active":true}"#).unwrap();
    assert_eq!(user.full_name, None);
    assert_eq!(user.picture, None);
    assert!(user.is_active);
}

#[test]
fn user_profile_accepts_numeric_id() {
    let user: UserProfile =
        serde_json::from_str(r#"{"id":42,"email":"a@b.com","full_name":null,"picture":null,"is_active":false}"#)
            .unwrap();
    assert_eq!(user.id, "42");
}

#[test]
fn user_profile_rejects_non_scalar_id() {
    let raw = r#"{"id":{"x":1},"email":"a@b.com","is_active":true}"#;
    assert!(serde_json::from_str::<UserProfile>(raw).is_err());
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"bad credentials"}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("bad credentials"));
}

#[test]
fn error_body_validation_list_uses_first_msg() {
    let body: ErrorBody = serde_json::from_str(
        r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"}]}"#,
    )
    .unwrap();
    assert_eq!(body.message().as_deref(), Some("value is not a valid email address"));
}

#[test]
fn error_body_missing_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message(), None);
}

#[test]
fn error_body_blank_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
    assert_eq!(body.message(), None);
}

#[test]
fn error_body_non_text_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":17}"#).unwrap();
    assert_eq!(body.message(), None);
}
