use super::*;

#[test]
fn endpoint_joins_same_origin_base() {
    let api = HttpAuthApi::default();
    assert_eq!(api.endpoint(LOGIN_PATH), "/auth/login");
}

#[test]
fn endpoint_trims_trailing_slash_from_base() {
    let api = HttpAuthApi::new("http://localhost:8000/");
    assert_eq!(api.endpoint(PROFILE_PATH), "http://localhost:8000/auth/me");
}

#[test]
fn oauth_login_url_points_at_google_entry() {
    let api = HttpAuthApi::new("https://auth.example.com");
    assert_eq!(api.oauth_login_url(), "https://auth.example.com/auth/google/login");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn rejection_extracts_detail() {
    assert_eq!(
        rejection(401, r#"{"detail":"bad credentials"}"#),
        ApiError::Rejected { status: 401, detail: Some("bad credentials".to_owned()) }
    );
}

#[test]
fn rejection_with_non_json_body_has_no_detail() {
    assert_eq!(
        rejection(502, "<html>Bad Gateway</html>"),
        ApiError::Rejected { status: 502, detail: None }
    );
}

#[test]
fn user_message_prefers_detail() {
    let err = ApiError::Rejected { status: 400, detail: Some("Email already registered".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = ApiError::Rejected { status: 500, detail: None };
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn user_message_for_transport_is_connectivity_message() {
    let err = ApiError::Transport("NetworkError".to_owned());
    assert_eq!(err.user_message("Login failed"), CONNECTION_ERROR_MESSAGE);
}

#[test]
fn api_error_display() {
    assert_eq!(ApiError::Rejected { status: 401, detail: None }.to_string(), "request rejected: status 401");
    assert_eq!(ApiError::Transport("boom".to_owned()).to_string(), "transport failure: boom");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_without_browser_are_transport_errors() {
    let api = HttpAuthApi::default();
    let result = futures::executor::block_on(api.fetch_profile("abc"));
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
