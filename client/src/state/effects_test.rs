use futures::executor::block_on;

use super::*;
use crate::net::mock::{MockAuthApi, MockCall, profile, rejected, token};

#[test]
fn perform_login_calls_backend_and_wraps_result() {
    let api = MockAuthApi::default().with_token(Ok(token("abc")));
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let outcome = block_on(perform(&api, Call::Login(request.clone())));
    assert_eq!(outcome, Outcome::Login(Ok(token("abc"))));
    assert_eq!(api.calls(), vec![MockCall::Login(request)]);
}

#[test]
fn perform_register_wraps_rejection() {
    let api = MockAuthApi::default().with_token(Err(rejected(400, "taken")));
    let request =
        RegisterRequest { email: "a@b.com".to_owned(), password: "secret1".to_owned(), full_name: None };
    let outcome = block_on(perform(&api, Call::Register(request)));
    assert_eq!(outcome, Outcome::Register(Err(rejected(400, "taken"))));
}

#[test]
fn perform_profile_passes_token() {
    let api = MockAuthApi::default().with_profile(Ok(profile()));
    let outcome = block_on(perform(&api, Call::FetchProfile { token: "tok".to_owned() }));
    assert_eq!(outcome, Outcome::Profile(Ok(profile())));
    assert_eq!(api.calls(), vec![MockCall::FetchProfile("tok".to_owned())]);
}

#[test]
fn perform_logout_passes_token() {
    let api = MockAuthApi::default();
    let outcome = block_on(perform(&api, Call::Logout { token: "tok".to_owned() }));
    assert_eq!(outcome, Outcome::LoggedOut(Ok(())));
    assert_eq!(api.calls(), vec![MockCall::Logout("tok".to_owned())]);
}

#[test]
fn outcome_error_exposes_failure() {
    let failed = Outcome::Profile(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(failed.error(), Some(&ApiError::Transport("offline".to_owned())));
    assert_eq!(Outcome::Login(Ok(token("x"))).error(), None);
}

#[test]
fn call_labels() {
    assert_eq!(Call::FetchProfile { token: String::new() }.label(), "profile");
    assert_eq!(Call::Logout { token: String::new() }.label(), "logout");
    let login = LoginRequest { email: String::new(), password: String::new() };
    assert_eq!(Call::Login(login).label(), "login");
}
