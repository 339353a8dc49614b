//! Scripted `AuthApi` for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::api::{ApiError, AuthApi};
use super::types::{LoginRequest, RegisterRequest, TokenResponse, UserProfile};

/// Record of one call made against the mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
    Login(LoginRequest),
    Register(RegisterRequest),
    FetchProfile(String),
    Logout(String),
}

/// Replies are consumed in order; an empty queue answers with a transport
/// error.
#[derive(Default)]
pub struct MockAuthApi {
    token_replies: RefCell<VecDeque<Result<TokenResponse, ApiError>>>,
    profile_replies: RefCell<VecDeque<Result<UserProfile, ApiError>>>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockAuthApi {
    pub fn with_token(self, reply: Result<TokenResponse, ApiError>) -> Self {
        self.token_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_profile(self, reply: Result<UserProfile, ApiError>) -> Self {
        self.profile_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    fn next_token(&self) -> Result<TokenResponse, ApiError> {
        self.token_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.calls.borrow_mut().push(MockCall::Login(request.clone()));
        self.next_token()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.calls.borrow_mut().push(MockCall::Register(request.clone()));
        self.next_token()
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.calls.borrow_mut().push(MockCall::FetchProfile(token.to_owned()));
        self.profile_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(MockCall::Logout(token.to_owned()));
        Ok(())
    }
}

pub fn token(access_token: &str) -> TokenResponse {
    TokenResponse { access_token: access_token.to_owned(), token_type: "bearer".to_owned() }
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        picture: None,
        is_active: true,
    }
}

pub fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Rejected { status, detail: Some(detail.to_owned()) }
}
