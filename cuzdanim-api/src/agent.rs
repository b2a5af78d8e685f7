//! Implementation of [`Agent`] and definitions of session storage for it.
//!
//! The agent attaches the stored access token to every request. When the
//! server rejects a request with HTTP 401, one token refresh is performed no
//! matter how many requests fail concurrently; the rejected requests are
//! queued while it runs and replayed once with the new credentials. If the
//! refresh itself fails, the stored pair is discarded (forced logout) and
//! every queued request receives the refresh error.

mod inner;
pub mod store;

use self::store::{Session, TokenKind};
use crate::client::Service;
use crate::types::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use cuzdanim_common::store::Store;
use cuzdanim_http::{ApiClient, Error};
use std::{ops::Deref, sync::Arc};

pub struct CredentialSession<S, T>
where
    S: Store<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    store: Arc<inner::Store<S>>,
    inner: Arc<inner::Client<S, T>>,
    pub api: Service<inner::Client<S, T>>,
}

impl<S, T> CredentialSession<S, T>
where
    S: Store<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    pub fn new(api: T, store: S) -> Self {
        let store = Arc::new(inner::Store::new(store, api.base_uri()));
        let inner = Arc::new(inner::Client::new(Arc::clone(&store), api));
        Self { store, inner: Arc::clone(&inner), api: Service::new(inner) }
    }
    /// Start a new session with this agent.
    pub async fn login(
        &self,
        email: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> Result<LoginResponse, Error> {
        let result = self
            .api
            .auth
            .login(LoginRequest {
                email: email.as_ref().into(),
                password: password.as_ref().into(),
                ip_address: None,
            })
            .await?;
        self.store
            .set(TokenKind::Access, result.access_token.clone())
            .await
            .map_err(|e| Error::SessionStore(Box::new(e)))?;
        self.store
            .set(TokenKind::Refresh, result.refresh_token.clone())
            .await
            .map_err(|e| Error::SessionStore(Box::new(e)))?;
        Ok(result)
    }
    /// Create a new user account. No session is started; call
    /// [`login()`](CredentialSession::login) afterwards.
    pub async fn register(&self, input: RegisterRequest) -> Result<RegisterResponse, Error> {
        self.api.auth.register(input).await
    }
    /// Resume a pre-existing session with this agent.
    pub async fn resume_session(&self, session: Session) -> Result<(), Error> {
        self.store
            .set(TokenKind::Access, session.access_token)
            .await
            .map_err(|e| Error::SessionStore(Box::new(e)))?;
        self.store
            .set(TokenKind::Refresh, session.refresh_token)
            .await
            .map_err(|e| Error::SessionStore(Box::new(e)))?;
        Ok(())
    }
    /// End the session and discard the stored token pair.
    pub async fn logout(&self) -> Result<(), Error> {
        self.store.clear().await.map_err(|e| Error::SessionStore(Box::new(e)))
    }
    /// Get the current session.
    pub async fn get_session(&self) -> Option<Session> {
        let access_token = self.store.get(&TokenKind::Access).await.ok().flatten()?;
        let refresh_token = self.store.get(&TokenKind::Refresh).await.ok().flatten()?;
        Some(Session { access_token, refresh_token, expires_at: None })
    }
    /// Set the current endpoint.
    pub fn configure_endpoint(&self, endpoint: String) {
        self.inner.configure_endpoint(endpoint);
    }
    /// Get the current endpoint.
    pub fn get_endpoint(&self) -> String {
        self.store.get_endpoint()
    }
}

/// A Cüzdanım API agent.
/// Manages session token lifecycles and provides convenience methods.
pub struct Agent<S, T>
where
    S: Store<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    inner: CredentialSession<S, T>,
}

impl<S, T> Agent<S, T>
where
    S: Store<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    /// Create a new agent.
    pub fn new(api: T, store: S) -> Self {
        Self { inner: CredentialSession::new(api, store) }
    }
}

impl<S, T> Deref for Agent<S, T>
where
    S: Store<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    type Target = CredentialSession<S, T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
