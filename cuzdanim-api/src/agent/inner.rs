use super::store::TokenKind;
use crate::types::auth::{LoginResponse, RefreshTokenRequest};
use cuzdanim_common::store::Store as StoreTrait;
use cuzdanim_http::error::{Error, Result};
use cuzdanim_http::types::REFRESH_TOKEN_PATH;
use cuzdanim_http::{ApiClient, ApiRequest, ApiResponse, AuthorizationToken, HttpClient};
use http::{Method, Request, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;
use std::{
    mem,
    sync::{Arc, Mutex, RwLock},
};
use tokio::sync::oneshot;

struct WrapperClient<S, T> {
    store: Arc<Store<S>>,
    inner: Arc<T>,
}

impl<S, T> Clone for WrapperClient<S, T> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), inner: self.inner.clone() }
    }
}

impl<S, T> HttpClient for WrapperClient<S, T>
where
    S: Send + Sync,
    T: HttpClient + Send + Sync,
{
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>>
    {
        self.inner.send_http(request).await
    }
}

impl<S, T> ApiClient for WrapperClient<S, T>
where
    S: StoreTrait<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    fn base_uri(&self) -> String {
        self.store.get_endpoint()
    }
    async fn authorization_token(
        &self,
        is_refresh: bool,
    ) -> core::result::Result<
        Option<AuthorizationToken>,
        Box<dyn std::error::Error + Send + Sync + 'static>,
    > {
        if is_refresh {
            // The refresh credential travels in the request body.
            return Ok(None);
        }
        let token = self.store.get(&TokenKind::Access).await?;
        Ok(token.map(AuthorizationToken::Bearer))
    }
}

/// Pending-request queue shared by all callers of a single refresh.
///
/// At most one refresh is in flight at any time; requests that hit a 401
/// while one is running enqueue a sender here and receive the outcome in
/// FIFO order once the refresh settles.
enum RefreshState {
    Idle,
    Refreshing(Vec<oneshot::Sender<Result<()>>>),
}

pub struct Client<S, T> {
    store: Arc<Store<S>>,
    inner: WrapperClient<S, T>,
    // Never held across an await.
    refresh: Mutex<RefreshState>,
}

impl<S, T> Client<S, T>
where
    S: StoreTrait<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    pub fn new(store: Arc<Store<S>>, api: T) -> Self {
        let inner = WrapperClient { store: Arc::clone(&store), inner: Arc::new(api) };
        Self { store, inner, refresh: Mutex::new(RefreshState::Idle) }
    }
    pub fn configure_endpoint(&self, endpoint: String) {
        *self.store.endpoint.write().expect("failed to write endpoint") = endpoint;
    }
    // Internal helper to refresh sessions
    // - Only the first caller performs the network call; everyone else is
    //   queued and receives the same outcome.
    async fn refresh_session(&self) -> Result<()> {
        let rx = {
            let mut state = self.refresh.lock().expect("failed to lock refresh state");
            match &mut *state {
                RefreshState::Refreshing(waiters) => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    Some(rx)
                }
                RefreshState::Idle => {
                    *state = RefreshState::Refreshing(Vec::new());
                    None
                }
            }
        };
        if let Some(rx) = rx {
            // A refresh is already in flight; wait for it to settle. The
            // agent never cancels the refreshing caller, so a dropped
            // sender means that caller went away before draining the queue.
            return match rx.await {
                Ok(outcome) => outcome,
                Err(_) => Err(Error::AuthenticationRequired),
            };
        }
        let result = self.refresh_session_inner().await;
        // Drain the queue and return to Idle under one lock acquisition so
        // that no request can enqueue between the drain and the reset.
        let waiters = {
            let mut state = self.refresh.lock().expect("failed to lock refresh state");
            match mem::replace(&mut *state, RefreshState::Idle) {
                RefreshState::Refreshing(waiters) => waiters,
                RefreshState::Idle => Vec::new(),
            }
        };
        match result {
            Ok(()) => {
                for tx in waiters {
                    let _ = tx.send(Ok(()));
                }
                Ok(())
            }
            Err(err) => {
                let shared = Arc::new(err);
                for tx in waiters {
                    let _ = tx.send(Err(Error::Refresh(Arc::clone(&shared))));
                }
                Err(Error::Refresh(shared))
            }
        }
    }
    async fn refresh_session_inner(&self) -> Result<()> {
        match self.call_refresh_token().await {
            Ok(()) => Ok(()),
            Err(err) => {
                // An unusable refresh token ends the session for everyone:
                // discard the stored pair so no request retries with it.
                let _ = self.store.clear().await;
                Err(err)
            }
        }
    }
    async fn call_refresh_token(&self) -> Result<()> {
        let refresh_token = self
            .store
            .get(&TokenKind::Refresh)
            .await
            .map_err(|e| Error::SessionStore(Box::new(e)))?
            .ok_or(Error::AuthenticationRequired)?;
        let response = self
            .inner
            .send_api::<(), _, LoginResponse>(&ApiRequest {
                method: Method::POST,
                path: REFRESH_TOKEN_PATH.into(),
                parameters: None,
                input: Some(RefreshTokenRequest { refresh_token }),
                encoding: Some("application/json".into()),
            })
            .await?;
        let tokens = response.into_data()?;
        // Persist before any queued request is resolved so that every retry
        // reads the new pair.
        self.store
            .set(TokenKind::Access, tokens.access_token)
            .await
            .map_err(|e| Error::SessionStore(Box::new(e)))?;
        self.store
            .set(TokenKind::Refresh, tokens.refresh_token)
            .await
            .map_err(|e| Error::SessionStore(Box::new(e)))?;
        Ok(())
    }
    fn is_unauthorized<O>(result: &Result<ApiResponse<O>>) -> bool
    where
        O: DeserializeOwned + Send + Sync,
    {
        matches!(result, Err(Error::Api(err)) if err.status == StatusCode::UNAUTHORIZED)
    }
}

impl<S, T> HttpClient for Client<S, T>
where
    S: Send + Sync,
    T: HttpClient + Send + Sync,
{
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, Box<dyn std::error::Error + Send + Sync + 'static>>
    {
        self.inner.send_http(request).await
    }
}

impl<S, T> ApiClient for Client<S, T>
where
    S: StoreTrait<TokenKind, String> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: ApiClient + Send + Sync,
{
    fn base_uri(&self) -> String {
        self.inner.base_uri()
    }
    async fn send_api<P, I, O>(&self, request: &ApiRequest<P, I>) -> Result<ApiResponse<O>>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        O: DeserializeOwned + Send + Sync,
    {
        let result = self.inner.send_api(request).await;
        if !Self::is_unauthorized(&result) {
            return result;
        }
        // Recover the session, then replay the original request exactly
        // once. A second 401 surfaces as-is and never triggers another
        // refresh for this request.
        self.refresh_session().await?;
        self.inner.send_api(request).await
    }
}

pub struct Store<S> {
    inner: S,
    endpoint: RwLock<String>,
}

impl<S> Store<S> {
    pub fn new(inner: S, initial_endpoint: String) -> Self {
        Self { inner, endpoint: RwLock::new(initial_endpoint) }
    }
    pub fn get_endpoint(&self) -> String {
        self.endpoint.read().expect("failed to read endpoint").clone()
    }
}

impl<S, K, V> StoreTrait<K, V> for Store<S>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send,
    S: StoreTrait<K, V> + Sync,
{
    type Error = S::Error;

    async fn get(&self, key: &K) -> core::result::Result<Option<V>, Self::Error> {
        self.inner.get(key).await
    }
    async fn set(&self, key: K, value: V) -> core::result::Result<(), Self::Error> {
        self.inner.set(key, value).await
    }
    async fn del(&self, key: &K) -> core::result::Result<(), Self::Error> {
        self.inner.del(key).await
    }
    async fn clear(&self) -> core::result::Result<(), Self::Error> {
        self.inner.clear().await
    }
}
