//! Typed service bindings over any [`ApiClient`](cuzdanim_http::ApiClient).
//!
//! Every method decodes the response envelope and returns the payload;
//! envelope-level failures (`isSuccess: false`) surface as
//! [`Error::Api`](cuzdanim_http::Error::Api).

pub mod accounts;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod goals;
pub mod reports;
pub mod transactions;

use cuzdanim_http::ApiClient;
use std::sync::Arc;

/// The root of the service tree, one sub-service per API namespace.
pub struct Service<T>
where
    T: ApiClient + Send + Sync,
{
    pub auth: auth::Service<T>,
    pub accounts: accounts::Service<T>,
    pub transactions: transactions::Service<T>,
    pub budgets: budgets::Service<T>,
    pub goals: goals::Service<T>,
    pub categories: categories::Service<T>,
    pub dashboard: dashboard::Service<T>,
    pub reports: reports::Service<T>,
}

impl<T> Service<T>
where
    T: ApiClient + Send + Sync,
{
    pub fn new(api: Arc<T>) -> Self {
        Self {
            auth: auth::Service::new(Arc::clone(&api)),
            accounts: accounts::Service::new(Arc::clone(&api)),
            transactions: transactions::Service::new(Arc::clone(&api)),
            budgets: budgets::Service::new(Arc::clone(&api)),
            goals: goals::Service::new(Arc::clone(&api)),
            categories: categories::Service::new(Arc::clone(&api)),
            dashboard: dashboard::Service::new(Arc::clone(&api)),
            reports: reports::Service::new(api),
        }
    }
}
