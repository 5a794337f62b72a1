use crate::domain::model::{AuthResponse, Credentials, Location, Registration, Session, User};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of "today" for date checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Persisted login state. `load` returns `None` when nobody is logged in.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;
    async fn register(&self, registration: &Registration) -> Result<AuthResponse>;
    async fn logout(&self, token: &str) -> Result<()>;
    async fn profile(&self, token: &str) -> Result<User>;
}

#[async_trait]
pub trait LocationApi: Send + Sync {
    async fn locations(&self) -> Result<Vec<Location>>;
}
