use crate::domain::model::{Credentials, Registration, Session, User};
use crate::domain::ports::{AuthApi, SessionStore};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Login state for one client, backed by an injected session store.
pub struct AuthContext<A: AuthApi, S: SessionStore> {
    api: A,
    store: S,
    session: Option<Session>,
}

impl<A: AuthApi, S: SessionStore> AuthContext<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            session: None,
        }
    }

    /// Build a context and pick up whatever session the store already holds.
    pub fn restore(api: A, store: S) -> Result<Self> {
        let session = store.load()?;
        if let Some(session) = &session {
            tracing::debug!("Restored session for {}", session.user.email);
        }
        Ok(Self {
            api,
            store,
            session,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<&User> {
        credentials.validate()?;
        let response = self.api.login(credentials).await?;
        self.start_session(response.into())
    }

    pub async fn register(&mut self, registration: &Registration) -> Result<&User> {
        registration.validate()?;
        let response = self.api.register(registration).await?;
        self.start_session(response.into())
    }

    fn start_session(&mut self, session: Session) -> Result<&User> {
        self.store.save(&session)?;
        tracing::info!("Logged in as {}", session.user.email);
        Ok(&self.session.insert(session).user)
    }

    /// Ends the session locally even when the server call fails.
    pub async fn logout(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            if let Err(e) = self.api.logout(&session.token).await {
                tracing::warn!("Server logout failed, clearing local session anyway: {}", e);
            }
        }
        self.store.clear()
    }

    /// Re-fetch the profile. An expired token ends the session.
    pub async fn refresh_profile(&mut self) -> Result<Option<&User>> {
        let Some(token) = self.token().map(str::to_string) else {
            return Ok(None);
        };

        match self.api.profile(&token).await {
            Ok(user) => {
                let session = Session { token, user };
                self.store.save(&session)?;
                Ok(Some(&self.session.insert(session).user))
            }
            Err(e) if e.is_auth_error() => {
                tracing::warn!("Session expired: {}", e);
                self.session = None;
                self.store.clear()?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::MemorySessionStore;
    use crate::domain::model::AuthResponse;
    use crate::utils::error::RentalError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn user(name: &str) -> User {
        User {
            id: "u1".to_string(),
            name: name.to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
        }
    }

    #[derive(Default)]
    struct FakeApi {
        reject_token: AtomicBool,
        fail_logout: bool,
    }

    #[async_trait]
    impl AuthApi for FakeApi {
        async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
            if credentials.password != "secret" {
                return Err(RentalError::Unauthorized {
                    message: "Invalid credentials".to_string(),
                });
            }
            Ok(AuthResponse {
                token: "tok-1".to_string(),
                user: user("Asha"),
            })
        }

        async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
            Ok(AuthResponse {
                token: "tok-new".to_string(),
                user: user(&registration.name),
            })
        }

        async fn logout(&self, _token: &str) -> Result<()> {
            if self.fail_logout {
                return Err(RentalError::ApiStatusError {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }

        async fn profile(&self, _token: &str) -> Result<User> {
            if self.reject_token.load(Ordering::SeqCst) {
                return Err(RentalError::Unauthorized {
                    message: "Token expired".to_string(),
                });
            }
            Ok(user("Asha K"))
        }
    }

    fn credentials(password: &str) -> Credentials {
        Credentials {
            email: "asha@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_persists_session() {
        tokio_test::block_on(async {
            let mut auth = AuthContext::new(FakeApi::default(), MemorySessionStore::new());
            assert!(!auth.is_authenticated());

            auth.login(&credentials("secret")).await.unwrap();
            assert!(auth.is_authenticated());
            assert_eq!(auth.token(), Some("tok-1"));
            assert_eq!(auth.store.load().unwrap().unwrap().token, "tok-1");
        });
    }

    #[test]
    fn test_failed_login_leaves_state_untouched() {
        tokio_test::block_on(async {
            let mut auth = AuthContext::new(FakeApi::default(), MemorySessionStore::new());
            let err = auth.login(&credentials("wrong")).await.unwrap_err();
            assert!(err.is_auth_error());
            assert!(!auth.is_authenticated());
            assert!(auth.store.load().unwrap().is_none());
        });
    }

    #[test]
    fn test_blank_login_never_reaches_api() {
        tokio_test::block_on(async {
            let mut auth = AuthContext::new(FakeApi::default(), MemorySessionStore::new());
            // FakeApi would answer Unauthorized for a wrong password
            let err = auth.login(&credentials("")).await.unwrap_err();
            assert!(matches!(
                err,
                RentalError::InvalidConfigValueError { ref field, .. } if field == "credentials.password"
            ));
            assert!(!auth.is_authenticated());
        });
    }

    #[test]
    fn test_register_starts_session() {
        tokio_test::block_on(async {
            let mut auth = AuthContext::new(FakeApi::default(), MemorySessionStore::new());
            let registration = Registration {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                password: "pw".to_string(),
                phone: None,
            };
            let user = auth.register(&registration).await.unwrap();
            assert_eq!(user.name, "Ravi");
            assert_eq!(auth.token(), Some("tok-new"));
        });
    }

    #[test]
    fn test_restore_and_logout_even_when_server_fails() {
        tokio_test::block_on(async {
            let store = MemorySessionStore::with_session(Session {
                token: "old".to_string(),
                user: user("Asha"),
            });
            let api = FakeApi {
                fail_logout: true,
                ..Default::default()
            };
            let mut auth = AuthContext::restore(api, store).unwrap();
            assert_eq!(auth.current_user().unwrap().name, "Asha");

            auth.logout().await.unwrap();
            assert!(!auth.is_authenticated());
            assert!(auth.store.load().unwrap().is_none());
        });
    }

    #[test]
    fn test_refresh_profile_updates_user() {
        tokio_test::block_on(async {
            let mut auth = AuthContext::new(FakeApi::default(), MemorySessionStore::new());
            assert!(auth.refresh_profile().await.unwrap().is_none());

            auth.login(&credentials("secret")).await.unwrap();
            let user = auth.refresh_profile().await.unwrap().unwrap();
            assert_eq!(user.name, "Asha K");
            assert_eq!(auth.store.load().unwrap().unwrap().user.name, "Asha K");
        });
    }

    #[test]
    fn test_expired_token_clears_session() {
        tokio_test::block_on(async {
            let mut auth = AuthContext::new(FakeApi::default(), MemorySessionStore::new());
            auth.login(&credentials("secret")).await.unwrap();
            auth.api.reject_token.store(true, Ordering::SeqCst);

            let err = auth.refresh_profile().await.unwrap_err();
            assert!(err.is_auth_error());
            assert!(!auth.is_authenticated());
            assert!(auth.store.load().unwrap().is_none());
        });
    }
}
