use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::api::client::SessionApi;
use crate::auth::models::{Credentials, SessionState, SessionUser};
use crate::error::AppError;
use crate::navigation::{Navigator, LOGIN_PATH};

/// Handle returned by [`SessionStore::subscribe`].
pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: SessionState,
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_id: SubscriptionId,
    signed_out: bool,
}

/// The one session store of the app.
///
/// Starts in [`SessionState::Loading`]. Listeners are called synchronously on
/// every state change, outside the lock, in subscription order.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.read(|inner| inner.state.clone())
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state().user().cloned()
    }

    /// `true` while the anonymous state comes from [`SessionStore::sign_out`],
    /// which has already navigated to the login page.
    pub fn signed_out(&self) -> bool {
        self.read(|inner| inner.signed_out)
    }

    /// Register `listener`. It is called once right away with the current
    /// state, then on every change until [`SessionStore::unsubscribe`].
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, current) = self.write(|inner| {
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, listener.clone());
            (id, inner.state.clone())
        });
        listener(&current);
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.write(|inner| inner.listeners.remove(&id).is_some())
    }

    pub fn subscriber_count(&self) -> usize {
        self.read(|inner| inner.listeners.len())
    }

    fn set(&self, state: SessionState) {
        self.publish(state, false);
    }

    fn publish(&self, state: SessionState, signed_out: bool) {
        let listeners: Vec<Listener> = self.write(|inner| {
            inner.state = state.clone();
            inner.signed_out = signed_out;
            inner.listeners.values().cloned().collect()
        });
        for listener in listeners {
            listener(&state);
        }
    }

    /// Ask the backend who is signed in. Any failure resolves to anonymous.
    pub async fn resolve(&self, api: &dyn SessionApi) -> SessionState {
        let state = match api.current_user().await {
            Ok(user) => SessionState::from(user),
            Err(e) => {
                tracing::warn!("Could not resolve session: {e}");
                SessionState::Anonymous
            }
        };
        match state.user() {
            Some(user) => tracing::info!("Session resolved for {}", user.username),
            None => tracing::info!("Session resolved: anonymous"),
        }
        self.set(state.clone());
        state
    }

    /// Resolve to anonymous without a round trip (e.g. misconfigured client).
    pub fn resolve_anonymous(&self) {
        self.set(SessionState::Anonymous);
    }

    /// Sign in with username and password, then re-resolve the session.
    pub async fn sign_in(
        &self,
        api: &dyn SessionApi,
        credentials: &Credentials,
    ) -> Result<SessionUser, AppError> {
        api.login(credentials).await?;
        self.confirm(api).await
    }

    /// Create an account, then re-resolve the session.
    pub async fn sign_up(
        &self,
        api: &dyn SessionApi,
        credentials: &Credentials,
    ) -> Result<SessionUser, AppError> {
        api.register(credentials).await?;
        self.confirm(api).await
    }

    async fn confirm(&self, api: &dyn SessionApi) -> Result<SessionUser, AppError> {
        self.resolve(api)
            .await
            .user()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }

    /// End the session remotely, clear local state and go to the login page.
    ///
    /// When the remote call fails the local state is left untouched.
    pub async fn sign_out(
        &self,
        api: &dyn SessionApi,
        navigator: &dyn Navigator,
    ) -> Result<(), AppError> {
        if let Err(e) = api.logout().await {
            tracing::error!("Logout error: {e}");
            return Err(e);
        }
        self.publish(SessionState::Anonymous, true);
        navigator.navigate(LOGIN_PATH);
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&Inner) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}
