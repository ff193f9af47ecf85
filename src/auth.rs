pub mod guard;
pub mod models;
pub mod session;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::ApiClient;
use crate::auth::models::{Credentials, SessionState, SessionUser};
use crate::auth::session::SessionStore;
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::navigation::Navigator;

/// Session handle shared with the whole component tree.
///
/// `state` mirrors the [`SessionStore`] through a subscription held for the
/// lifetime of [`AuthProvider`].
#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<SessionState>,
    store: SessionStore,
    config: ClientConfig,
}

impl AuthContext {
    pub fn user(&self) -> Option<SessionUser> {
        self.state.get().user().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.get().is_loading()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn api(&self) -> Result<ApiClient, AppError> {
        ApiClient::new(&self.config)
    }

    /// Re-run the "who am I" round trip.
    pub async fn refresh(&self) -> SessionState {
        match self.api() {
            Ok(api) => self.store.resolve(&api).await,
            Err(e) => {
                tracing::error!("Cannot resolve session: {e}");
                self.store.resolve_anonymous();
                SessionState::Anonymous
            }
        }
    }

    pub async fn sign_in(&self, credentials: Credentials) -> Result<SessionUser, AppError> {
        self.store.sign_in(&self.api()?, &credentials).await
    }

    pub async fn sign_up(&self, credentials: Credentials) -> Result<SessionUser, AppError> {
        self.store.sign_up(&self.api()?, &credentials).await
    }

    pub async fn sign_out(&self, navigator: &dyn Navigator) -> Result<(), AppError> {
        self.store.sign_out(&self.api()?, navigator).await
    }
}

/// Get the session handle provided by [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Owns the app's single [`SessionStore`] and resolves it once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::compiled);
    let store = SessionStore::new();
    let state = RwSignal::new(SessionState::Loading);

    let subscription = store.subscribe(move |s| {
        let _ = state.try_set(s.clone());
    });
    {
        let store = store.clone();
        on_cleanup(move || {
            store.unsubscribe(subscription);
        });
    }

    let auth = AuthContext {
        state,
        store,
        config,
    };
    provide_context(auth.clone());

    // Effects only run in the browser, so the round trip never happens during SSR.
    Effect::new(move |_| {
        let auth = auth.clone();
        spawn_local(async move {
            auth.refresh().await;
        });
    });

    children()
}
