//! Cached view of the signed-in caller.
//!
//! `UserSession` is owned by whoever builds it; nothing in this crate holds a global one.
//! `refresh` re-reads roles, review ids and sign-in state from the server, and
//! `spawn_refresh` keeps doing so on an interval until its handle is dropped.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use uuid::Uuid;

use crate::{
    client::{
        api::{helper::ApiClient, ApplicationUserServiceClient, LoginServiceClient},
        model::error::ApiError,
    },
    model::operation::Role,
};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(120);

#[derive(Clone, Debug, Default)]
struct SessionSnapshot {
    is_logged_in: bool,
    roles: Vec<String>,
    user_reviews: Vec<Uuid>,
}

#[derive(Clone, Debug)]
pub struct UserSession {
    api: ApiClient,
    snapshot: Arc<RwLock<SessionSnapshot>>,
}

impl UserSession {
    /// Creates an empty session, call `refresh` to populate it.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            snapshot: Arc::new(RwLock::new(SessionSnapshot::default())),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Re-reads the caller's state from the server.
    ///
    /// The cached state is only replaced when every call succeeds at the transport level.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let users = ApplicationUserServiceClient::new(&self.api);

        let is_logged_in = LoginServiceClient::new(&self.api)
            .is_logged_in()
            .await?
            .was_successful;
        let roles = users.get_roles().await?.object.unwrap_or_default();
        let user_reviews = users.get_user_reviews().await?.object.unwrap_or_default();

        *self.snapshot.write().await = SessionSnapshot {
            is_logged_in,
            roles,
            user_reviews,
        };

        Ok(())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.snapshot.read().await.is_logged_in
    }

    pub async fn is_in_role(&self, role: &str) -> bool {
        self.snapshot.read().await.roles.iter().any(|held| held == role)
    }

    pub async fn is_admin(&self) -> bool {
        self.is_in_role(Role::SuperAdmin.as_str()).await
    }

    pub async fn user_reviews(&self) -> Vec<Uuid> {
        self.snapshot.read().await.user_reviews.clone()
    }

    pub async fn has_reviewed(&self, review_id: Uuid) -> bool {
        self.snapshot.read().await.user_reviews.contains(&review_id)
    }

    /// Refreshes the session every `period` on a background task.
    ///
    /// The first refresh runs immediately. Failures are logged and retried on the next tick.
    pub fn spawn_refresh(&self, period: Duration) -> RefreshHandle {
        let session = self.clone();

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if let Err(e) = session.refresh().await {
                    tracing::warn!("Failed to refresh user session: {}", e);
                }
            }
        });

        RefreshHandle { task }
    }
}

/// Stops the refresh loop when dropped.
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
