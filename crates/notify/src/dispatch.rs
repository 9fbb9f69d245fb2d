// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::notification::Notification;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// Webhook request timeout. Delivery is detached, so a generous value
/// costs the workflow nothing.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors internal to notification delivery.
///
/// These are always caught and logged by the dispatcher; they never
/// cross the crate boundary as failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// The webhook request failed in transit.
    #[error("webhook request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The webhook endpoint answered with a non-success status.
    #[error("webhook returned status {status}")]
    Status {
        /// The response status code.
        status: reqwest::StatusCode,
    },
    /// No webhook URL is configured for this notification kind.
    #[error("no webhook URL configured for '{kind}' notifications")]
    NotConfigured {
        /// The notification kind.
        kind: &'static str,
    },
}

enum Delivery {
    /// No webhooks configured; every dispatch is a logged no-op.
    Disabled,
    /// Deliver to per-kind Discord webhook URLs.
    Webhook {
        client: reqwest::Client,
        participation_url: Option<String>,
        milestone_url: Option<String>,
    },
}

/// Fire-and-forget notification dispatcher.
///
/// Constructed once in `main` and shared via `Arc`; there is no
/// ambient singleton. Delivery failures are logged at `warn` and
/// swallowed: the approval and submission paths must never block on,
/// or fail because of, a webhook.
pub struct Dispatcher {
    delivery: Delivery,
}

impl Dispatcher {
    /// Creates a dispatcher that drops every notification.
    ///
    /// Used when no webhook URLs are configured, and in tests.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            delivery: Delivery::Disabled,
        }
    }

    /// Creates a webhook dispatcher with per-kind URLs.
    ///
    /// A `None` URL disables that kind only.
    ///
    /// # Arguments
    ///
    /// * `participation_url` - Webhook for submission notifications
    /// * `milestone_url` - Webhook for milestone notifications
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::ClientBuild` if the HTTP client cannot be
    /// constructed.
    pub fn webhook(
        participation_url: Option<String>,
        milestone_url: Option<String>,
    ) -> Result<Self, NotifyError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(NotifyError::ClientBuild)?;

        Ok(Self {
            delivery: Delivery::Webhook {
                client,
                participation_url,
                milestone_url,
            },
        })
    }

    /// Delivers a notification, logging and swallowing any failure.
    pub async fn dispatch(&self, notification: Notification) {
        match self.try_dispatch(&notification).await {
            Ok(()) => debug!(%notification, "notification delivered"),
            Err(err) => warn!(%notification, error = %err, "notification delivery failed"),
        }
    }

    /// Spawns delivery onto the runtime and returns immediately.
    ///
    /// The workflow's success path does not await the outcome.
    pub fn dispatch_detached(self: &Arc<Self>, notification: Notification) {
        let dispatcher: Arc<Self> = Arc::clone(self);
        tokio::spawn(async move {
            dispatcher.dispatch(notification).await;
        });
    }

    async fn try_dispatch(&self, notification: &Notification) -> Result<(), NotifyError> {
        let Delivery::Webhook {
            client,
            participation_url,
            milestone_url,
        } = &self.delivery
        else {
            debug!(%notification, "dispatcher disabled, dropping notification");
            return Ok(());
        };

        let url: &str = match notification {
            Notification::ParticipationSubmitted { .. } => participation_url.as_deref(),
            Notification::MilestoneReached { .. } => milestone_url.as_deref(),
        }
        .ok_or(NotifyError::NotConfigured {
            kind: notification.kind(),
        })?;

        let payload = notification.payload(OffsetDateTime::now_utc());
        let response = client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(NotifyError::Request)?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status { status });
        }

        Ok(())
    }
}
