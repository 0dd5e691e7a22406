//! Faction status announcements.
//!
//! After a faction is created, sabotaged or removed, the `AnnouncementService` posts a full
//! snapshot of every faction to the announcement channel. Announcing is best effort: failures
//! are logged and never reach the user who triggered the change.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, Timestamp},
    async_trait,
    http::Http,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::announcement::StatusPanel,
    service::faction::FactionService,
};

/// Destination for status panels.
#[async_trait]
pub trait AnnouncementChannel: Send + Sync {
    /// Publishes one panel as a single message.
    async fn publish(&self, panel: &StatusPanel) -> Result<(), AppError>;
}

/// Posts status panels as embeds to a Discord text channel.
pub struct DiscordAnnouncementChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordAnnouncementChannel {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }

    fn build_embed(panel: &StatusPanel) -> Result<CreateEmbed, AppError> {
        let now = Utc::now();
        let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: now.timestamp(),
                reason: e.to_string(),
            }
        })?;

        let embed = CreateEmbed::new()
            .title(&panel.title)
            .description(&panel.description)
            .color(panel.color)
            .fields(
                panel
                    .fields
                    .iter()
                    .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
            )
            .timestamp(timestamp);

        Ok(embed)
    }
}

#[async_trait]
impl AnnouncementChannel for DiscordAnnouncementChannel {
    async fn publish(&self, panel: &StatusPanel) -> Result<(), AppError> {
        let message = CreateMessage::new().embed(Self::build_embed(panel)?);

        self.channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
    channel: &'a dyn AnnouncementChannel,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection, channel: &'a dyn AnnouncementChannel) -> Self {
        Self { db, channel }
    }

    /// Publishes the current status of all factions, logging instead of returning failures.
    pub async fn announce(&self) {
        match self.publish_snapshot().await {
            Ok(panels) => tracing::debug!("Published faction status in {} panel(s)", panels),
            Err(e) => tracing::error!("Failed to publish faction status: {}", e),
        }
    }

    /// Loads every faction and publishes the snapshot, one message per panel.
    ///
    /// Stops at the first panel that fails to publish.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of panels published
    /// - `Err(AppError)` - Loading factions or publishing a panel failed
    async fn publish_snapshot(&self) -> Result<usize, AppError> {
        let factions = FactionService::new(self.db).list_all().await?;
        let panels = StatusPanel::snapshot(&factions);

        for panel in &panels {
            self.channel.publish(panel).await?;
        }

        Ok(panels.len())
    }
}

/// Runs an announcement on its own task, detached from the caller.
pub fn spawn_announcement(
    db: DatabaseConnection,
    channel: Arc<dyn AnnouncementChannel>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        AnnouncementService::new(&db, channel.as_ref())
            .announce()
            .await;
    })
}
