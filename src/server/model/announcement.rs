//! Faction status panels published by the announcement service.
//!
//! A panel is the transport-neutral form of a Discord embed: the service renders the current
//! factions into panels, and the announcement channel turns each panel into a message.

use crate::server::model::faction::Faction;

pub const STATUS_PANEL_TITLE: &str = "Faction Status Update";
pub const STATUS_PANEL_DESCRIPTION: &str = "Current status of all factions";
/// `#0099ff`
pub const STATUS_PANEL_COLOR: u32 = 0x0099ff;
/// Discord rejects embeds with more fields than this.
pub const MAX_PANEL_FIELDS: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusPanel {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<PanelField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl PanelField {
    fn for_faction(faction: &Faction) -> Self {
        Self {
            name: faction.name.clone(),
            value: format!(
                "Leader: {}\nMembers: {}",
                faction.leader_display(),
                faction.members.count
            ),
            inline: false,
        }
    }
}

impl StatusPanel {
    fn with_fields(fields: Vec<PanelField>) -> Self {
        Self {
            title: STATUS_PANEL_TITLE.to_string(),
            description: STATUS_PANEL_DESCRIPTION.to_string(),
            color: STATUS_PANEL_COLOR,
            fields,
        }
    }

    /// Renders a full snapshot of the given factions.
    ///
    /// Always returns at least one panel, so an empty store still produces an announcement.
    /// Factions beyond the per-embed field limit spill into further panels, in order.
    pub fn snapshot(factions: &[Faction]) -> Vec<Self> {
        if factions.is_empty() {
            return vec![Self::with_fields(Vec::new())];
        }

        factions
            .chunks(MAX_PANEL_FIELDS)
            .map(|chunk| Self::with_fields(chunk.iter().map(PanelField::for_faction).collect()))
            .collect()
    }
}
