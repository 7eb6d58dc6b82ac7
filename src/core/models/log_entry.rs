use serde::{Deserialize, Serialize};

/// Category of an administrative operation.
///
/// The server sends these as small integer codes in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    UserMgmt,
    ChannelMgmt,
    SystemConfig,
    RedemptionMgmt,
    LogMgmt,
    Unknown,
}

impl ActionType {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ActionType::UserMgmt,
            2 => ActionType::ChannelMgmt,
            3 => ActionType::SystemConfig,
            4 => ActionType::RedemptionMgmt,
            5 => ActionType::LogMgmt,
            _ => ActionType::Unknown,
        }
    }

    /// Wire code, `None` for `Unknown`.
    pub fn code(self) -> Option<i64> {
        match self {
            ActionType::UserMgmt => Some(1),
            ActionType::ChannelMgmt => Some(2),
            ActionType::SystemConfig => Some(3),
            ActionType::RedemptionMgmt => Some(4),
            ActionType::LogMgmt => Some(5),
            ActionType::Unknown => None,
        }
    }

    /// Human-readable label shown in tables.
    pub fn label(self) -> &'static str {
        match self {
            ActionType::UserMgmt => "user mgmt",
            ActionType::ChannelMgmt => "channel mgmt",
            ActionType::SystemConfig => "system config",
            ActionType::RedemptionMgmt => "redemption mgmt",
            ActionType::LogMgmt => "log mgmt",
            ActionType::Unknown => "unknown",
        }
    }

    /// Parse the short names accepted on the command line.
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "user" | "users" | "1" => Some(ActionType::UserMgmt),
            "channel" | "channels" | "2" => Some(ActionType::ChannelMgmt),
            "config" | "system" | "3" => Some(ActionType::SystemConfig),
            "redemption" | "redemptions" | "4" => Some(ActionType::RedemptionMgmt),
            "log" | "logs" | "5" => Some(ActionType::LogMgmt),
            _ => None,
        }
    }
}

/// A single audit record as returned by the server.
///
/// Entries are immutable once received; the cache only ever replaces
/// them wholesale at a given offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub created_at: i64,
    #[serde(default)]
    pub username: String,
    #[serde(rename = "type", default)]
    pub type_code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_user: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl LogEntry {
    pub fn action_type(&self) -> ActionType {
        ActionType::from_code(self.type_code)
    }

    /// Target user, treating an empty string the same as absent.
    pub fn target(&self) -> Option<&str> {
        self.target_user.as_deref().filter(|t| !t.is_empty())
    }
}
