//! Gateway event names and thread archive durations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when parsing an unknown event name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown event name: {0}")]
pub struct UnknownEvent(pub String);

/// Gateway events the mod log listens to.
///
/// Not every gateway event is listed (raw events are not), only those
/// the mod log uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    GuildChannelCreate,
    GuildChannelDelete,
    GuildChannelUpdate,
    GuildRoleCreate,
    GuildRoleDelete,
    GuildRoleUpdate,
    GuildUpdate,

    MemberJoin,
    MemberRemove,
    MemberBan,
    MemberUnban,
    MemberUpdate,

    MessageDelete,
    MessageEdit,

    VoiceStateUpdate,
}

impl Event {
    /// All events, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::GuildChannelCreate,
        Self::GuildChannelDelete,
        Self::GuildChannelUpdate,
        Self::GuildRoleCreate,
        Self::GuildRoleDelete,
        Self::GuildRoleUpdate,
        Self::GuildUpdate,
        Self::MemberJoin,
        Self::MemberRemove,
        Self::MemberBan,
        Self::MemberUnban,
        Self::MemberUpdate,
        Self::MessageDelete,
        Self::MessageEdit,
        Self::VoiceStateUpdate,
    ];

    /// Returns the event name as used by the gateway listener.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GuildChannelCreate => "guild_channel_create",
            Self::GuildChannelDelete => "guild_channel_delete",
            Self::GuildChannelUpdate => "guild_channel_update",
            Self::GuildRoleCreate => "guild_role_create",
            Self::GuildRoleDelete => "guild_role_delete",
            Self::GuildRoleUpdate => "guild_role_update",
            Self::GuildUpdate => "guild_update",
            Self::MemberJoin => "member_join",
            Self::MemberRemove => "member_remove",
            Self::MemberBan => "member_ban",
            Self::MemberUnban => "member_unban",
            Self::MemberUpdate => "member_update",
            Self::MessageDelete => "message_delete",
            Self::MessageEdit => "message_edit",
            Self::VoiceStateUpdate => "voice_state_update",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Event {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEvent(s.to_owned()))
    }
}

/// Auto-archive durations Discord accepts for threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreadArchiveTime {
    Hour,
    Day,
    ThreeDay,
    Week,
}

impl ThreadArchiveTime {
    /// Returns the duration in minutes.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Hour => 60,
            Self::Day => 1440,
            Self::ThreeDay => 4320,
            Self::Week => 10080,
        }
    }

    /// Returns the variant for an exact minute count.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            60 => Some(Self::Hour),
            1440 => Some(Self::Day),
            4320 => Some(Self::ThreeDay),
            10080 => Some(Self::Week),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_parse_back() {
        for event in Event::ALL {
            assert_eq!(event.as_str().parse::<Event>(), Ok(event));
        }
    }

    #[test]
    fn test_unknown_event() {
        assert_eq!(
            "guild_create".parse::<Event>(),
            Err(UnknownEvent("guild_create".to_owned()))
        );
    }

    #[test]
    fn test_event_serde_name_matches_display() {
        let json = serde_json::to_string(&Event::VoiceStateUpdate).unwrap();
        assert_eq!(json, "\"voice_state_update\"");
    }

    #[test]
    fn test_thread_archive_minutes() {
        assert_eq!(ThreadArchiveTime::ThreeDay.minutes(), 4320);
        assert_eq!(ThreadArchiveTime::from_minutes(10080), Some(ThreadArchiveTime::Week));
        assert_eq!(ThreadArchiveTime::from_minutes(30), None);
    }
}
