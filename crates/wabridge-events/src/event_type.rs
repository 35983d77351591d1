//! Event type tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownEventType;

/// Identity of one kind of client event, used as the dispatch key.
///
/// Discriminants run from `1` to `48` in catalogue order. The values `0` and
/// `49` are reserved as the first and last sentinels of the range and never
/// name a real event; [`EventType::try_from`] rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventType {
    /// App state patch received.
    AppState = 1,
    /// App state resync finished.
    AppStateSyncComplete,
    /// Chat archived or unarchived.
    Archive,
    /// Verified business name changed.
    BusinessName,
    /// Call accepted on another device.
    CallAccept,
    /// Incoming call offer.
    CallOffer,
    /// Incoming group call notice.
    CallOfferNotice,
    /// Call relay latency report.
    CallRelayLatency,
    /// Call ended.
    CallTerminate,
    /// Typing or recording state in a chat.
    ChatPresence,
    /// Server rejected the client version.
    ClientOutdated,
    /// Connection established and authenticated.
    Connected,
    /// Server refused the connection.
    ConnectFailure,
    /// Contact entry changed.
    Contact,
    /// Chat deleted.
    DeleteChat,
    /// Message deleted for the current user only.
    DeleteForMe,
    /// Connection dropped.
    Disconnected,
    /// Group metadata changed.
    GroupInfo,
    /// History sync blob received.
    HistorySync,
    /// Contact identity key changed.
    IdentityChange,
    /// Joined or was added to a group.
    JoinedGroup,
    /// Keepalive pings succeed again.
    KeepAliveRestored,
    /// Keepalive ping timed out.
    KeepAliveTimeout,
    /// Device was logged out.
    LoggedOut,
    /// Chat marked as read or unread.
    MarkChatAsRead,
    /// Media retry receipt received.
    MediaRetry,
    /// Message received.
    Message,
    /// Chat muted or unmuted.
    Mute,
    /// Offline message backlog drained.
    OfflineSyncCompleted,
    /// Preview of the offline backlog.
    OfflineSyncPreview,
    /// Pairing failed.
    PairError,
    /// Pairing succeeded.
    PairSuccess,
    /// Profile picture changed.
    Picture,
    /// Chat pinned or unpinned.
    Pin,
    /// Contact online status changed.
    Presence,
    /// Privacy settings changed.
    PrivacySettings,
    /// Contact push name changed.
    PushName,
    /// Own push name changed.
    PushNameSetting,
    /// Pairing QR codes issued.
    #[serde(rename = "QR")]
    Qr,
    /// QR code scanned by a phone without multi-device support.
    #[serde(rename = "QRScannedWithoutMultidevice")]
    QrScannedWithoutMultidevice,
    /// Delivery or read receipt.
    Receipt,
    /// Message starred or unstarred.
    Star,
    /// Stream error from the server.
    StreamError,
    /// Another client took over the stream.
    StreamReplaced,
    /// Account temporarily banned.
    TemporaryBan,
    /// Unarchive-on-new-message setting changed.
    UnarchiveChatSetting,
    /// Message could not be decrypted.
    UndecryptableMessage,
    /// Unrecognised call signalling node.
    UnknownCallEvent,
}

impl EventType {
    /// Number of event types in the catalogue.
    pub const COUNT: usize = 48;

    /// Every event type, in catalogue order.
    pub const ALL: [EventType; Self::COUNT] = [
        Self::AppState,
        Self::AppStateSyncComplete,
        Self::Archive,
        Self::BusinessName,
        Self::CallAccept,
        Self::CallOffer,
        Self::CallOfferNotice,
        Self::CallRelayLatency,
        Self::CallTerminate,
        Self::ChatPresence,
        Self::ClientOutdated,
        Self::Connected,
        Self::ConnectFailure,
        Self::Contact,
        Self::DeleteChat,
        Self::DeleteForMe,
        Self::Disconnected,
        Self::GroupInfo,
        Self::HistorySync,
        Self::IdentityChange,
        Self::JoinedGroup,
        Self::KeepAliveRestored,
        Self::KeepAliveTimeout,
        Self::LoggedOut,
        Self::MarkChatAsRead,
        Self::MediaRetry,
        Self::Message,
        Self::Mute,
        Self::OfflineSyncCompleted,
        Self::OfflineSyncPreview,
        Self::PairError,
        Self::PairSuccess,
        Self::Picture,
        Self::Pin,
        Self::Presence,
        Self::PrivacySettings,
        Self::PushName,
        Self::PushNameSetting,
        Self::Qr,
        Self::QrScannedWithoutMultidevice,
        Self::Receipt,
        Self::Star,
        Self::StreamError,
        Self::StreamReplaced,
        Self::TemporaryBan,
        Self::UnarchiveChatSetting,
        Self::UndecryptableMessage,
        Self::UnknownCallEvent,
    ];

    /// Get the display name of the event type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AppState => "AppState",
            Self::AppStateSyncComplete => "AppStateSyncComplete",
            Self::Archive => "Archive",
            Self::BusinessName => "BusinessName",
            Self::CallAccept => "CallAccept",
            Self::CallOffer => "CallOffer",
            Self::CallOfferNotice => "CallOfferNotice",
            Self::CallRelayLatency => "CallRelayLatency",
            Self::CallTerminate => "CallTerminate",
            Self::ChatPresence => "ChatPresence",
            Self::ClientOutdated => "ClientOutdated",
            Self::Connected => "Connected",
            Self::ConnectFailure => "ConnectFailure",
            Self::Contact => "Contact",
            Self::DeleteChat => "DeleteChat",
            Self::DeleteForMe => "DeleteForMe",
            Self::Disconnected => "Disconnected",
            Self::GroupInfo => "GroupInfo",
            Self::HistorySync => "HistorySync",
            Self::IdentityChange => "IdentityChange",
            Self::JoinedGroup => "JoinedGroup",
            Self::KeepAliveRestored => "KeepAliveRestored",
            Self::KeepAliveTimeout => "KeepAliveTimeout",
            Self::LoggedOut => "LoggedOut",
            Self::MarkChatAsRead => "MarkChatAsRead",
            Self::MediaRetry => "MediaRetry",
            Self::Message => "Message",
            Self::Mute => "Mute",
            Self::OfflineSyncCompleted => "OfflineSyncCompleted",
            Self::OfflineSyncPreview => "OfflineSyncPreview",
            Self::PairError => "PairError",
            Self::PairSuccess => "PairSuccess",
            Self::Picture => "Picture",
            Self::Pin => "Pin",
            Self::Presence => "Presence",
            Self::PrivacySettings => "PrivacySettings",
            Self::PushName => "PushName",
            Self::PushNameSetting => "PushNameSetting",
            Self::Qr => "QR",
            Self::QrScannedWithoutMultidevice => "QRScannedWithoutMultidevice",
            Self::Receipt => "Receipt",
            Self::Star => "Star",
            Self::StreamError => "StreamError",
            Self::StreamReplaced => "StreamReplaced",
            Self::TemporaryBan => "TemporaryBan",
            Self::UnarchiveChatSetting => "UnarchiveChatSetting",
            Self::UndecryptableMessage => "UndecryptableMessage",
            Self::UnknownCallEvent => "UnknownCallEvent",
        }
    }

    /// Get the numeric discriminant of the event type.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for EventType {
    type Error = UnknownEventType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // 0 and 49 are the range sentinels.
        let slot = usize::from(value)
            .checked_sub(1)
            .ok_or_else(|| UnknownEventType(value.to_string()))?;
        Self::ALL
            .get(slot)
            .copied()
            .ok_or_else(|| UnknownEventType(value.to_string()))
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}
