//! The closed set of client events.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::event_type::EventType;
use crate::payload;

/// Every event the chat client can emit.
///
/// Each variant wraps the record of the same name from [`payload`]. The
/// conversion from variant to [`EventType`] is exhaustive, so adding a
/// record without a tag is a compile error. The serialized `type` field is
/// always the tag's [`EventType::as_str`] name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(missing_docs)]
pub enum Event {
    AppState(payload::AppState),
    AppStateSyncComplete(payload::AppStateSyncComplete),
    Archive(payload::Archive),
    BusinessName(payload::BusinessName),
    CallAccept(payload::CallAccept),
    CallOffer(payload::CallOffer),
    CallOfferNotice(payload::CallOfferNotice),
    CallRelayLatency(payload::CallRelayLatency),
    CallTerminate(payload::CallTerminate),
    ChatPresence(payload::ChatPresence),
    ClientOutdated(payload::ClientOutdated),
    Connected(payload::Connected),
    ConnectFailure(payload::ConnectFailure),
    Contact(payload::Contact),
    DeleteChat(payload::DeleteChat),
    DeleteForMe(payload::DeleteForMe),
    Disconnected(payload::Disconnected),
    GroupInfo(payload::GroupInfo),
    HistorySync(payload::HistorySync),
    IdentityChange(payload::IdentityChange),
    JoinedGroup(payload::JoinedGroup),
    KeepAliveRestored(payload::KeepAliveRestored),
    KeepAliveTimeout(payload::KeepAliveTimeout),
    LoggedOut(payload::LoggedOut),
    MarkChatAsRead(payload::MarkChatAsRead),
    MediaRetry(payload::MediaRetry),
    Message(payload::Message),
    Mute(payload::Mute),
    OfflineSyncCompleted(payload::OfflineSyncCompleted),
    OfflineSyncPreview(payload::OfflineSyncPreview),
    PairError(payload::PairError),
    PairSuccess(payload::PairSuccess),
    Picture(payload::Picture),
    Pin(payload::Pin),
    Presence(payload::Presence),
    PrivacySettings(payload::PrivacySettings),
    PushName(payload::PushName),
    PushNameSetting(payload::PushNameSetting),
    #[serde(rename = "QR")]
    Qr(payload::Qr),
    #[serde(rename = "QRScannedWithoutMultidevice")]
    QrScannedWithoutMultidevice(payload::QrScannedWithoutMultidevice),
    Receipt(payload::Receipt),
    Star(payload::Star),
    StreamError(payload::StreamError),
    StreamReplaced(payload::StreamReplaced),
    TemporaryBan(payload::TemporaryBan),
    #[serde(rename = "UnarchiveChatSetting")]
    UnarchiveChatsSetting(payload::UnarchiveChatsSetting),
    UndecryptableMessage(payload::UndecryptableMessage),
    UnknownCallEvent(payload::UnknownCallEvent),
}

impl Event {
    /// Get the dispatch tag of this event.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        match self {
            Self::AppState(_) => EventType::AppState,
            Self::AppStateSyncComplete(_) => EventType::AppStateSyncComplete,
            Self::Archive(_) => EventType::Archive,
            Self::BusinessName(_) => EventType::BusinessName,
            Self::CallAccept(_) => EventType::CallAccept,
            Self::CallOffer(_) => EventType::CallOffer,
            Self::CallOfferNotice(_) => EventType::CallOfferNotice,
            Self::CallRelayLatency(_) => EventType::CallRelayLatency,
            Self::CallTerminate(_) => EventType::CallTerminate,
            Self::ChatPresence(_) => EventType::ChatPresence,
            Self::ClientOutdated(_) => EventType::ClientOutdated,
            Self::Connected(_) => EventType::Connected,
            Self::ConnectFailure(_) => EventType::ConnectFailure,
            Self::Contact(_) => EventType::Contact,
            Self::DeleteChat(_) => EventType::DeleteChat,
            Self::DeleteForMe(_) => EventType::DeleteForMe,
            Self::Disconnected(_) => EventType::Disconnected,
            Self::GroupInfo(_) => EventType::GroupInfo,
            Self::HistorySync(_) => EventType::HistorySync,
            Self::IdentityChange(_) => EventType::IdentityChange,
            Self::JoinedGroup(_) => EventType::JoinedGroup,
            Self::KeepAliveRestored(_) => EventType::KeepAliveRestored,
            Self::KeepAliveTimeout(_) => EventType::KeepAliveTimeout,
            Self::LoggedOut(_) => EventType::LoggedOut,
            Self::MarkChatAsRead(_) => EventType::MarkChatAsRead,
            Self::MediaRetry(_) => EventType::MediaRetry,
            Self::Message(_) => EventType::Message,
            Self::Mute(_) => EventType::Mute,
            Self::OfflineSyncCompleted(_) => EventType::OfflineSyncCompleted,
            Self::OfflineSyncPreview(_) => EventType::OfflineSyncPreview,
            Self::PairError(_) => EventType::PairError,
            Self::PairSuccess(_) => EventType::PairSuccess,
            Self::Picture(_) => EventType::Picture,
            Self::Pin(_) => EventType::Pin,
            Self::Presence(_) => EventType::Presence,
            Self::PrivacySettings(_) => EventType::PrivacySettings,
            Self::PushName(_) => EventType::PushName,
            Self::PushNameSetting(_) => EventType::PushNameSetting,
            Self::Qr(_) => EventType::Qr,
            Self::QrScannedWithoutMultidevice(_) => EventType::QrScannedWithoutMultidevice,
            Self::Receipt(_) => EventType::Receipt,
            Self::Star(_) => EventType::Star,
            Self::StreamError(_) => EventType::StreamError,
            Self::StreamReplaced(_) => EventType::StreamReplaced,
            Self::TemporaryBan(_) => EventType::TemporaryBan,
            Self::UnarchiveChatsSetting(_) => EventType::UnarchiveChatSetting,
            Self::UndecryptableMessage(_) => EventType::UndecryptableMessage,
            Self::UnknownCallEvent(_) => EventType::UnknownCallEvent,
        }
    }

    /// Convert an opaque client payload into a typed event.
    ///
    /// The payload must be one of the [`payload`] records. Anything else is
    /// handed back untouched so the caller can describe it.
    ///
    /// # Errors
    ///
    /// Returns the original box when its concrete type is not in the
    /// catalogue.
    pub fn from_any(raw: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        take(raw, Self::AppState)
            .or_else(|raw| take(raw, Self::AppStateSyncComplete))
            .or_else(|raw| take(raw, Self::Archive))
            .or_else(|raw| take(raw, Self::BusinessName))
            .or_else(|raw| take(raw, Self::CallAccept))
            .or_else(|raw| take(raw, Self::CallOffer))
            .or_else(|raw| take(raw, Self::CallOfferNotice))
            .or_else(|raw| take(raw, Self::CallRelayLatency))
            .or_else(|raw| take(raw, Self::CallTerminate))
            .or_else(|raw| take(raw, Self::ChatPresence))
            .or_else(|raw| take(raw, Self::ClientOutdated))
            .or_else(|raw| take(raw, Self::Connected))
            .or_else(|raw| take(raw, Self::ConnectFailure))
            .or_else(|raw| take(raw, Self::Contact))
            .or_else(|raw| take(raw, Self::DeleteChat))
            .or_else(|raw| take(raw, Self::DeleteForMe))
            .or_else(|raw| take(raw, Self::Disconnected))
            .or_else(|raw| take(raw, Self::GroupInfo))
            .or_else(|raw| take(raw, Self::HistorySync))
            .or_else(|raw| take(raw, Self::IdentityChange))
            .or_else(|raw| take(raw, Self::JoinedGroup))
            .or_else(|raw| take(raw, Self::KeepAliveRestored))
            .or_else(|raw| take(raw, Self::KeepAliveTimeout))
            .or_else(|raw| take(raw, Self::LoggedOut))
            .or_else(|raw| take(raw, Self::MarkChatAsRead))
            .or_else(|raw| take(raw, Self::MediaRetry))
            .or_else(|raw| take(raw, Self::Message))
            .or_else(|raw| take(raw, Self::Mute))
            .or_else(|raw| take(raw, Self::OfflineSyncCompleted))
            .or_else(|raw| take(raw, Self::OfflineSyncPreview))
            .or_else(|raw| take(raw, Self::PairError))
            .or_else(|raw| take(raw, Self::PairSuccess))
            .or_else(|raw| take(raw, Self::Picture))
            .or_else(|raw| take(raw, Self::Pin))
            .or_else(|raw| take(raw, Self::Presence))
            .or_else(|raw| take(raw, Self::PrivacySettings))
            .or_else(|raw| take(raw, Self::PushName))
            .or_else(|raw| take(raw, Self::PushNameSetting))
            .or_else(|raw| take(raw, Self::Qr))
            .or_else(|raw| take(raw, Self::QrScannedWithoutMultidevice))
            .or_else(|raw| take(raw, Self::Receipt))
            .or_else(|raw| take(raw, Self::Star))
            .or_else(|raw| take(raw, Self::StreamError))
            .or_else(|raw| take(raw, Self::StreamReplaced))
            .or_else(|raw| take(raw, Self::TemporaryBan))
            .or_else(|raw| take(raw, Self::UnarchiveChatsSetting))
            .or_else(|raw| take(raw, Self::UndecryptableMessage))
            .or_else(|raw| take(raw, Self::UnknownCallEvent))
    }
}

fn take<T: Any>(
    raw: Box<dyn Any + Send>,
    wrap: fn(T) -> Event,
) -> Result<Event, Box<dyn Any + Send>> {
    raw.downcast::<T>().map(|record| wrap(*record))
}
