//! Event records produced by the chat client.
//!
//! One record type exists per [`EventType`](crate::EventType). Records only
//! carry data; they are built by the client's protocol decoder and handed to
//! the dispatcher unchanged. Addresses are JIDs in their string form
//! (`user@server`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// App state patch received from another device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Index of the patched entry.
    pub index: Vec<String>,
    /// Patch version.
    pub version: u64,
}

/// App state collection finished resyncing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppStateSyncComplete {
    /// Collection name.
    pub name: String,
}

/// Chat archived or unarchived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    /// Chat JID.
    pub jid: String,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
    /// New archive state.
    pub archived: bool,
}

/// Verified business name changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessName {
    /// Business JID.
    pub jid: String,
    /// Previous name, if known.
    pub old_name: Option<String>,
    /// New name.
    pub new_name: String,
}

/// Call accepted on another device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallAccept {
    /// Caller JID.
    pub from: String,
    /// Call identifier.
    pub call_id: String,
    /// When the call was accepted.
    pub timestamp: DateTime<Utc>,
}

/// Incoming call offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallOffer {
    /// Caller JID.
    pub from: String,
    /// Call identifier.
    pub call_id: String,
    /// When the offer was sent.
    pub timestamp: DateTime<Utc>,
}

/// Incoming group call notice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallOfferNotice {
    /// Caller JID.
    pub from: String,
    /// Call identifier.
    pub call_id: String,
    /// Media kind (`audio` or `video`).
    pub media: String,
    /// When the notice was sent.
    pub timestamp: DateTime<Utc>,
}

/// Call relay latency report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallRelayLatency {
    /// Caller JID.
    pub from: String,
    /// Call identifier.
    pub call_id: String,
    /// Measured latency in milliseconds.
    pub latency_ms: u32,
}

/// Call ended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallTerminate {
    /// Caller JID.
    pub from: String,
    /// Call identifier.
    pub call_id: String,
    /// Termination reason reported by the server.
    pub reason: String,
}

/// Typing or recording state in a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatPresence {
    /// Chat JID.
    pub chat: String,
    /// Participant JID.
    pub sender: String,
    /// `true` while composing, `false` when paused.
    pub composing: bool,
    /// `true` when the participant is recording audio.
    pub audio: bool,
}

/// Server rejected the client version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOutdated {}

/// Connection established and authenticated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connected {}

/// Server refused the connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectFailure {
    /// Failure reason code.
    pub reason: i32,
    /// Human-readable message from the server.
    pub message: String,
}

/// Contact entry changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact JID.
    pub jid: String,
    /// Full name from the address book, if set.
    pub full_name: Option<String>,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Chat deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteChat {
    /// Chat JID.
    pub jid: String,
    /// When the chat was deleted.
    pub timestamp: DateTime<Utc>,
}

/// Message deleted for the current user only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteForMe {
    /// Chat JID.
    pub chat: String,
    /// Original sender JID.
    pub sender: String,
    /// Deleted message identifier.
    pub message_id: String,
    /// When the message was deleted.
    pub timestamp: DateTime<Utc>,
}

/// Connection dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Disconnected {}

/// Group metadata changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Group JID.
    pub jid: String,
    /// Participant who made the change, if known.
    pub sender: Option<String>,
    /// New group name, when the name changed.
    pub name: Option<String>,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// History sync blob received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySync {
    /// Sync kind (`initial_bootstrap`, `recent`, ...).
    pub sync_type: String,
    /// Position of this chunk in the sync.
    pub chunk_order: u32,
    /// Number of conversations carried.
    pub conversations: u32,
}

/// Contact identity key changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityChange {
    /// Contact JID.
    pub jid: String,
    /// `true` when detected locally rather than notified by the server.
    pub implicit: bool,
    /// When the change was seen.
    pub timestamp: DateTime<Utc>,
}

/// Joined or was added to a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinedGroup {
    /// Group JID.
    pub jid: String,
    /// Join reason (`invite`, `create`, ...).
    pub reason: String,
}

/// Keepalive pings succeed again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeepAliveRestored {}

/// Keepalive ping timed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeepAliveTimeout {
    /// Consecutive failures so far.
    pub error_count: u32,
    /// Last successful ping, if any.
    pub last_success: Option<DateTime<Utc>>,
}

/// Device was logged out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggedOut {
    /// `true` when the logout was reported while connecting.
    pub on_connect: bool,
    /// Logout reason code.
    pub reason: i32,
}

/// Chat marked as read or unread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkChatAsRead {
    /// Chat JID.
    pub jid: String,
    /// New read state.
    pub read: bool,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Media retry receipt received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRetry {
    /// Message whose media is retried.
    pub message_id: String,
    /// Chat JID.
    pub chat: String,
    /// Sender JID.
    pub sender: String,
    /// When the receipt was sent.
    pub timestamp: DateTime<Utc>,
}

/// Message received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier.
    pub id: String,
    /// Chat JID.
    pub chat: String,
    /// Sender JID.
    pub sender: String,
    /// Sender push name.
    pub push_name: String,
    /// `true` for messages sent from another of our devices.
    pub from_me: bool,
    /// Text body, when the message carries text.
    pub text: Option<String>,
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
}

/// Chat muted or unmuted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mute {
    /// Chat JID.
    pub jid: String,
    /// Mute expiry; `None` when unmuted.
    pub muted_until: Option<DateTime<Utc>>,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Offline message backlog drained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfflineSyncCompleted {
    /// Number of items delivered.
    pub count: u32,
}

/// Preview of the offline backlog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfflineSyncPreview {
    /// Total items pending.
    pub total: u32,
    /// Pending messages.
    pub messages: u32,
    /// Pending notifications.
    pub notifications: u32,
    /// Pending receipts.
    pub receipts: u32,
}

/// Pairing failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairError {
    /// JID the device would have paired as.
    pub id: String,
    /// Business name of the account, if any.
    pub business_name: String,
    /// Platform of the primary device.
    pub platform: String,
    /// Failure description.
    pub error: String,
}

/// Pairing succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairSuccess {
    /// JID the device paired as.
    pub id: String,
    /// Business name of the account, if any.
    pub business_name: String,
    /// Platform of the primary device.
    pub platform: String,
}

/// Profile picture changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    /// Owner JID.
    pub jid: String,
    /// Who changed the picture.
    pub author: String,
    /// `true` when the picture was removed.
    pub removed: bool,
    /// New picture identifier.
    pub picture_id: Option<String>,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Chat pinned or unpinned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Chat JID.
    pub jid: String,
    /// New pin state.
    pub pinned: bool,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Contact online status changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    /// Contact JID.
    pub from: String,
    /// `true` when the contact went offline.
    pub unavailable: bool,
    /// Last seen time, when shared.
    pub last_seen: Option<DateTime<Utc>>,
}

/// Privacy settings changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivacySettings {
    /// Names of the settings that changed.
    pub changed: Vec<String>,
}

/// Contact push name changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushName {
    /// Contact JID.
    pub jid: String,
    /// Previous push name.
    pub old_push_name: String,
    /// New push name.
    pub new_push_name: String,
}

/// Own push name changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushNameSetting {
    /// New push name.
    pub name: String,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Pairing QR codes issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Qr {
    /// Codes to display, one after another.
    pub codes: Vec<String>,
}

/// QR code scanned by a phone without multi-device support.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QrScannedWithoutMultidevice {}

/// Delivery or read receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Acknowledged message identifiers.
    pub message_ids: Vec<String>,
    /// Chat JID.
    pub chat: String,
    /// Participant JID.
    pub sender: String,
    /// Receipt kind (`delivered`, `read`, `played`, ...).
    pub receipt_type: String,
    /// When the receipt was sent.
    pub timestamp: DateTime<Utc>,
}

/// Message starred or unstarred.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Chat JID.
    pub chat: String,
    /// Sender JID.
    pub sender: String,
    /// Message identifier.
    pub message_id: String,
    /// New star state.
    pub starred: bool,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Stream error from the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamError {
    /// Error code.
    pub code: String,
}

/// Another client took over the stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamReplaced {}

/// Account temporarily banned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporaryBan {
    /// Ban reason code.
    pub code: i32,
    /// Seconds until the ban expires.
    pub expire_secs: u64,
}

/// Unarchive-on-new-message setting changed.
///
/// Dispatched under [`EventType::UnarchiveChatSetting`](crate::EventType::UnarchiveChatSetting).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnarchiveChatsSetting {
    /// `true` when chats are unarchived on new messages.
    pub unarchive_chats: bool,
    /// When the change was made.
    pub timestamp: DateTime<Utc>,
}

/// Message could not be decrypted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UndecryptableMessage {
    /// Chat JID.
    pub chat: String,
    /// Sender JID.
    pub sender: String,
    /// Message identifier.
    pub message_id: String,
    /// `true` when the sender's phone reported the message unavailable.
    pub is_unavailable: bool,
}

/// Unrecognised call signalling node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnknownCallEvent {
    /// Tag of the unrecognised node.
    pub node: String,
}
