//! Integration tests for the process-wide registry.
//!
//! Every test binds a different event type so the tests can share the global
//! registry while running in parallel.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wabridge_events::{
    DispatchErrorKind, Event, EventHandler, EventType, HandlerRegistry, HandlerResult, payload,
};

struct Journal {
    label: &'static str,
    lines: Arc<Mutex<Vec<String>>>,
}

impl EventHandler for Journal {
    fn handle(&self, event: &Event) -> HandlerResult {
        let line = match event {
            Event::Message(msg) => format!(
                "{}: {} says {}",
                self.label,
                msg.sender,
                msg.text.as_deref().unwrap_or_default()
            ),
            other => format!("{}: {}", self.label, other.event_type()),
        };
        self.lines.lock().unwrap().push(line);
        Ok(())
    }

    fn name(&self) -> &str {
        self.label
    }
}

#[test]
fn test_message_flows_through_global_registry() {
    let lines = Arc::new(Mutex::new(Vec::new()));

    wabridge_events::register(
        EventType::Message,
        Arc::new(Journal {
            label: "audit",
            lines: Arc::clone(&lines),
        }),
    );
    wabridge_events::register(
        EventType::Message,
        Arc::new(Journal {
            label: "store",
            lines: Arc::clone(&lines),
        }),
    );

    wabridge_events::dispatch_any(payload::Message {
        sender: "alice@s.whatsapp.net".to_string(),
        text: Some("ping".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        *lines.lock().unwrap(),
        vec![
            "audit: alice@s.whatsapp.net says ping".to_string(),
            "store: alice@s.whatsapp.net says ping".to_string(),
        ]
    );
}

#[test]
fn test_unhandled_event_is_informational() {
    // Nothing in this binary registers for StreamReplaced.
    let err = wabridge_events::dispatch(&Event::StreamReplaced(payload::StreamReplaced {}))
        .unwrap_err();
    assert_eq!(err.kind(), DispatchErrorKind::NoHandlerFound);
}

#[test]
fn test_foreign_payload_is_rejected() {
    let err = wabridge_events::dispatch_any(vec![1_u8, 2, 3]).unwrap_err();
    assert_eq!(err.kind(), DispatchErrorKind::UnknownEvent);
    assert!(err.to_string().contains("[1, 2, 3]"));
}

#[test]
fn test_parallel_registration_on_global_registry() {
    let calls = Arc::new(AtomicUsize::new(0));

    std::thread::scope(|s| {
        for _ in 0..100 {
            let calls = Arc::clone(&calls);
            s.spawn(move || {
                wabridge_events::register_fn(EventType::HistorySync, "count", move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                });
            });
        }
    });

    assert_eq!(
        HandlerRegistry::global().handler_count(EventType::HistorySync),
        100
    );

    wabridge_events::dispatch(&Event::HistorySync(payload::HistorySync::default())).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 100);
}

#[test]
fn test_every_record_reaches_its_handler() {
    let registry = HandlerRegistry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for event_type in EventType::ALL {
        let seen = Arc::clone(&seen);
        registry.register_fn(event_type, event_type.as_str(), move |event| {
            seen.lock().unwrap().push(event.event_type());
            Ok(())
        });
    }

    let records: Vec<Box<dyn std::any::Any + Send>> = vec![
        Box::new(payload::AppState::default()),
        Box::new(payload::AppStateSyncComplete::default()),
        Box::new(payload::Archive::default()),
        Box::new(payload::BusinessName::default()),
        Box::new(payload::CallAccept::default()),
        Box::new(payload::CallOffer::default()),
        Box::new(payload::CallOfferNotice::default()),
        Box::new(payload::CallRelayLatency::default()),
        Box::new(payload::CallTerminate::default()),
        Box::new(payload::ChatPresence::default()),
        Box::new(payload::ClientOutdated::default()),
        Box::new(payload::Connected::default()),
        Box::new(payload::ConnectFailure::default()),
        Box::new(payload::Contact::default()),
        Box::new(payload::DeleteChat::default()),
        Box::new(payload::DeleteForMe::default()),
        Box::new(payload::Disconnected::default()),
        Box::new(payload::GroupInfo::default()),
        Box::new(payload::HistorySync::default()),
        Box::new(payload::IdentityChange::default()),
        Box::new(payload::JoinedGroup::default()),
        Box::new(payload::KeepAliveRestored::default()),
        Box::new(payload::KeepAliveTimeout::default()),
        Box::new(payload::LoggedOut::default()),
        Box::new(payload::MarkChatAsRead::default()),
        Box::new(payload::MediaRetry::default()),
        Box::new(payload::Message::default()),
        Box::new(payload::Mute::default()),
        Box::new(payload::OfflineSyncCompleted::default()),
        Box::new(payload::OfflineSyncPreview::default()),
        Box::new(payload::PairError::default()),
        Box::new(payload::PairSuccess::default()),
        Box::new(payload::Picture::default()),
        Box::new(payload::Pin::default()),
        Box::new(payload::Presence::default()),
        Box::new(payload::PrivacySettings::default()),
        Box::new(payload::PushName::default()),
        Box::new(payload::PushNameSetting::default()),
        Box::new(payload::Qr::default()),
        Box::new(payload::QrScannedWithoutMultidevice::default()),
        Box::new(payload::Receipt::default()),
        Box::new(payload::Star::default()),
        Box::new(payload::StreamError::default()),
        Box::new(payload::StreamReplaced::default()),
        Box::new(payload::TemporaryBan::default()),
        Box::new(payload::UnarchiveChatsSetting::default()),
        Box::new(payload::UndecryptableMessage::default()),
        Box::new(payload::UnknownCallEvent::default()),
    ];

    for record in records {
        registry.dispatch_boxed(record).unwrap();
    }

    assert_eq!(*seen.lock().unwrap(), EventType::ALL.to_vec());
}
