use std::sync::Arc;
use tracing::{error, info};

use crate::models::{Notification, NotificationKind};

/// Sink for user-facing notifications.
///
/// Return values of the display layer are never inspected.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str, title: &str);

    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => self.success(&notification.message),
            NotificationKind::Error => self.error(
                &notification.message,
                notification.title.as_deref().unwrap_or_default(),
            ),
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str, title: &str) {
        (**self).error(message, title)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str, title: &str) {
        (**self).error(message, title)
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str, title: &str) {
        (**self).error(message, title)
    }
}

/// Headless notifier that only writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = message, "Notify success");
    }

    fn error(&self, message: &str, title: &str) {
        error!(notification = message, title, "Notify error");
    }
}

#[cfg(feature = "tauri")]
pub use event_notifier::{EventNotifier, NOTIFY_EVENT};

#[cfg(feature = "tauri")]
mod event_notifier {
    use tauri::{AppHandle, Emitter, Runtime};
    use tracing::warn;

    use super::Notifier;
    use crate::models::Notification;

    pub const NOTIFY_EVENT: &str = "picture://notify";

    /// Forwards notifications to the webview as `picture://notify` events.
    pub struct EventNotifier<R: Runtime> {
        app_handle: AppHandle<R>,
    }

    impl<R: Runtime> EventNotifier<R> {
        pub fn new(app_handle: AppHandle<R>) -> Self {
            Self { app_handle }
        }

        fn emit(&self, notification: Notification) {
            if let Err(e) = self.app_handle.emit(NOTIFY_EVENT, &notification) {
                warn!("Failed to emit notification: {}", e);
            }
        }
    }

    impl<R: Runtime> Notifier for EventNotifier<R> {
        fn success(&self, message: &str) {
            self.emit(Notification::success(message));
        }

        fn error(&self, message: &str, title: &str) {
            self.emit(Notification::error(message, title));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::mock::RecordingNotifier;
    use super::*;

    #[test]
    fn test_notify_dispatches_by_kind() {
        let notifier = RecordingNotifier::new();

        notifier.notify(&Notification::success("saved"));
        notifier.notify(&Notification::error("broken", "Upload failed"));

        let recorded = notifier.take();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].kind, NotificationKind::Success);
        assert_eq!(recorded[1], Notification::error("broken", "Upload failed"));
    }

    #[test]
    fn test_shared_notifier_wrappers() {
        let notifier = Arc::new(RecordingNotifier::new());
        let boxed: Box<dyn Notifier> = Box::new(Arc::clone(&notifier));

        boxed.success("one");
        (&*notifier).error("two", "t");

        assert_eq!(notifier.take().len(), 2);
    }

    #[test]
    fn test_tracing_notifier_does_not_panic() {
        TracingNotifier.success("ok");
        TracingNotifier.error("bad", "Upload failed");
    }
}
