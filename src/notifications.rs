//! Short-lived success/error toasts.
//!
//! Operations push into a bounded channel through a [`Notifier`]. The
//! [`NotificationBoard`] drains that channel on every read, and a sweeper
//! task drains it on a timer and evicts the ones whose life is over.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::mpsc::{
    self,
    error::{TryRecvError, TrySendError},
};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn summary(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, detail: impl Into<String>, life: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            summary: severity.summary().to_string(),
            detail: detail.into(),
            expires_at: Instant::now() + life,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::Sender<Notification>,
    life: Duration,
}

impl Notifier {
    pub fn channel(capacity: usize, life: Duration) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx, life }, rx)
    }

    pub fn success(&self, detail: impl Into<String>) {
        self.push(Notification::new(Severity::Success, detail, self.life));
    }

    pub fn error(&self, detail: impl Into<String>) {
        self.push(Notification::new(Severity::Error, detail, self.life));
    }

    fn push(&self, notification: Notification) {
        match self.tx.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => {
                warn!("notification queue is full, dropping: {}", dropped.detail)
            }
            Err(TrySendError::Closed(dropped)) => {
                warn!("notification board is gone, dropping: {}", dropped.detail)
            }
        }
    }
}

/// Active toasts plus the receiving end of the notifier channel.
///
/// Every read drains the channel first, so a page rendered right after an
/// operation already shows the notification that operation sent.
#[derive(Debug, Clone)]
pub struct NotificationBoard {
    active: Arc<RwLock<Vec<Notification>>>,
    pending: Arc<Mutex<mpsc::Receiver<Notification>>>,
}

impl NotificationBoard {
    pub fn new(rx: mpsc::Receiver<Notification>) -> Self {
        Self {
            active: Arc::new(RwLock::new(vec![])),
            pending: Arc::new(Mutex::new(rx)),
        }
    }

    pub fn push(&self, notification: Notification) {
        self.active
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }

    /// Moves everything queued on the channel onto the board. Returns false
    /// once every [`Notifier`] is dropped and the queue is empty.
    pub fn drain_pending(&self) -> bool {
        let mut rx = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            match rx.try_recv() {
                Ok(notification) => self.push(notification),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    /// Notifications still alive at `now`, oldest first.
    pub fn snapshot(&self, now: Instant) -> Vec<Notification> {
        self.drain_pending();
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|notification| !notification.is_expired(now))
            .cloned()
            .collect()
    }

    pub fn evict_expired(&self, now: Instant) -> usize {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        let before = active.len();
        active.retain(|notification| !notification.is_expired(now));
        before - active.len()
    }

    pub fn dismiss(&self, id: Uuid) -> bool {
        self.drain_pending();
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        let before = active.len();
        active.retain(|notification| notification.id != id);
        before != active.len()
    }

    /// Every `sweep_interval` drains the channel and evicts expired entries.
    /// The task ends once every [`Notifier`] is dropped.
    ///
    /// `sweep_interval` must be non-zero, `tokio::time::interval` panics otherwise.
    pub fn spawn_sweeper(&self, sweep_interval: Duration) -> JoinHandle<()> {
        let board = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(sweep_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let open = board.drain_pending();
                let evicted = board.evict_expired(Instant::now());
                if evicted > 0 {
                    debug!("evicted {evicted} expired notifications");
                }
                if !open {
                    break;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_to_string_works() {
        assert_eq!(Severity::Success.to_string(), "success".to_string());
        assert_eq!(Severity::Error.to_string(), "error".to_string());
        assert_eq!(Severity::Error.summary(), "Error");
    }

    #[tokio::test]
    async fn notifier_sends_with_life() {
        let (notifier, mut rx) = Notifier::channel(4, Duration::from_millis(3000));
        notifier.error("Error fetching productos: boom");
        let notification = rx.try_recv().expect("Failed to receive notification");
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.summary, "Error");
        assert_eq!(notification.detail, "Error fetching productos: boom");
        assert!(!notification.is_expired(Instant::now()));
        assert!(notification.is_expired(Instant::now() + Duration::from_millis(3001)));
    }

    #[tokio::test]
    async fn full_channel_drops_notification() {
        let (notifier, mut rx) = Notifier::channel(1, Duration::from_secs(1));
        notifier.success("first");
        notifier.success("second");
        assert_eq!(rx.try_recv().expect("Failed to receive").detail, "first");
        assert!(rx.try_recv().is_err());
    }

    fn empty_board() -> NotificationBoard {
        let (_notifier, rx) = Notifier::channel(4, Duration::from_secs(1));
        NotificationBoard::new(rx)
    }

    #[tokio::test]
    async fn board_evicts_expired() {
        let board = empty_board();
        board.push(Notification::new(Severity::Success, "short", Duration::from_millis(10)));
        board.push(Notification::new(Severity::Error, "long", Duration::from_secs(60)));
        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(board.snapshot(later).len(), 1);
        assert_eq!(board.evict_expired(later), 1);
        let left = board.snapshot(Instant::now());
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].detail, "long");
    }

    #[tokio::test]
    async fn board_dismiss_works() {
        let board = empty_board();
        let notification = Notification::new(Severity::Success, "done", Duration::from_secs(60));
        let id = notification.id;
        board.push(notification);
        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert!(board.snapshot(Instant::now()).is_empty());
    }

    #[tokio::test]
    async fn sweeper_moves_notifications_onto_board() {
        let (notifier, rx) = Notifier::channel(8, Duration::from_secs(60));
        let board = NotificationBoard::new(rx);
        let handle = board.spawn_sweeper(Duration::from_millis(10));
        notifier.success("Producto agregado exitosamente");
        drop(notifier);
        handle.await.expect("Sweeper task failed");
        let active = board.snapshot(Instant::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].detail, "Producto agregado exitosamente");
    }

    #[tokio::test]
    async fn snapshot_sees_queued_notification_without_sweeper() {
        let (notifier, rx) = Notifier::channel(8, Duration::from_secs(60));
        let board = NotificationBoard::new(rx);
        notifier.error("Error fetching productos: boom");
        let active = board.snapshot(Instant::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Error);
        assert!(board.drain_pending());
        drop(notifier);
        assert!(!board.drain_pending());
    }
}
