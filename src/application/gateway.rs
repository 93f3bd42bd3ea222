//! Notification gateway use case
//!
//! Mediates between application code and the OS notification facility:
//! tracks whether notifications are permitted, asks for permission lazily,
//! and only delivers once permission is confirmed. Every collaborator
//! failure is logged and resolved to "not permitted / not sent".

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::domain::notification::NotificationRequest;
use crate::domain::permission::PermissionState;

use super::ports::NotificationService;

/// Marks a permission request as in flight for as long as it is alive.
///
/// Released on drop, so the flag is cleared on every exit path, including
/// when the request future is dropped while the prompt is still open.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Claim the flag, or `None` if another request already holds it
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Permission-aware notification gateway.
///
/// Construct one per process and share it by reference (or `Arc`).
pub struct NotificationGateway<N>
where
    N: NotificationService,
{
    service: N,
    permission: AtomicU8,
    requesting: AtomicBool,
}

impl<N> NotificationGateway<N>
where
    N: NotificationService,
{
    /// Create a gateway with permission `Unknown` and no request in flight
    pub fn new(service: N) -> Self {
        Self {
            service,
            permission: AtomicU8::new(PermissionState::Unknown.to_u8()),
            requesting: AtomicBool::new(false),
        }
    }

    /// Current known permission state
    pub fn permission_granted(&self) -> PermissionState {
        PermissionState::from_u8(self.permission.load(Ordering::Acquire))
    }

    /// Whether a permission request is currently in flight
    pub fn is_requesting(&self) -> bool {
        self.requesting.load(Ordering::Acquire)
    }

    /// The underlying notification service
    pub fn service(&self) -> &N {
        &self.service
    }

    fn set_permission(&self, state: PermissionState) {
        let previous = PermissionState::from_u8(self.permission.swap(state.to_u8(), Ordering::AcqRel));
        if previous != state {
            log::debug!("Notification permission: {} -> {}", previous, state);
        }
    }

    /// Query the OS for the current permission status.
    ///
    /// Always overwrites the stored state. Returns `Granted` or `Denied`,
    /// never `Unknown`; a failed query counts as `Denied`.
    pub async fn check_permission(&self) -> PermissionState {
        let state = match self.service.query_permission().await {
            Ok(query) => PermissionState::from(query),
            Err(e) => {
                log::error!("{}", e);
                PermissionState::Denied
            }
        };

        self.set_permission(state);
        state
    }

    /// Ask the user for permission unless it is already granted.
    ///
    /// While a request is in flight, further calls return the current known
    /// value immediately (`Unknown` counts as false) and do not prompt again.
    pub async fn request_notification_permission(&self) -> bool {
        let Some(_guard) = InFlightGuard::acquire(&self.requesting) else {
            log::debug!("Permission request already in flight");
            return self.permission_granted().as_bool();
        };

        if self.permission_granted().is_granted() {
            return true;
        }

        let state = match self.service.prompt_permission().await {
            Ok(prompt) => PermissionState::from(prompt),
            Err(e) => {
                log::error!("{}", e);
                PermissionState::Denied
            }
        };

        self.set_permission(state);
        state.is_granted()
    }

    /// Show a notification, requesting permission first if needed.
    ///
    /// Returns true only if permission is granted and delivery succeeded.
    /// Delivery failure leaves the permission state untouched.
    pub async fn notify(&self, request: &NotificationRequest) -> bool {
        if !self.permission_granted().is_granted() && !self.request_notification_permission().await {
            log::warn!("Notification \"{}\" dropped: permission not granted", request.title);
            return false;
        }

        match self.service.deliver(request).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }
}
