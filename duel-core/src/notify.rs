use crate::{NOTIFICATION_LIFETIME, TIME_STEP};
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;
use log::info;

/// A short message shown next to a position in the arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub x: f32,
    pub y: f32,
    /// Time left on screen.
    pub remaining: Duration,
}

/// On-screen messages that dismiss themselves after [`NOTIFICATION_LIFETIME`].
#[derive(Debug, Default)]
pub struct Notifications {
    active: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>, x: f32, y: f32) {
        let message = message.into();
        info!("{message}");

        self.active.push(Notification {
            message,
            x,
            y,
            remaining: NOTIFICATION_LIFETIME,
        });
    }

    /// Age every notification by one time step and drop the expired ones.
    pub fn tick(&mut self) {
        self.active.retain_mut(|notification| {
            notification.remaining = notification.remaining.saturating_sub(TIME_STEP);

            !notification.remaining.is_zero()
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
