//! Notification inbox shown from the booking page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Appointment,
    Message,
    Record,
    Reminder,
}

impl NotificationKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Message => "message",
            Self::Record => "record",
            Self::Reminder => "reminder",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub read: bool,
    pub kind: NotificationKind,
}

pub const NOTIFICATIONS: &[Notification] = &[
    Notification {
        id: "1",
        title: "Appointment Reminder",
        message: "Your appointment with Dr. Jane Smith is tomorrow at 10:00 AM.",
        time: "1 hour ago",
        read: false,
        kind: NotificationKind::Appointment,
    },
    Notification {
        id: "2",
        title: "New Message",
        message: "Dr. Michael Chen sent you a new message regarding your recent visit.",
        time: "3 hours ago",
        read: false,
        kind: NotificationKind::Message,
    },
    Notification {
        id: "3",
        title: "Medical Record Updated",
        message: "Your lab results have been uploaded to your medical records.",
        time: "Yesterday",
        read: true,
        kind: NotificationKind::Record,
    },
    Notification {
        id: "4",
        title: "Medication Reminder",
        message: "Don't forget to take your medication today at 8:00 PM.",
        time: "Yesterday",
        read: true,
        kind: NotificationKind::Reminder,
    },
    Notification {
        id: "5",
        title: "Appointment Confirmed",
        message: "Your appointment with Dr. Sarah Johnson has been confirmed for June 18.",
        time: "2 days ago",
        read: true,
        kind: NotificationKind::Appointment,
    },
];

/// Local, unpersisted copy of the notification list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inbox {
    pub items: Vec<Notification>,
}

impl Inbox {
    #[must_use]
    pub fn seeded() -> Self {
        Self { items: NOTIFICATIONS.to_vec() }
    }

    /// Mark one entry read. Returns false for unknown or already-read ids.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id && !n.read) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark everything read; returns how many entries changed.
    pub fn mark_all_read(&mut self) -> usize {
        let changed = self.unread_count();
        for n in &mut self.items {
            n.read = true;
        }
        changed
    }

    /// Delete an entry. Returns false if `id` is not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    #[must_use]
    pub fn unread(&self) -> Vec<Notification> {
        self.items.iter().copied().filter(|n| !n.read).collect()
    }
}
