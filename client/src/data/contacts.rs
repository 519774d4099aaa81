//! Chat contacts and the seeded conversation.

use chrono::{DateTime, Duration, Utc};

use super::matches_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub presence: Presence,
    pub last_message: &'static str,
    pub minutes_since_last: i64,
    pub unread: u32,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        id: "1",
        name: "Dr. Jane Smith",
        specialty: "Cardiologist",
        presence: Presence::Online,
        last_message: "How are you feeling today?",
        minutes_since_last: 5,
        unread: 1,
    },
    Contact {
        id: "2",
        name: "Dr. Michael Chen",
        specialty: "Dermatologist",
        presence: Presence::Offline,
        last_message: "Let me know if you have any questions about your prescription.",
        minutes_since_last: 120,
        unread: 0,
    },
    Contact {
        id: "3",
        name: "Dr. Sarah Johnson",
        specialty: "Neurologist",
        presence: Presence::Away,
        last_message: "Your lab results look good.",
        minutes_since_last: 1440,
        unread: 0,
    },
    Contact {
        id: "4",
        name: "Dr. Robert Williams",
        specialty: "Orthopedic Surgeon",
        presence: Presence::Online,
        last_message: "How is your knee feeling after the physical therapy?",
        minutes_since_last: 2880,
        unread: 0,
    },
];

#[must_use]
pub fn find(id: &str) -> Option<Contact> {
    CONTACTS.iter().copied().find(|c| c.id == id)
}

/// Contacts whose name or specialty contains `query`.
#[must_use]
pub fn search(query: &str) -> Vec<Contact> {
    CONTACTS
        .iter()
        .copied()
        .filter(|c| matches_query(query, [c.name, c.specialty]))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Me,
    Them,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Message thread for one conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatThread {
    pub messages: Vec<ChatMessage>,
}

impl ChatThread {
    /// The canned conversation, timestamped relative to `now`.
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let seed: [(Sender, &str, i64); 5] = [
            (Sender::Them, "Hello, how can I help you today?", 10),
            (Sender::Me, "I've been experiencing some chest pain and shortness of breath.", 8),
            (
                Sender::Them,
                "I'm sorry to hear that. Can you describe the pain? Is it sharp, dull, or pressure-like?",
                6,
            ),
            (Sender::Me, "It's more like a pressure, especially when I climb stairs or walk quickly.", 5),
            (Sender::Them, "How are you feeling today?", 1),
        ];
        let mut thread = Self::default();
        for (sender, body, minutes_ago) in seed {
            thread.push(sender, body, now - Duration::minutes(minutes_ago));
        }
        thread
    }

    /// Append an outgoing message. Blank input is ignored and returns false.
    pub fn send(&mut self, body: &str, now: DateTime<Utc>) -> bool {
        let body = body.trim();
        if body.is_empty() {
            return false;
        }
        self.push(Sender::Me, body, now);
        true
    }

    fn push(&mut self, sender: Sender, body: &str, sent_at: DateTime<Utc>) {
        let id = self.messages.last().map_or(1, |m| m.id + 1);
        self.messages.push(ChatMessage { id, sender, body: body.to_owned(), sent_at });
    }
}
