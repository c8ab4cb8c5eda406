use roast_shared::constants::ANONYMOUS_SENDER;
use roast_shared::RecordId;

use crate::collections::Messages;
use crate::error::Result;
use crate::events::StoreEvent;
use crate::models::Message;
use crate::store::RoastStore;

impl RoastStore {
    /// Every stored message, sent and received, in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.read::<Messages>()
    }

    /// Store a roast addressed to `to_friend`, sent by the current user
    /// (or "Anonymous" when none is set up), and emit `message-received`.
    pub fn send_roast(&self, to_friend: &str, text: &str) -> Result<Message> {
        let mut messages = self.load::<Messages>()?;
        let from = self
            .current_username()
            .unwrap_or_else(|| ANONYMOUS_SENDER.to_string());

        let message = Message {
            id: self.next_id(messages.iter().map(|m| m.id)),
            from,
            to: to_friend.to_string(),
            text: text.to_string(),
            timestamp: self.now(),
            read: false,
        };
        messages.push(message.clone());

        self.write::<Messages>(&messages)?;
        tracing::debug!(id = %message.id, from = %message.from, to = %message.to, "roast sent");
        self.emit(StoreEvent::MessageReceived);
        Ok(message)
    }

    /// Messages addressed to the current user, newest first.
    pub fn received_roasts(&self) -> Vec<Message> {
        let Some(username) = self.current_username() else {
            return Vec::new();
        };

        let mut received: Vec<Message> = self
            .messages()
            .into_iter()
            .filter(|m| m.to == username)
            .collect();
        received.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        received
    }

    /// Flag a message as read.  Returns `false` (and changes nothing) when no
    /// message has `message_id`.
    pub fn mark_roast_as_read(&self, message_id: RecordId) -> Result<bool> {
        let mut messages = self.load::<Messages>()?;
        let Some(message) = messages.iter_mut().find(|m| m.id == message_id) else {
            tracing::debug!(id = %message_id, "mark read: no such message");
            return Ok(false);
        };
        message.read = true;

        self.write::<Messages>(&messages)?;
        tracing::debug!(id = %message_id, "roast marked read");
        self.emit(StoreEvent::MessageRead);
        Ok(true)
    }

    /// Unread messages addressed to the current user.
    pub fn unread_count(&self) -> usize {
        let Some(username) = self.current_username() else {
            return 0;
        };

        self.messages()
            .iter()
            .filter(|m| m.to == username && !m.read)
            .count()
    }
}
