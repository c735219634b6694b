//! Bounded conversation history for hosts that pair the renderer with a
//! conversational producer.
//!
//! Purely in-memory and synchronous. The producer client itself lives
//! outside this crate; hosts push the messages they exchange and read the
//! history back for context or display.

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Usage figures for a memory display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryStats {
    /// Completed user/assistant exchanges.
    pub conversation_turns: usize,
    pub total_messages: usize,
    pub max_messages: usize,
    pub usage_percent: f64,
}

/// Ordered message buffer, trimmed oldest-first at `max_messages`.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    messages: Vec<Message>,
    max_messages: usize,
}

impl ConversationMemory {
    pub fn new(max_messages: usize) -> ConversationMemory {
        ConversationMemory { messages: Vec::new(), max_messages: max_messages.max(1) }
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.push(Role::User, content.into());
    }

    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content.into());
    }

    fn push(&mut self, role: Role, content: String) {
        self.messages.push(Message { role, content });
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// First user message, truncated for display. `"New conversation"` when
    /// nothing has been said yet.
    pub fn summary(&self) -> String {
        const DISPLAY_LIMIT: usize = 50;
        for message in &self.messages {
            if message.role == Role::User {
                let mut content = message.content.clone();
                if content.chars().count() > DISPLAY_LIMIT {
                    content = content.chars().take(DISPLAY_LIMIT).collect::<String>() + "...";
                }
                return content;
            }
        }
        "New conversation".to_string()
    }

    pub fn stats(&self) -> MemoryStats {
        let total = self.messages.len();
        MemoryStats {
            conversation_turns: total / 2,
            total_messages: total,
            max_messages: self.max_messages,
            usage_percent: (total as f64 / self.max_messages as f64) * 100.0,
        }
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        ConversationMemory::new(100)
    }
}
