//! Transcript-related types.

use grove_model::{ModelMessage, ToolCallResult};

/// The role of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// System instructions.
    System,
    /// A user input.
    User,
    /// An assistant turn (text or a tool invocation request).
    Assistant,
    /// The result of a tool invocation.
    ToolResult,
}

/// The ordered message history of one exchange.
///
/// Entries are append-only: the exchange pushes new entries but never
/// mutates prior ones.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends system instructions.
    pub fn system<S: Into<String>>(mut self, content: S) -> Self {
        let content = content.into();
        self.entries.push(Entry {
            msg: ModelMessage::System(content.clone()),
            text: content,
        });
        self
    }

    /// Appends a user input.
    pub fn user<S: Into<String>>(mut self, content: S) -> Self {
        let content = content.into();
        self.entries.push(Entry {
            msg: ModelMessage::User(content.clone()),
            text: content,
        });
        self
    }

    /// Returns the entries in order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the transcript is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub(crate) fn push_tool_result(&mut self, result: ToolCallResult) {
        let text = result.content.clone();
        self.entries.push(Entry {
            msg: ModelMessage::Tool(result),
            text,
        });
    }

    pub(crate) fn messages(&self) -> Vec<ModelMessage> {
        self.entries.iter().map(|e| e.msg.clone()).collect()
    }
}

/// An entry in the transcript.
#[derive(Clone, Debug)]
pub struct Entry {
    pub(crate) msg: ModelMessage,
    pub(crate) text: String,
}

impl Entry {
    /// Returns the role of this entry.
    pub fn role(&self) -> Role {
        match &self.msg {
            ModelMessage::System(_) => Role::System,
            ModelMessage::User(_) => Role::User,
            // Opaque entries are provider-native assistant messages.
            ModelMessage::Assistant(_) | ModelMessage::Opaque(_) => {
                Role::Assistant
            }
            ModelMessage::Tool(_) => Role::ToolResult,
        }
    }

    /// Returns the plain-text rendering of this entry.
    ///
    /// The text alone is not enough to reconstruct the protocol message;
    /// it is meant for display and export.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_order_and_roles() {
        let transcript = Transcript::new()
            .system("I am an expert in palm oil trees.")
            .user("Plan the visits.");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].role(), Role::System);
        assert_eq!(transcript.entries()[1].role(), Role::User);
        assert_eq!(transcript.entries()[1].text(), "Plan the visits.");
    }

    #[test]
    fn test_tool_result_entry() {
        let mut transcript = Transcript::new().user("go");
        transcript.push_tool_result(ToolCallResult {
            id: "call_1".to_owned(),
            name: "visit_locations".to_owned(),
            content: "1 locations are visited.".to_owned(),
        });
        let entry = &transcript.entries()[1];
        assert_eq!(entry.role(), Role::ToolResult);
        assert_eq!(entry.text(), "1 locations are visited.");
    }
}
