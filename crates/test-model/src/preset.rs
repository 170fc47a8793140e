use grove_model::{ErrorKind, ToolCallRequest};

/// The preset for a scripted assistant turn.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetTurn {
    /// The text content of the turn.
    pub text: String,
    /// The tool invocation the turn requests, if any.
    pub tool_call: Option<ToolCallRequest>,
    /// If set, the request selecting this turn fails with this kind
    /// instead of producing a turn.
    pub failure: Option<ErrorKind>,
}

impl PresetTurn {
    /// Creates a text-only preset turn.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tool_call: None,
            failure: None,
        }
    }

    /// Creates a preset turn that requests a tool invocation.
    #[inline]
    pub fn with_tool_call(call: ToolCallRequest) -> Self {
        Self {
            text: String::new(),
            tool_call: Some(call),
            failure: None,
        }
    }

    /// Makes the request selecting this turn fail.
    #[inline]
    pub fn with_failure(mut self, kind: ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let turn = PresetTurn::with_text("Hello");
        assert_eq!(turn.text, "Hello");
        assert!(turn.tool_call.is_none());
        assert!(turn.failure.is_none());

        let call = ToolCallRequest {
            id: "tool:1".to_owned(),
            name: "write_file".to_owned(),
            arguments: r#"{"filename":"message.txt"}"#.to_owned(),
        };
        let turn = PresetTurn::with_tool_call(call.clone());
        assert_eq!(turn.tool_call, Some(call));

        let turn =
            PresetTurn::with_text("").with_failure(ErrorKind::RateLimitExceeded);
        assert_eq!(turn.failure, Some(ErrorKind::RateLimitExceeded));
    }
}
