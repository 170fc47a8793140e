use grove_model::ModelTool;

use crate::tool::Tool;
use crate::tool::object::{ToolObject, ToolObjectImpl};

/// The set of tools declared for an exchange.
///
/// Tools keep the order they were registered in, so the declarations
/// sent to the model are stable across runs. Registering a tool with a
/// name that is already taken replaces the earlier tool.
#[derive(Default)]
pub(crate) struct Registry {
    tools: Vec<Box<dyn ToolObject>>,
}

impl Registry {
    pub fn add_tool<T: Tool>(&mut self, tool: T) {
        let tool = Box::new(ToolObjectImpl(tool));
        match self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            Some(slot) => *slot = tool,
            None => self.tools.push(tool),
        }
    }

    #[inline]
    pub fn declarations(&self) -> Vec<ModelTool> {
        self.tools.iter().map(|tool| tool.declaration()).collect()
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&dyn ToolObject> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| &**tool)
    }
}
