//=========================================================================
// Graph Factories
//=========================================================================
//
// Visual factories consulted by the graph editor.
//
//   GraphNodeFactory      → node → visual, for node classes it owns
//   PinConnectionFactory  → graph schema → wire drawing policy
//
// The host asks each registered factory in order and takes the first
// `Some`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::registry::Registry;

//=== Graph Model =========================================================

/// Node as handed to visual factories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub class_name: String,
    pub title: String,
}

impl GraphNode {
    pub fn new(class_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeVisual {
    pub title: String,
    pub style: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPolicy {
    pub schema: String,
    pub wire_style: &'static str,
}

//=== Factory Traits ======================================================

pub trait GraphNodeFactory {
    fn name(&self) -> &str;

    /// Builds the visual for `node`, or `None` if this factory does not
    /// handle its class.
    fn create_node_visual(&self, node: &GraphNode) -> Option<NodeVisual>;
}

pub trait PinConnectionFactory {
    fn name(&self) -> &str;

    fn create_connection_policy(&self, schema: &str) -> Option<ConnectionPolicy>;
}

//=== Framework Factories =================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct NpcBehaviorGraphFactory;

impl GraphNodeFactory for NpcBehaviorGraphFactory {
    fn name(&self) -> &str {
        "NpcBehaviorGraphFactory"
    }

    fn create_node_visual(&self, node: &GraphNode) -> Option<NodeVisual> {
        node.class_name.starts_with("NpcBehaviorGraphNode").then(|| NodeVisual {
            title: node.title.clone(),
            style: "Umbra.NpcBehavior.Node",
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StateMachineGraphFactory;

impl GraphNodeFactory for StateMachineGraphFactory {
    fn name(&self) -> &str {
        "StateMachineGraphFactory"
    }

    fn create_node_visual(&self, node: &GraphNode) -> Option<NodeVisual> {
        node.class_name.starts_with("StateMachineGraphNode").then(|| NodeVisual {
            title: node.title.clone(),
            style: "Umbra.StateMachine.State",
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StateMachineGraphPinConnectionFactory;

impl PinConnectionFactory for StateMachineGraphPinConnectionFactory {
    fn name(&self) -> &str {
        "StateMachineGraphPinConnectionFactory"
    }

    fn create_connection_policy(&self, schema: &str) -> Option<ConnectionPolicy> {
        (schema == "StateMachineGraphSchema").then(|| ConnectionPolicy {
            schema: schema.to_string(),
            wire_style: "Umbra.StateMachine.Transition",
        })
    }
}

//=== Registry Lookups ====================================================

impl Registry<dyn GraphNodeFactory> {
    /// First visual produced by a registered factory.
    pub fn create_node_visual(&self, node: &GraphNode) -> Option<NodeVisual> {
        self.iter().find_map(|factory| factory.create_node_visual(node))
    }
}

impl Registry<dyn PinConnectionFactory> {
    pub fn create_connection_policy(&self, schema: &str) -> Option<ConnectionPolicy> {
        self.iter().find_map(|factory| factory.create_connection_policy(schema))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
