//=========================================================================
// Blueprint Assets
//=========================================================================
//
// Minimal description of a visual-scripting asset as seen by the editor
// glue: enough to route it to a compiler and an asset editor.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== BlueprintKind =======================================================

/// Tag selecting the compiler and asset editor for a Blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlueprintKind {
    NpcBehavior,
    StateMachine,

    /// Any kind handled by another module.
    Other(String),
}

impl fmt::Display for BlueprintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NpcBehavior => write!(f, "NpcBehavior"),
            Self::StateMachine => write!(f, "StateMachine"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

//=== Blueprint ===========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub name: String,
    pub kind: BlueprintKind,
    pub parent_class: String,
    pub graphs: Vec<String>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>, kind: BlueprintKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent_class: String::from("Object"),
            graphs: Vec::new(),
        }
    }

    pub fn with_parent_class(mut self, parent: impl Into<String>) -> Self {
        self.parent_class = parent.into();
        self
    }

    pub fn with_graph(mut self, graph: impl Into<String>) -> Self {
        self.graphs.push(graph.into());
        self
    }
}

//=== GeneratedClass ======================================================

/// Class descriptor produced by a successful compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub name: String,
    pub parent_class: String,
    pub kind: BlueprintKind,
}

impl GeneratedClass {
    /// `<Blueprint>_C`, the conventional generated-class name.
    pub fn for_blueprint(blueprint: &Blueprint) -> Self {
        Self {
            name: format!("{}_C", blueprint.name),
            parent_class: blueprint.parent_class.clone(),
            kind: blueprint.kind.clone(),
        }
    }
}
