//=========================================================================
// Extensibility Managers
//=========================================================================
//
// Collects menu or toolbar extenders contributed by other modules for
// the framework's asset editors.
//
//=========================================================================

//=== Extender ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionPosition {
    Before,
    After,
}

/// Entry added next to a named hook in a menu or toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extender {
    pub hook: String,
    pub position: ExtensionPosition,
    pub label: String,
}

impl Extender {
    pub fn new(hook: impl Into<String>, position: ExtensionPosition, label: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            position,
            label: label.into(),
        }
    }
}

//=== ExtensibilityManager ================================================

#[derive(Debug, Default, Clone)]
pub struct ExtensibilityManager {
    extenders: Vec<Extender>,
}

impl ExtensibilityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_extender(&mut self, extender: Extender) {
        self.extenders.push(extender);
    }

    /// Removes every extender attached to `hook`, returning how many.
    pub fn remove_extenders(&mut self, hook: &str) -> usize {
        let before = self.extenders.len();
        self.extenders.retain(|e| e.hook != hook);
        before - self.extenders.len()
    }

    /// Extenders for `hook`, in insertion order.
    pub fn extenders_for<'a>(&'a self, hook: &'a str) -> impl Iterator<Item = &'a Extender> + 'a {
        self.extenders.iter().filter(move |e| e.hook == hook)
    }

    pub fn len(&self) -> usize {
        self.extenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extenders.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
