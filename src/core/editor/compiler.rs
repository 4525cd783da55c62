//=========================================================================
// Blueprint Compilers
//=========================================================================
//
// Compiler dispatch table keyed by Blueprint kind.
//
// Flow:
//   CompilerRegistry::compile(blueprint)
//     ├─ lookup compiler by blueprint.kind   → UnsupportedKind
//     ├─ compiler.compile(.., results)
//     ├─ new errors in results              → Failed
//     └─ no generated class                 → MissingGeneratedClass
//
// Modules add entries on startup and remove them on shutdown; kinds are
// never hard-coded into the dispatch.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::blueprint::{Blueprint, BlueprintKind, GeneratedClass};

//=== CompileError ========================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("no compiler registered for Blueprint kind {0}")]
    UnsupportedKind(BlueprintKind),

    #[error("compiler {compiler} produced no generated class for {blueprint}")]
    MissingGeneratedClass { compiler: String, blueprint: String },

    #[error("{blueprint} failed to compile with {errors} error(s)")]
    Failed { blueprint: String, errors: usize },
}

//=== Options & Results ===================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileType {
    /// Class layout and generated code.
    #[default]
    Full,

    /// Class layout only.
    SkeletonOnly,
}

#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub compile_type: CompileType,

    /// Report warnings as errors.
    pub warnings_as_errors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

/// Messages collected while compiling.
#[derive(Debug, Clone, Default)]
pub struct CompilerResultsLog {
    messages: Vec<(Severity, String)>,
}

impl CompilerResultsLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.messages.push((Severity::Note, message.into()));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.messages.push((Severity::Warning, message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.messages.push((Severity::Error, message.into()));
    }

    pub fn messages(&self) -> &[(Severity, String)] {
        &self.messages
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.messages.iter().filter(|(s, _)| *s == severity).count()
    }
}

//=== BlueprintCompiler ===================================================

pub trait BlueprintCompiler {
    fn name(&self) -> &str;

    /// Compiles `blueprint`, reporting problems to `results`. Returns the
    /// generated class, or `None` if none was produced.
    fn compile(
        &self,
        blueprint: &Blueprint,
        options: &CompileOptions,
        results: &mut CompilerResultsLog,
    ) -> Option<GeneratedClass>;
}

//=== CompilerRegistry ====================================================

#[derive(Default)]
pub struct CompilerRegistry {
    compilers: HashMap<BlueprintKind, Box<dyn BlueprintCompiler>>,
}

impl CompilerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes `kind` to `compiler`, returning any compiler it replaced.
    pub fn register(
        &mut self,
        kind: BlueprintKind,
        compiler: Box<dyn BlueprintCompiler>,
    ) -> Option<Box<dyn BlueprintCompiler>> {
        let previous = self.compilers.insert(kind.clone(), compiler);
        if previous.is_some() {
            warn!("Compiler for {} was already registered and has been replaced", kind);
        }
        previous
    }

    pub fn unregister(&mut self, kind: &BlueprintKind) -> Option<Box<dyn BlueprintCompiler>> {
        self.compilers.remove(kind)
    }

    pub fn can_compile(&self, blueprint: &Blueprint) -> bool {
        self.compilers.contains_key(&blueprint.kind)
    }

    pub fn len(&self) -> usize {
        self.compilers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compilers.is_empty()
    }

    pub fn compile(
        &self,
        blueprint: &Blueprint,
        options: &CompileOptions,
        results: &mut CompilerResultsLog,
    ) -> Result<GeneratedClass, CompileError> {
        let compiler = self
            .compilers
            .get(&blueprint.kind)
            .ok_or_else(|| CompileError::UnsupportedKind(blueprint.kind.clone()))?;

        let errors_before = results.error_count();
        let warnings_before = results.warning_count();
        let generated = compiler.compile(blueprint, options, results);

        let mut errors = results.error_count() - errors_before;
        if options.warnings_as_errors {
            errors += results.warning_count() - warnings_before;
        }
        if errors > 0 {
            return Err(CompileError::Failed {
                blueprint: blueprint.name.clone(),
                errors,
            });
        }

        let class = generated.ok_or_else(|| CompileError::MissingGeneratedClass {
            compiler: compiler.name().to_string(),
            blueprint: blueprint.name.clone(),
        })?;

        info!("Compiled {} → {} with {}", blueprint.name, class.name, compiler.name());
        Ok(class)
    }
}

//=== Built-in Compilers ==================================================

/// Compiler shared by the framework's graph-based Blueprint kinds.
///
/// Validates the asset and produces its generated class descriptor.
#[derive(Debug, Clone)]
pub struct GraphBlueprintCompiler {
    name: &'static str,
    kind: BlueprintKind,
}

impl GraphBlueprintCompiler {
    pub fn npc_behavior() -> Self {
        Self {
            name: "NpcBehaviorBlueprintCompiler",
            kind: BlueprintKind::NpcBehavior,
        }
    }

    pub fn state_machine() -> Self {
        Self {
            name: "StateMachineBlueprintCompiler",
            kind: BlueprintKind::StateMachine,
        }
    }

    pub fn kind(&self) -> &BlueprintKind {
        &self.kind
    }
}

impl BlueprintCompiler for GraphBlueprintCompiler {
    fn name(&self) -> &str {
        self.name
    }

    fn compile(
        &self,
        blueprint: &Blueprint,
        options: &CompileOptions,
        results: &mut CompilerResultsLog,
    ) -> Option<GeneratedClass> {
        if blueprint.kind != self.kind {
            results.error(format!(
                "{} cannot compile {} Blueprint {}",
                self.name, blueprint.kind, blueprint.name
            ));
            return None;
        }

        if blueprint.name.is_empty() {
            results.error("Blueprint has no name");
            return None;
        }

        if blueprint.graphs.is_empty() {
            results.warning(format!("{} has no graphs", blueprint.name));
        }

        if options.compile_type == CompileType::SkeletonOnly {
            results.note(format!("{}: skeleton only", blueprint.name));
        }

        Some(GeneratedClass::for_blueprint(blueprint))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
