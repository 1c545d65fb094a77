//! Callable object data: origin, kind and recorded metadata

/// The syntactic kind of a source-defined function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `function f() {}` declarations and expressions
    Normal,
    /// `() => {}`
    Arrow,
    /// Concise object or class method
    Method,
    /// `class` constructor
    ClassConstructor,
    /// `function* g() {}`
    Generator,
    /// `async function f() {}`
    Async,
    /// `async function* g() {}`
    AsyncGenerator,
}

/// Where a function object came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionOrigin {
    /// Defined by source code evaluated during partial execution
    Source {
        /// Whether the function body is strict mode code
        strict: bool,
        /// Syntactic kind
        kind: FunctionKind,
    },

    /// Built-in function implemented by the runtime
    Native,

    /// Result of `Function.prototype.bind`
    Bound,
}

/// Metadata recorded for a function object at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionData {
    /// Name the function was created with, if any
    pub original_name: Option<String>,

    /// Number of expected arguments, i.e. the value `length` starts with
    pub expected_argument_count: u32,

    /// Source, native or bound
    pub origin: FunctionOrigin,
}

impl FunctionData {
    /// Create data for a source-defined function
    pub fn source(
        name: impl Into<String>,
        expected_argument_count: u32,
        strict: bool,
        kind: FunctionKind,
    ) -> Self {
        Self {
            original_name: Some(name.into()),
            expected_argument_count,
            origin: FunctionOrigin::Source { strict, kind },
        }
    }

    /// Create data for a non-strict `function` declaration
    pub fn sloppy(name: impl Into<String>, expected_argument_count: u32) -> Self {
        Self::source(name, expected_argument_count, false, FunctionKind::Normal)
    }

    /// Create data for a native function
    pub fn native(name: impl Into<String>, expected_argument_count: u32) -> Self {
        Self {
            original_name: Some(name.into()),
            expected_argument_count,
            origin: FunctionOrigin::Native,
        }
    }

    /// Create data for a bound function
    pub fn bound(expected_argument_count: u32) -> Self {
        Self {
            original_name: None,
            expected_argument_count,
            origin: FunctionOrigin::Bound,
        }
    }

    /// Drop the recorded name (builder pattern)
    pub fn anonymous(mut self) -> Self {
        self.original_name = None;
        self
    }

    /// The recorded name, treating an empty name as absent
    pub fn recorded_name(&self) -> Option<&str> {
        self.original_name.as_deref().filter(|name| !name.is_empty())
    }
}
