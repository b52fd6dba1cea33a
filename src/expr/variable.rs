//! Decision variables.

use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u64);

impl VarId {
    /// Generate a new unique ID.
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        VarId(NEXT_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for VarId {
    fn default() -> Self {
        Self::new()
    }
}

/// A scalar decision variable.
///
/// Identity is the [`VarId`]; the name is only used for display. Two clones
/// of the same variable compare equal, two separately created variables
/// never do, even when they share a name. Ordering follows creation order.
#[derive(Debug, Clone)]
pub struct Variable {
    id: VarId,
    name: Option<Arc<str>>,
}

impl Variable {
    /// Create an anonymous variable.
    pub fn new() -> Self {
        Self {
            id: VarId::new(),
            name: None,
        }
    }

    /// Create a named variable.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: VarId::new(),
            name: Some(Arc::from(name.into())),
        }
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "v{}", self.id.raw()),
        }
    }
}

/// Create an anonymous variable.
pub fn variable() -> Variable {
    Variable::new()
}

/// Create a named variable.
pub fn named_variable(name: impl Into<String>) -> Variable {
    Variable::named(name)
}

/// Create `n` variables named `{prefix}0 .. {prefix}{n-1}`, in creation order.
///
/// # Examples
///
/// ```
/// use lpbridge::expr::variables;
///
/// let x = variables(3, "x");
/// assert_eq!(x[2].to_string(), "x2");
/// ```
pub fn variables(n: usize, prefix: &str) -> Vec<Variable> {
    (0..n)
        .map(|i| Variable::named(format!("{prefix}{i}")))
        .collect()
}
