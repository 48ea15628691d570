use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Case-insensitive registry of the aggregate reductions the dialect knows.
static AGGREGATES: Lazy<HashMap<&'static str, AggregateKind>> = Lazy::new(|| {
    HashMap::from([
        ("min", AggregateKind::Min),
        ("max", AggregateKind::Max),
        ("sum", AggregateKind::Sum),
        ("count", AggregateKind::Count),
        ("avg", AggregateKind::Avg),
    ])
});

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Min,
    Max,
    Sum,
    Count,
    Avg,
}

impl AggregateKind {
    pub fn resolve(name: &str) -> Option<AggregateKind> {
        AGGREGATES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    pub fn list() -> Vec<&'static str> {
        let mut names: Vec<_> = AGGREGATES.keys().copied().collect();
        names.sort();
        names
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::Min => "min",
            AggregateKind::Max => "max",
            AggregateKind::Sum => "sum",
            AggregateKind::Count => "count",
            AggregateKind::Avg => "avg",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AggregateKind({})", self)
    }
}

/// One aggregate expression from the select list, e.g. `min(win_by_runs)`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateFunction {
    pub kind: AggregateKind,
    pub field_name: String,
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.field_name)
    }
}

impl fmt::Debug for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AggregateFunction({})", self)
    }
}
