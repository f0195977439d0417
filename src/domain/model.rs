use serde::{Deserialize, Serialize};
use std::fmt;

/// A scenario element. Integers order before strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Int(i64),
    Text(String),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Int(value) => write!(f, "{}", value),
            Item::Text(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Item::Int(value)
    }
}

impl From<i32> for Item {
    fn from(value: i32) -> Self {
        Item::Int(i64::from(value))
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Text(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::Text(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add {
        value: Item,
    },
    Insert {
        index: usize,
        value: Item,
    },
    Get {
        index: usize,
    },
    Remove {
        value: Item,
    },
    RemoveAt {
        index: usize,
    },
    Clear,
    Sort {
        #[serde(default)]
        order: SortOrder,
    },
    Size,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add { value } => write!(f, "add({})", value),
            Operation::Insert { index, value } => write!(f, "insert({}, {})", index, value),
            Operation::Get { index } => write!(f, "get({})", index),
            Operation::Remove { value } => write!(f, "remove({})", value),
            Operation::RemoveAt { index } => write!(f, "remove_at({})", index),
            Operation::Clear => write!(f, "clear()"),
            Operation::Sort { order } => match order {
                SortOrder::Ascending => write!(f, "sort(asc)"),
                SortOrder::Descending => write!(f, "sort(desc)"),
            },
            Operation::Size => write!(f, "size()"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Ok,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// 1-based position in the scenario.
    pub step: usize,
    pub operation: String,
    pub status: OutcomeStatus,
    pub value: Option<String>,
    pub size_after: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Array,
    Linked,
    #[default]
    Both,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListKind::Array => "array",
            ListKind::Linked => "linked",
            ListKind::Both => "both",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    #[default]
    Continue,
    Abort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ordering_puts_integers_first() {
        let mut items = vec![Item::from("b"), Item::from(3), Item::from("a"), Item::from(-1)];
        items.sort();
        assert_eq!(
            items,
            vec![Item::from(-1), Item::from(3), Item::from("a"), Item::from("b")]
        );
    }

    #[test]
    fn test_operation_display() {
        let op = Operation::Insert {
            index: 0,
            value: Item::from("x"),
        };
        assert_eq!(op.to_string(), "insert(0, \"x\")");
        assert_eq!(Operation::Sort { order: SortOrder::Descending }.to_string(), "sort(desc)");
    }

    #[test]
    fn test_operation_json_shape() {
        let op: Operation = serde_json::from_str(r#"{"op":"remove_at","index":2}"#).unwrap();
        assert_eq!(op, Operation::RemoveAt { index: 2 });

        let op: Operation = serde_json::from_str(r#"{"op":"add","value":"pear"}"#).unwrap();
        assert_eq!(op, Operation::Add { value: Item::from("pear") });

        let op: Operation = serde_json::from_str(r#"{"op":"sort"}"#).unwrap();
        assert_eq!(op, Operation::Sort { order: SortOrder::Ascending });
    }
}
