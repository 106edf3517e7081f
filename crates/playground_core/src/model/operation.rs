//! Operation selector shared by dispatch and the harness.

use serde::{Deserialize, Serialize};

/// One of the three summation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Scalar,
    Vector,
    Struct,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Self::Scalar, Self::Vector, Self::Struct];

    /// Stable lowercase name used on the command line and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
            Self::Struct => "struct",
        }
    }

    /// Parses `scalar|vector|struct`, trimmed and ASCII case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::Operation;

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!(Operation::parse("scalar"), Some(Operation::Scalar));
        assert_eq!(Operation::parse(" Vector "), Some(Operation::Vector));
        assert_eq!(Operation::parse("STRUCT"), Some(Operation::Struct));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Operation::parse("matrix"), None);
        assert_eq!(Operation::parse(""), None);
    }
}
