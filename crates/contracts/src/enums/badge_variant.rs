use serde::{Deserialize, Serialize};

/// Badge style used by directory tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
    Outline,
}
