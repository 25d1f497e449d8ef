use serde::{Deserialize, Serialize};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}
