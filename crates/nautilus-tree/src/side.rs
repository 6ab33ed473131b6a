use serde::{Deserialize, Serialize};

/// Half-plane a node renders in, relative to the root.
///
/// `A` grows to the right (+x) and `B` to the left (-x). `Center` is reserved for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    #[default]
    Center,
    B,
}

impl Side {
    /// Horizontal direction multiplier: `+1`, `0` or `-1`.
    pub fn sign(self) -> f64 {
        match self {
            Side::A => 1.0,
            Side::Center => 0.0,
            Side::B => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::Center => Side::Center,
            Side::B => Side::A,
        }
    }

    pub fn is_center(self) -> bool {
        matches!(self, Side::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn sign_matches_direction() {
        assert_eq!(Side::A.sign(), 1.0);
        assert_eq!(Side::Center.sign(), 0.0);
        assert_eq!(Side::B.sign(), -1.0);
        assert_eq!(Side::A.opposite(), Side::B);
        assert_eq!(Side::Center.opposite(), Side::Center);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::A).unwrap(), "\"a\"");
        let side: Side = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(side, Side::B);
    }
}
