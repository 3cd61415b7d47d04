use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The four canonical roles every position label collapses into. Comparing
/// players across roles is meaningless, so this is the normalization unit
/// for all baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

pub const ALL_ROLES: [Role; 4] = [
    Role::Goalkeeper,
    Role::Defender,
    Role::Midfielder,
    Role::Attacker,
];

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Goalkeeper => "Goalkeeper",
            Role::Defender => "Defender",
            Role::Midfielder => "Midfielder",
            Role::Attacker => "Attacker",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Role::Goalkeeper => 0,
            Role::Defender => 1,
            Role::Midfielder => 2,
            Role::Attacker => 3,
        }
    }
}

// Detailed provider labels, lowercased. Anything not listed here falls back
// to Midfielder.
static POSITION_MAP: Lazy<HashMap<&'static str, Role>> = Lazy::new(|| {
    HashMap::from([
        ("goalkeeper", Role::Goalkeeper),
        ("defender", Role::Defender),
        ("centre-back", Role::Defender),
        ("center-back", Role::Defender),
        ("right-back", Role::Defender),
        ("left-back", Role::Defender),
        ("midfielder", Role::Midfielder),
        ("defensive midfield", Role::Midfielder),
        ("central midfield", Role::Midfielder),
        ("attacking midfield", Role::Midfielder),
        ("right midfield", Role::Midfielder),
        ("left midfield", Role::Midfielder),
        ("attacker", Role::Attacker),
        ("forward", Role::Attacker),
        ("striker", Role::Attacker),
        ("centre-forward", Role::Attacker),
        ("right winger", Role::Attacker),
        ("left winger", Role::Attacker),
        ("second striker", Role::Attacker),
        ("winger", Role::Attacker),
    ])
});

/// Map a free-form provider position label onto one of the four canonical
/// roles, case-insensitively. Unknown, empty or missing labels all resolve
/// to Midfielder.
pub fn normalize_position(raw: Option<&str>) -> Role {
    let Some(raw) = raw else {
        return Role::Midfielder;
    };
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return Role::Midfielder;
    }
    POSITION_MAP
        .get(key.as_str())
        .copied()
        .unwrap_or(Role::Midfielder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detailed_labels_map_to_roles() {
        assert_eq!(normalize_position(Some("Centre-Back")), Role::Defender);
        assert_eq!(normalize_position(Some("right winger")), Role::Attacker);
        assert_eq!(normalize_position(Some("GOALKEEPER")), Role::Goalkeeper);
        assert_eq!(
            normalize_position(Some("Attacking Midfield")),
            Role::Midfielder
        );
    }

    #[test]
    fn unknown_and_missing_labels_fall_back_to_midfielder() {
        assert_eq!(normalize_position(Some("libero")), Role::Midfielder);
        assert_eq!(normalize_position(Some("")), Role::Midfielder);
        assert_eq!(normalize_position(Some("   ")), Role::Midfielder);
        assert_eq!(normalize_position(None), Role::Midfielder);
    }
}
