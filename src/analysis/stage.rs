use std::fmt;

pub const GROUP_LEAGUE: &str = "Group League";
pub const SUPER_SIX: &str = "Super Six";
pub const SEMI: &str = "Semi";
pub const ELIMINATOR: &str = "Eliminator";
pub const FINAL: &str = "Final";

/// Raw `match_type` label -> tournament stage.
const STAGE_TABLE: [(&str, &str); 6] = [
    ("League Match", GROUP_LEAGUE),
    ("Super Six", SUPER_SIX),
    ("Semi Final", SEMI),
    ("Eliminator", ELIMINATOR),
    ("Third Position", ELIMINATOR),
    ("Final", FINAL),
];

/// Display category of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageClass {
    League,
    SuperSix,
    Semi,
    Elim,
    Final,
}

impl StageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageClass::League => "league",
            StageClass::SuperSix => "super6",
            StageClass::Semi => "semi",
            StageClass::Elim => "elim",
            StageClass::Final => "final",
        }
    }
}

impl fmt::Display for StageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown labels come back unchanged.
pub fn normalize_stage(raw_type: &str) -> &str {
    for (raw, stage) in STAGE_TABLE {
        if raw == raw_type {
            return stage;
        }
    }
    raw_type
}

pub fn stage_class(stage: &str) -> StageClass {
    match stage {
        GROUP_LEAGUE => StageClass::League,
        SUPER_SIX => StageClass::SuperSix,
        SEMI => StageClass::Semi,
        ELIMINATOR => StageClass::Elim,
        FINAL => StageClass::Final,
        _ => StageClass::League,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_stages() {
        assert_eq!(normalize_stage("League Match"), "Group League");
        assert_eq!(normalize_stage("Super Six"), "Super Six");
        assert_eq!(normalize_stage("Semi Final"), "Semi");
        assert_eq!(normalize_stage("Eliminator"), "Eliminator");
        assert_eq!(normalize_stage("Third Position"), "Eliminator");
        assert_eq!(normalize_stage("Final"), "Final");
    }

    #[test]
    fn unknown_labels_pass_through() {
        for raw in ["Quarter Final", "", "league match", "Exhibition"] {
            assert_eq!(normalize_stage(raw), raw);
        }
    }

    #[test]
    fn stage_classes() {
        assert_eq!(stage_class("Group League").as_str(), "league");
        assert_eq!(stage_class("Super Six").as_str(), "super6");
        assert_eq!(stage_class("Semi").as_str(), "semi");
        assert_eq!(stage_class("Eliminator").as_str(), "elim");
        assert_eq!(stage_class("Final").as_str(), "final");
    }

    #[test]
    fn unknown_stage_class_defaults_to_league() {
        assert_eq!(stage_class("Quarter Final"), StageClass::League);
        // Raw labels are not stages
        assert_eq!(stage_class("Semi Final"), StageClass::League);
        assert_eq!(stage_class(normalize_stage("Semi Final")), StageClass::Semi);
    }
}
