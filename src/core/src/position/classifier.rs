use crate::position::FieldPositionGroup;

const GOALKEEPER_LABELS: &[&str] = &["GK", "G", "KEEPER", "GOALKEEPER"];

const DEFENDER_LABELS: &[&str] = &[
    "LB", "RB", "CB", "LCB", "RCB", "LWB", "RWB", "WB", "SW", "DC", "DL", "DR", "D", "DEF",
    "DEFENDER", "FULLBACK", "FULL-BACK", "CENTREBACK", "CENTERBACK", "CENTRE-BACK",
    "CENTER-BACK",
];

// CDM/CM/CAM are always midfielders.
const MIDFIELDER_LABELS: &[&str] = &[
    "CDM", "DM", "CM", "CAM", "AM", "LM", "RM", "MC", "ML", "MR", "AMC", "M", "MID",
    "MIDFIELDER",
];

const FORWARD_LABELS: &[&str] = &[
    "ST", "CF", "SS", "LW", "RW", "LF", "RF", "F", "FW", "FWD", "STRIKER", "WINGER", "FORWARD",
    "ATTACKER",
];

// Checked in order, the first hit wins.
const DESCRIPTIVE_FRAGMENTS: &[(&str, FieldPositionGroup)] = &[
    ("KEEPER", FieldPositionGroup::Goalkeeper),
    ("BACK", FieldPositionGroup::Defender),
    ("DEFEND", FieldPositionGroup::Defender),
    ("MIDFIELD", FieldPositionGroup::Midfielder),
    ("STRIK", FieldPositionGroup::Forward),
    ("WING", FieldPositionGroup::Forward),
    ("FORWARD", FieldPositionGroup::Forward),
];

const TOKEN_SEPARATORS: &[char] = &['/', ',', ' ', '-', '(', ')', ';', '|'];

/// Maps free-form position labels onto position groups.
pub struct PositionClassifier;

impl PositionClassifier {
    /// Never fails: unresolved labels become midfielders.
    pub fn classify(raw_position: &str) -> FieldPositionGroup {
        let label = raw_position.trim().to_uppercase();

        Self::exact(&label)
            .or_else(|| Self::by_token(&label))
            .or_else(|| Self::by_fragment(&label))
            .or_else(|| Self::by_first_letter(&label))
            .unwrap_or(FieldPositionGroup::Midfielder)
    }

    fn exact(label: &str) -> Option<FieldPositionGroup> {
        if GOALKEEPER_LABELS.contains(&label) {
            Some(FieldPositionGroup::Goalkeeper)
        } else if DEFENDER_LABELS.contains(&label) {
            Some(FieldPositionGroup::Defender)
        } else if MIDFIELDER_LABELS.contains(&label) {
            Some(FieldPositionGroup::Midfielder)
        } else if FORWARD_LABELS.contains(&label) {
            Some(FieldPositionGroup::Forward)
        } else {
            None
        }
    }

    /// "LW/ST", "CB, RB" and similar multi-role labels use their first known token.
    fn by_token(label: &str) -> Option<FieldPositionGroup> {
        label
            .split(TOKEN_SEPARATORS)
            .filter(|token| !token.is_empty())
            .find_map(Self::exact)
    }

    fn by_fragment(label: &str) -> Option<FieldPositionGroup> {
        DESCRIPTIVE_FRAGMENTS
            .iter()
            .find(|(fragment, _)| label.contains(*fragment))
            .map(|&(_, group)| group)
    }

    fn by_first_letter(label: &str) -> Option<FieldPositionGroup> {
        match label.chars().next()? {
            'D' => Some(FieldPositionGroup::Defender),
            'M' => Some(FieldPositionGroup::Midfielder),
            'F' | 'A' => Some(FieldPositionGroup::Forward),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_abbreviations() {
        assert_eq!(PositionClassifier::classify("GK"), FieldPositionGroup::Goalkeeper);
        assert_eq!(PositionClassifier::classify("LCB"), FieldPositionGroup::Defender);
        assert_eq!(PositionClassifier::classify("RWB"), FieldPositionGroup::Defender);
        assert_eq!(PositionClassifier::classify("CDM"), FieldPositionGroup::Midfielder);
        assert_eq!(PositionClassifier::classify("ST"), FieldPositionGroup::Forward);
        assert_eq!(PositionClassifier::classify("LW"), FieldPositionGroup::Forward);
    }

    #[test]
    fn attacking_midfield_is_midfield() {
        assert_eq!(PositionClassifier::classify("CAM"), FieldPositionGroup::Midfielder);
        assert_eq!(PositionClassifier::classify("cm"), FieldPositionGroup::Midfielder);
    }

    #[test]
    fn multi_role_labels_use_first_known_token() {
        assert_eq!(PositionClassifier::classify("LW/ST"), FieldPositionGroup::Forward);
        assert_eq!(PositionClassifier::classify("CB, RB"), FieldPositionGroup::Defender);
        assert_eq!(PositionClassifier::classify("XX / CM"), FieldPositionGroup::Midfielder);
    }

    #[test]
    fn descriptive_words() {
        assert_eq!(
            PositionClassifier::classify("Shot stopper / keeper"),
            FieldPositionGroup::Goalkeeper
        );
        assert_eq!(PositionClassifier::classify("Left back"), FieldPositionGroup::Defender);
        assert_eq!(PositionClassifier::classify("Inverted winger"), FieldPositionGroup::Forward);
    }

    #[test]
    fn first_letter_fallback() {
        assert_eq!(PositionClassifier::classify("Dxx"), FieldPositionGroup::Defender);
        assert_eq!(PositionClassifier::classify("Mezzala"), FieldPositionGroup::Midfielder);
        assert_eq!(PositionClassifier::classify("False nine"), FieldPositionGroup::Forward);
        assert_eq!(PositionClassifier::classify("Anchor"), FieldPositionGroup::Forward);
    }

    #[test]
    fn unresolved_defaults_to_midfielder() {
        assert_eq!(PositionClassifier::classify(""), FieldPositionGroup::Midfielder);
        assert_eq!(PositionClassifier::classify("   "), FieldPositionGroup::Midfielder);
        assert_eq!(PositionClassifier::classify("Libero?"), FieldPositionGroup::Midfielder);
        assert_eq!(PositionClassifier::classify("???"), FieldPositionGroup::Midfielder);
    }
}
