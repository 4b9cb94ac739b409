use derive_more::{AsRef, Display, Into};

use crate::taxonomy::TagID;

#[derive(AsRef, Debug, Display, Clone, Hash, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single catalog entry. Immutable after load.
///
/// Tag lists keep dataset order. Media fields hold bare filenames that are
/// resolved against the asset directory by the render layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub starting_position: TagID,
    pub goals: Vec<TagID>,
    pub muscle_groups: Vec<TagID>,
    pub contraindications: Vec<TagID>,
    pub main_image: Option<String>,
    pub images: Vec<String>,
    pub starting_position_details: Option<String>,
    pub breath_action: Vec<String>,
    pub watch_points: Vec<String>,
    pub modifications: Vec<String>,
    pub variations: Vec<String>,
}

impl Exercise {
    #[must_use]
    pub fn matches_name(&self, query: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(query.to_lowercase().trim())
    }

    #[must_use]
    pub fn breath_steps(&self) -> Vec<BreathStep> {
        self.breath_action
            .iter()
            .map(|step| BreathStep::from(step.as_str()))
            .collect()
    }
}

/// One line of the breath & action sequence, lowercased for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathStep {
    pub breath: Option<Breath>,
    pub text: String,
}

impl From<&str> for BreathStep {
    fn from(step: &str) -> Self {
        let lower = step.to_lowercase();
        if let Some(rest) = lower.strip_prefix("inhale:") {
            Self {
                breath: Some(Breath::Inhale),
                text: rest.trim_start().to_string(),
            }
        } else if let Some(rest) = lower.strip_prefix("exhale:") {
            Self {
                breath: Some(Breath::Exhale),
                text: rest.trim_start().to_string(),
            }
        } else {
            Self {
                breath: None,
                text: lower,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Breath {
    Inhale,
    Exhale,
}

impl Breath {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Breath::Inhale => "inhale",
            Breath::Exhale => "exhale",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Inhale: lengthen the spine", Some(Breath::Inhale), "lengthen the spine")]
    #[case("EXHALE: round the back", Some(Breath::Exhale), "round the back")]
    #[case("Hold for three breaths", None, "hold for three breaths")]
    #[case("inhale deeply", None, "inhale deeply")]
    #[case("exhale:sink the hips", Some(Breath::Exhale), "sink the hips")]
    fn test_breath_step_from(
        #[case] step: &str,
        #[case] breath: Option<Breath>,
        #[case] text: &str,
    ) {
        assert_eq!(
            BreathStep::from(step),
            BreathStep {
                breath,
                text: text.to_string()
            }
        );
    }

    #[rstest]
    #[case("Cat Stretch", "cat", true)]
    #[case("Cat Stretch", "  CAT ", true)]
    #[case("Cat Stretch", "", true)]
    #[case("Cat Stretch", "camel", false)]
    fn test_matches_name(#[case] name: &str, #[case] query: &str, #[case] expected: bool) {
        let exercise = Exercise {
            id: ExerciseID::from("e1"),
            name: name.to_string(),
            starting_position: TagID::from("p1"),
            goals: vec![],
            muscle_groups: vec![],
            contraindications: vec![],
            main_image: None,
            images: vec![],
            starting_position_details: None,
            breath_action: vec![],
            watch_points: vec![],
            modifications: vec![],
            variations: vec![],
        };
        assert_eq!(exercise.matches_name(query), expected);
    }
}
