use std::collections::BTreeSet;

use crate::{
    exercise::Exercise,
    taxonomy::{TagCategory, TagID, Taxonomy},
};

/// The selection state: search text plus active filters, the sole input
/// (together with the catalog) to filtering. The default state matches
/// every exercise.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub goal: Option<TagID>,
    pub muscle_group: Option<TagID>,
    pub starting_position: Option<TagID>,
    pub excluded_contraindications: BTreeSet<TagID>,
}

impl ExerciseFilter {
    /// A filter that selects exactly one tag of a navigable category, with
    /// every other criterion reset. Contraindication tags are not navigable
    /// and yield the default filter.
    #[must_use]
    pub fn for_tag(category: TagCategory, id: TagID) -> Self {
        match category {
            TagCategory::Goals => Self {
                goal: Some(id),
                ..Self::default()
            },
            TagCategory::MuscleGroups => Self {
                muscle_group: Some(id),
                ..Self::default()
            },
            TagCategory::StartingPositions => Self {
                starting_position: Some(id),
                ..Self::default()
            },
            TagCategory::Contraindications => Self::default(),
        }
    }

    /// All exercises passing every active criterion, preserving the
    /// original relative order.
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| {
                e.matches_name(&self.search)
                    && self.goal.as_ref().is_none_or(|g| e.goals.contains(g))
                    && self
                        .muscle_group
                        .as_ref()
                        .is_none_or(|m| e.muscle_groups.contains(m))
                    && self
                        .starting_position
                        .as_ref()
                        .is_none_or(|p| e.starting_position == *p)
                    && !e
                        .contraindications
                        .iter()
                        .any(|c| self.excluded_contraindications.contains(c))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.goal.is_none()
            && self.muscle_group.is_none()
            && self.starting_position.is_none()
            && self.excluded_contraindications.is_empty()
    }

    /// Number of set single-value filters plus the size of the
    /// contraindication exclusion set. Shown as the mobile filter badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.goal.is_some())
            + usize::from(self.muscle_group.is_some())
            + usize::from(self.starting_position.is_some())
            + self.excluded_contraindications.len()
    }

    pub fn toggle_contraindication(&mut self, id: TagID) {
        if self.excluded_contraindications.contains(&id) {
            self.excluded_contraindications.remove(&id);
        } else {
            self.excluded_contraindications.insert(id);
        }
    }

    pub fn clear_contraindications(&mut self) {
        self.excluded_contraindications.clear();
    }

    #[must_use]
    pub fn contraindication_list(&self, taxonomy: &Taxonomy) -> Vec<(TagID, String, bool)> {
        taxonomy
            .contraindications
            .iter()
            .map(|(id, name)| {
                (
                    id.clone(),
                    name.to_lowercase(),
                    self.excluded_contraindications.contains(id),
                )
            })
            .collect()
    }

    /// Summary label of the contraindication exclusion set: "none selected"
    /// for an empty set, shortened names for up to two entries, a count
    /// beyond that.
    #[must_use]
    pub fn contraindication_label(&self, taxonomy: &Taxonomy) -> String {
        match self.excluded_contraindications.len() {
            0 => "none selected".to_string(),
            1 | 2 => self
                .excluded_contraindications
                .iter()
                .map(|id| short_name(&taxonomy.name(TagCategory::Contraindications, id)))
                .collect::<Vec<_>>()
                .join(", "),
            n => format!("{n} selected"),
        }
    }
}

/// First word of a lowercased display name, with a leading "acute " prefix
/// stripped.
fn short_name(name: &str) -> String {
    name.strip_prefix("acute ")
        .unwrap_or(name)
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(
        id: &str,
        name: &str,
        position: &str,
        goals: &[&str],
        muscle_groups: &[&str],
        contraindications: &[&str],
    ) -> Exercise {
        Exercise {
            id: id.into(),
            name: name.to_string(),
            starting_position: position.into(),
            goals: goals.iter().copied().map(TagID::from).collect(),
            muscle_groups: muscle_groups.iter().copied().map(TagID::from).collect(),
            contraindications: contraindications.iter().copied().map(TagID::from).collect(),
            main_image: None,
            images: vec![],
            starting_position_details: None,
            breath_action: vec![],
            watch_points: vec![],
            modifications: vec![],
            variations: vec![],
        }
    }

    fn exercises() -> Vec<Exercise> {
        vec![
            exercise("e1", "Camel Stretch", "p1", &["g1"], &["m1"], &[]),
            exercise("e2", "Cat Stretch", "p2", &["g2"], &["m1", "m2"], &["c1"]),
            exercise("e3", "Child Pose", "p1", &["g1", "g2"], &["m2"], &["c1", "c2"]),
        ]
    }

    fn taxonomy() -> Taxonomy {
        Taxonomy {
            contraindications: IndexMap::from([
                (TagID::from("c1"), "Acute Lower Back Pain".to_string()),
                (TagID::from("c2"), "Knee Injury".to_string()),
                (TagID::from("c3"), "Wrist Pain".to_string()),
            ]),
            ..Taxonomy::default()
        }
    }

    fn names<'a>(result: &[&'a Exercise]) -> Vec<&'a str> {
        result.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_exercises_without_active_criteria_preserves_order() {
        let exercises = exercises();
        let result = ExerciseFilter::default().exercises(exercises.iter());

        assert_eq!(names(&result), ["Camel Stretch", "Cat Stretch", "Child Pose"]);
    }

    #[test]
    fn test_exercises_is_idempotent() {
        let exercises = exercises();
        let filter = ExerciseFilter {
            search: "stretch".to_string(),
            ..ExerciseFilter::default()
        };

        assert_eq!(
            filter.exercises(exercises.iter()),
            filter.exercises(exercises.iter())
        );
    }

    #[rstest]
    #[case("cat", &["Cat Stretch"])]
    #[case("STRETCH", &["Camel Stretch", "Cat Stretch"])]
    #[case("  ca ", &["Camel Stretch", "Cat Stretch"])]
    #[case("", &["Camel Stretch", "Cat Stretch", "Child Pose"])]
    #[case("plank", &[])]
    fn test_exercises_by_search(#[case] search: &str, #[case] expected: &[&str]) {
        let exercises = exercises();
        let filter = ExerciseFilter {
            search: search.to_string(),
            ..ExerciseFilter::default()
        };

        assert_eq!(names(&filter.exercises(exercises.iter())), expected);
    }

    #[test]
    fn test_exercises_by_goal() {
        let exercises = exercises();
        let filter = ExerciseFilter {
            goal: Some("g2".into()),
            ..ExerciseFilter::default()
        };

        assert_eq!(
            names(&filter.exercises(exercises.iter())),
            ["Cat Stretch", "Child Pose"]
        );
    }

    #[test]
    fn test_exercises_by_muscle_group() {
        let exercises = exercises();
        let filter = ExerciseFilter {
            muscle_group: Some("m1".into()),
            ..ExerciseFilter::default()
        };

        assert_eq!(
            names(&filter.exercises(exercises.iter())),
            ["Camel Stretch", "Cat Stretch"]
        );
    }

    #[test]
    fn test_exercises_by_starting_position() {
        let exercises = exercises();
        let filter = ExerciseFilter {
            starting_position: Some("p1".into()),
            ..ExerciseFilter::default()
        };

        assert_eq!(
            names(&filter.exercises(exercises.iter())),
            ["Camel Stretch", "Child Pose"]
        );
    }

    #[rstest]
    #[case(&["c1"], &["Camel Stretch"])]
    #[case(&["c2"], &["Camel Stretch", "Cat Stretch"])]
    #[case(&["c1", "c2"], &["Camel Stretch"])]
    #[case(&["c3"], &["Camel Stretch", "Cat Stretch", "Child Pose"])]
    fn test_exercises_by_excluded_contraindications(
        #[case] excluded: &[&str],
        #[case] expected: &[&str],
    ) {
        let exercises = exercises();
        let filter = ExerciseFilter {
            excluded_contraindications: excluded.iter().copied().map(TagID::from).collect(),
            ..ExerciseFilter::default()
        };

        assert_eq!(names(&filter.exercises(exercises.iter())), expected);
    }

    #[test]
    fn test_exercises_combines_criteria() {
        let exercises = exercises();
        let filter = ExerciseFilter {
            search: "c".to_string(),
            goal: Some("g2".into()),
            excluded_contraindications: BTreeSet::from(["c2".into()]),
            ..ExerciseFilter::default()
        };

        assert_eq!(names(&filter.exercises(exercises.iter())), ["Cat Stretch"]);
    }

    #[test]
    fn test_for_tag_resets_all_other_criteria() {
        assert_eq!(
            ExerciseFilter::for_tag(TagCategory::Goals, "g1".into()),
            ExerciseFilter {
                goal: Some("g1".into()),
                ..ExerciseFilter::default()
            }
        );
        assert_eq!(
            ExerciseFilter::for_tag(TagCategory::MuscleGroups, "m1".into()),
            ExerciseFilter {
                muscle_group: Some("m1".into()),
                ..ExerciseFilter::default()
            }
        );
        assert_eq!(
            ExerciseFilter::for_tag(TagCategory::StartingPositions, "p1".into()),
            ExerciseFilter {
                starting_position: Some("p1".into()),
                ..ExerciseFilter::default()
            }
        );
        assert_eq!(
            ExerciseFilter::for_tag(TagCategory::Contraindications, "c1".into()),
            ExerciseFilter::default()
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(
            ExerciseFilter {
                search: "  ".to_string(),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
        assert!(
            !ExerciseFilter {
                goal: Some("g1".into()),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_active_count() {
        let mut filter = ExerciseFilter::default();
        assert_eq!(filter.active_count(), 0);

        filter.goal = Some("g1".into());
        filter.starting_position = Some("p1".into());
        assert_eq!(filter.active_count(), 2);

        filter.toggle_contraindication("c1".into());
        filter.toggle_contraindication("c2".into());
        assert_eq!(filter.active_count(), 4);

        filter.search = "cat".to_string();
        assert_eq!(filter.active_count(), 4);
    }

    #[test]
    fn test_toggle_and_clear_contraindications() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_contraindication("c1".into());
        assert_eq!(
            filter.excluded_contraindications,
            BTreeSet::from(["c1".into()])
        );

        filter.toggle_contraindication("c1".into());
        assert!(filter.excluded_contraindications.is_empty());

        filter.toggle_contraindication("c1".into());
        filter.toggle_contraindication("c2".into());
        filter.clear_contraindications();
        assert!(filter.excluded_contraindications.is_empty());
    }

    #[test]
    fn test_contraindication_list() {
        let mut filter = ExerciseFilter::default();
        filter.toggle_contraindication("c2".into());

        assert_eq!(
            filter.contraindication_list(&taxonomy()),
            vec![
                ("c1".into(), "acute lower back pain".to_string(), false),
                ("c2".into(), "knee injury".to_string(), true),
                ("c3".into(), "wrist pain".to_string(), false),
            ]
        );
    }

    #[rstest]
    #[case(&[], "none selected")]
    #[case(&["c1"], "lower")]
    #[case(&["c1", "c2"], "lower, knee")]
    #[case(&["c1", "c2", "c3"], "3 selected")]
    fn test_contraindication_label(#[case] excluded: &[&str], #[case] expected: &str) {
        let filter = ExerciseFilter {
            excluded_contraindications: excluded.iter().copied().map(TagID::from).collect(),
            ..ExerciseFilter::default()
        };

        assert_eq!(filter.contraindication_label(&taxonomy()), expected);
    }
}
