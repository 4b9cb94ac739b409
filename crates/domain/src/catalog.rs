use crate::{
    exercise::{Exercise, ExerciseID},
    taxonomy::Taxonomy,
};

/// The dataset: tag taxonomy plus all exercises in dataset order. Loaded
/// once at startup and never mutated afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub tags: Taxonomy,
    pub exercises: Vec<Exercise>,
}

impl Catalog {
    #[must_use]
    pub fn exercise(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::taxonomy::TagID;

    fn exercise(id: &str, name: &str) -> Exercise {
        Exercise {
            id: id.into(),
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
        }
    }

    #[test]
    fn test_exercise_lookup() {
        let catalog = Catalog {
            tags: Taxonomy::default(),
            exercises: vec![exercise("e1", "Camel Stretch"), exercise("e2", "Cat Stretch")],
        };

        assert_eq!(
            catalog.exercise(&"e2".into()).map(|e| e.name.as_str()),
            Some("Cat Stretch")
        );
        assert_eq!(catalog.exercise(&"e3".into()), None);
    }
}
