use crate::exercise::{Exercise, ExerciseID};

pub const MAX_SUGGESTIONS: usize = 8;

/// Dropdown state of the search box.
///
/// `Idle` covers both an empty query and a dismissed dropdown. `Selected`
/// is reached by activating a suggestion, which also opens the detail view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Suggesting {
        highlighted: Option<usize>,
    },
    Selected(ExerciseID),
}

impl SearchState {
    #[must_use]
    pub fn for_query(query: &str) -> Self {
        if query.trim().is_empty() {
            SearchState::Idle
        } else {
            SearchState::Suggesting { highlighted: None }
        }
    }

    #[must_use]
    pub fn is_suggesting(&self) -> bool {
        matches!(self, SearchState::Suggesting { .. })
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        match self {
            SearchState::Suggesting { highlighted } => *highlighted,
            SearchState::Idle | SearchState::Selected(_) => None,
        }
    }

    /// Moves the highlight towards the end of the suggestion list, clamped
    /// to the last entry. Without a highlight the first entry is chosen.
    pub fn move_down(&mut self, count: usize) {
        if let SearchState::Suggesting { highlighted } = self {
            if count > 0 {
                *highlighted = Some(highlighted.map_or(0, |i| (i + 1).min(count - 1)));
            }
        }
    }

    /// Moves the highlight towards the start of the suggestion list.
    /// Without a highlight the first entry is chosen.
    pub fn move_up(&mut self, count: usize) {
        if let SearchState::Suggesting { highlighted } = self {
            if count > 0 {
                *highlighted = Some(highlighted.map_or(0, |i| i.saturating_sub(1)));
            }
        }
    }

    /// Closes the dropdown and clears the highlight.
    pub fn dismiss(&mut self) {
        *self = SearchState::Idle;
    }

    pub fn select(&mut self, id: ExerciseID) {
        *self = SearchState::Selected(id);
    }
}

/// Up to [`MAX_SUGGESTIONS`] case-insensitive substring matches on the
/// exercise name, in dataset order. An empty query yields no suggestions.
#[must_use]
pub fn suggestions<'a>(
    exercises: impl Iterator<Item = &'a Exercise>,
    query: &str,
) -> Vec<&'a Exercise> {
    let query = query.to_lowercase();
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }
    exercises
        .filter(|e| e.name.to_lowercase().contains(query))
        .take(MAX_SUGGESTIONS)
        .collect()
}
