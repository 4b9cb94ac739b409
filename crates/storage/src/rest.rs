use gloo_net::http::Request;
use indexmap::IndexMap;
use serde::Deserialize;

use manual_domain as domain;

/// Relative location of the dataset document, resolved against the page
/// origin.
pub const DATASET_PATH: &str = "assets/data/exercises.json";

pub struct Rest;

impl domain::CatalogRepository for Rest {
    async fn read_catalog(&self) -> Result<domain::Catalog, domain::ReadError> {
        let response = Request::get(DATASET_PATH)
            .send()
            .await
            .map_err(|_| domain::StorageError::NoConnection)?;
        if !response.ok() {
            return Err(domain::StorageError::Other(
                format!("{} {}", response.status(), response.status_text()).into(),
            )
            .into());
        }
        let document = response
            .json::<CatalogDocument>()
            .await
            .map_err(|err| domain::StorageError::Malformed(err.to_string()))?;
        Ok(document.into())
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    tags: TaxonomyDocument,
    exercises: Vec<ExerciseDocument>,
}

impl From<CatalogDocument> for domain::Catalog {
    fn from(value: CatalogDocument) -> Self {
        Self {
            tags: value.tags.into(),
            exercises: value.exercises.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaxonomyDocument {
    goals: IndexMap<String, String>,
    muscle_groups: IndexMap<String, String>,
    starting_positions: IndexMap<String, String>,
    contraindications: IndexMap<String, String>,
}

impl From<TaxonomyDocument> for domain::Taxonomy {
    fn from(value: TaxonomyDocument) -> Self {
        Self {
            goals: tag_names(value.goals),
            muscle_groups: tag_names(value.muscle_groups),
            starting_positions: tag_names(value.starting_positions),
            contraindications: tag_names(value.contraindications),
        }
    }
}

fn tag_names(names: IndexMap<String, String>) -> IndexMap<domain::TagID, String> {
    names
        .into_iter()
        .map(|(id, name)| (domain::TagID::from(id), name))
        .collect()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseDocument {
    id: String,
    name: String,
    starting_position: String,
    goals: Vec<String>,
    muscle_groups: Vec<String>,
    contraindications: Vec<String>,
    #[serde(default)]
    main_image: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    starting_position_details: Option<String>,
    #[serde(default)]
    breath_action: Vec<String>,
    #[serde(default)]
    watch_points: Vec<String>,
    #[serde(default)]
    modifications: Vec<String>,
    #[serde(default)]
    variations: Vec<String>,
}

impl From<ExerciseDocument> for domain::Exercise {
    fn from(value: ExerciseDocument) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            starting_position: value.starting_position.into(),
            goals: value.goals.into_iter().map(Into::into).collect(),
            muscle_groups: value.muscle_groups.into_iter().map(Into::into).collect(),
            contraindications: value
                .contraindications
                .into_iter()
                .map(Into::into)
                .collect(),
            main_image: value.main_image,
            images: value.images,
            starting_position_details: value.starting_position_details,
            breath_action: value.breath_action,
            watch_points: value.watch_points,
            modifications: value.modifications,
            variations: value.variations,
        }
    }
}
