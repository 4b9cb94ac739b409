use dioxus::prelude::*;

use manual_domain as domain;

use crate::component::element::Table;

pub const IMAGES_DIR: &str = "assets/images";

/// Presentational mode of the result collection. Toggling never recomputes
/// the filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[component]
pub fn ViewToggle(view_mode: Signal<ViewMode>) -> Element {
    rsx! {
        div {
            class: "field has-addons",
            for (mode, icon, label) in [
                (ViewMode::Grid, "table-cells-large", "grid"),
                (ViewMode::List, "list", "list"),
            ] {
                p {
                    class: "control",
                    button {
                        class: "button is-small",
                        class: if *view_mode.read() == mode { "is-link" },
                        onclick: move |_| view_mode.set(mode),
                        span { class: "icon is-small", i { class: "fas fa-{icon}" } }
                        span { "{label}" }
                    }
                }
            }
        }
    }
}

pub fn view_results(
    catalog: &domain::Catalog,
    exercises: &[&domain::Exercise],
    view_mode: ViewMode,
    exercise_onclick: EventHandler<domain::ExerciseID>,
) -> Element {
    let count = exercises.len();
    let body = if count == 0 {
        rsx! {
            p {
                class: "has-text-centered has-text-grey my-6",
                "no exercises match your filters"
            }
        }
    } else {
        match view_mode {
            ViewMode::Grid => view_grid(catalog, exercises, exercise_onclick),
            ViewMode::List => view_list(catalog, exercises, exercise_onclick),
        }
    };
    rsx! {
        p {
            class: "is-size-7 has-text-grey px-4 mb-2",
            if count == 1 { "1 exercise" } else { "{count} exercises" }
        }
        {body}
    }
}

fn view_grid(
    catalog: &domain::Catalog,
    exercises: &[&domain::Exercise],
    exercise_onclick: EventHandler<domain::ExerciseID>,
) -> Element {
    let cards = exercises
        .iter()
        .map(|e| {
            let id = e.id.clone();
            let name = e.name.to_lowercase();
            let goals = e
                .goals
                .iter()
                .map(|g| catalog.tags.name(domain::TagCategory::Goals, g))
                .collect::<Vec<_>>();
            let image = e.main_image.clone();
            rsx! {
                div {
                    class: "exercise-card is-clickable",
                    onclick: move |_| exercise_onclick.call(id.clone()),
                    if let Some(file) = image {
                        img {
                            class: "card-image",
                            src: "{IMAGES_DIR}/{file}",
                            alt: "{name}",
                            loading: "lazy",
                        }
                    } else {
                        div { class: "card-image" }
                    }
                    div {
                        class: "card-info p-3",
                        div { class: "has-text-weight-bold", "{name}" }
                        div {
                            class: "tags mt-1",
                            for goal in goals {
                                span { class: "tag", "{goal}" }
                            }
                        }
                    }
                }
            }
        })
        .collect::<Vec<_>>();
    rsx! {
        div {
            class: "exercise-grid",
            for card in cards {
                {card}
            }
        }
    }
}

fn view_list(
    catalog: &domain::Catalog,
    exercises: &[&domain::Exercise],
    exercise_onclick: EventHandler<domain::ExerciseID>,
) -> Element {
    let body = exercises
        .iter()
        .map(|e| {
            let id = e.id.clone();
            let name = e.name.to_lowercase();
            let position = catalog
                .tags
                .name(domain::TagCategory::StartingPositions, &e.starting_position);
            let goals = e
                .goals
                .iter()
                .map(|g| catalog.tags.name(domain::TagCategory::Goals, g))
                .collect::<Vec<_>>();
            vec![
                rsx! {
                    span {
                        class: "has-text-link is-clickable",
                        onclick: move |_| exercise_onclick.call(id.clone()),
                        "{name}"
                    }
                },
                rsx! { "{position}" },
                rsx! {
                    div {
                        class: "tags",
                        for goal in goals {
                            span { class: "tag", "{goal}" }
                        }
                    }
                },
            ]
        })
        .collect::<Vec<_>>();
    rsx! {
        Table {
            head: vec![rsx! { "name" }, rsx! { "position" }, rsx! { "goals" }],
            body,
        }
    }
}
