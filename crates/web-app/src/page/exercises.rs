use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};

use manual_domain::{self as domain, CatalogService};

use crate::{
    CATALOG_SERVICE,
    component::{
        element::{Block, Dialog, ErrorMessage, LoadingPage, NoConnection, SearchBox},
        exercise_list::{IMAGES_DIR, ViewMode, ViewToggle, view_results},
        form::{SelectField, SelectOption},
    },
};

/// Viewport width up to which the sticky bar replaces the top controls.
const MOBILE_WIDTH: f64 = 600.0;

#[component]
pub fn Exercises() -> Element {
    let catalog = use_resource(|| async { CATALOG_SERVICE.read().get_catalog().await });

    let filter = use_signal(domain::ExerciseFilter::default);
    let mut search_state = use_signal(domain::SearchState::default);
    let view_mode = use_signal(ViewMode::default);
    let mut detail = use_signal(|| Option::<domain::ExerciseID>::None);
    let panel_open = use_signal(|| false);
    let sticky_visible = use_signal(|| false);

    use_effect(move || install_window_listeners(sticky_visible, panel_open, detail));
    use_effect(move || lock_body_scroll(detail.read().is_some()));

    match &*catalog.read() {
        Some(Ok(catalog)) => {
            let filtered = filter.read().exercises(catalog.exercises.iter());
            rsx! {
                header {
                    id: "header",
                    class: "block has-text-centered",
                    h1 { class: "title is-4", "movement manual" }
                }
                {view_controls(catalog, filter, search_state, view_mode, detail)}
                {view_sticky_bar(catalog, filter, view_mode, panel_open, sticky_visible)}
                {view_results(catalog, &filtered, *view_mode.read(), Callback::new(move |id| {
                    search_state.write().dismiss();
                    detail.set(Some(id));
                }))}
                {view_detail(catalog, filter, search_state, detail)}
            }
        }
        Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => {
            rsx! { NoConnection {} }
        }
        Some(Err(err)) => {
            rsx! { ErrorMessage { message: "{err}" } }
        }
        None => rsx! { LoadingPage {} },
    }
}

fn view_controls(
    catalog: &domain::Catalog,
    filter: Signal<domain::ExerciseFilter>,
    search_state: Signal<domain::SearchState>,
    view_mode: Signal<ViewMode>,
    detail: Signal<Option<domain::ExerciseID>>,
) -> Element {
    rsx! {
        div {
            class: "top-controls block px-4",
            {view_search(catalog, filter, search_state, detail)}
            div {
                class: "columns is-multiline is-vcentered mt-1",
                div {
                    class: "column",
                    {view_tag_select(catalog, filter, domain::TagCategory::Goals)}
                }
                div {
                    class: "column",
                    {view_tag_select(catalog, filter, domain::TagCategory::MuscleGroups)}
                }
                div {
                    class: "column",
                    {view_tag_select(catalog, filter, domain::TagCategory::StartingPositions)}
                }
                div {
                    class: "column",
                    {view_contra_select(catalog, filter)}
                }
                div {
                    class: "column is-narrow",
                    ViewToggle { view_mode }
                }
            }
        }
    }
}

fn view_search(
    catalog: &domain::Catalog,
    mut filter: Signal<domain::ExerciseFilter>,
    mut search_state: Signal<domain::SearchState>,
    detail: Signal<Option<domain::ExerciseID>>,
) -> Element {
    let query = filter.read().search.clone();
    let entries = domain::suggestions(catalog.exercises.iter(), &query)
        .into_iter()
        .map(|e| (e.id.clone(), e.name.to_lowercase()))
        .collect::<Vec<_>>();
    let count = entries.len();
    let highlighted = search_state.read().highlighted();
    let dropdown_open = search_state.read().is_suggesting() && count > 0;

    let activate = {
        let entries = entries.clone();
        move |index: usize| {
            if let Some((id, name)) = entries.get(index) {
                select_suggestion(filter, search_state, detail, id, name);
            }
        }
    };

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(index, (id, name))| {
            let display = name.clone();
            rsx! {
                a {
                    class: "dropdown-item",
                    class: if highlighted == Some(index) { "is-active" },
                    onclick: move |_| select_suggestion(filter, search_state, detail, &id, &name),
                    "{display}"
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "dropdown is-block",
            class: if dropdown_open { "is-active" },
            div {
                class: "dropdown-trigger is-flex",
                SearchBox {
                    search_term: query,
                    oninput: move |event: FormEvent| {
                        let value = event.value();
                        *search_state.write() = domain::SearchState::for_query(&value);
                        filter.write().search = value;
                    },
                    onkeydown: move |event: KeyboardEvent| match event.key() {
                        Key::ArrowDown => {
                            event.prevent_default();
                            search_state.write().move_down(count);
                        }
                        Key::ArrowUp => {
                            event.prevent_default();
                            search_state.write().move_up(count);
                        }
                        Key::Enter => {
                            event.prevent_default();
                            if let Some(index) = search_state.peek().highlighted() {
                                activate(index);
                            } else {
                                search_state.write().dismiss();
                            }
                        }
                        Key::Escape => search_state.write().dismiss(),
                        _ => {}
                    },
                }
            }
            if dropdown_open {
                div {
                    class: "dropdown-menu is-block",
                    div {
                        class: "dropdown-content",
                        for item in items {
                            {item}
                        }
                    }
                }
            }
        }
    }
}

fn select_suggestion(
    mut filter: Signal<domain::ExerciseFilter>,
    mut search_state: Signal<domain::SearchState>,
    mut detail: Signal<Option<domain::ExerciseID>>,
    id: &domain::ExerciseID,
    name: &str,
) {
    filter.write().search = name.to_string();
    search_state.write().select(id.clone());
    detail.set(Some(id.clone()));
}

fn view_tag_select(
    catalog: &domain::Catalog,
    mut filter: Signal<domain::ExerciseFilter>,
    category: domain::TagCategory,
) -> Element {
    let selected = match category {
        domain::TagCategory::Goals => filter.read().goal.clone(),
        domain::TagCategory::MuscleGroups => filter.read().muscle_group.clone(),
        domain::TagCategory::StartingPositions => filter.read().starting_position.clone(),
        domain::TagCategory::Contraindications => None,
    };
    let mut options = vec![rsx! {
        SelectOption { text: "all", value: "", selected: selected.is_none() }
    }];
    options.extend(catalog.tags.names(category).iter().map(|(id, name)| {
        rsx! {
            SelectOption {
                text: name.to_lowercase(),
                value: "{id}",
                selected: selected.as_ref() == Some(id),
            }
        }
    }));
    rsx! {
        SelectField {
            label: category.label(),
            options,
            is_active: selected.is_some(),
            onchange: move |event: FormEvent| {
                let value = event.value();
                let value = if value.is_empty() {
                    None
                } else {
                    Some(domain::TagID::from(value))
                };
                match category {
                    domain::TagCategory::Goals => filter.write().goal = value,
                    domain::TagCategory::MuscleGroups => filter.write().muscle_group = value,
                    domain::TagCategory::StartingPositions => {
                        filter.write().starting_position = value;
                    }
                    domain::TagCategory::Contraindications => {}
                }
            },
        }
    }
}

fn view_contra_select(
    catalog: &domain::Catalog,
    mut filter: Signal<domain::ExerciseFilter>,
) -> Element {
    let label = filter.read().contraindication_label(&catalog.tags);
    let options = filter.read().contraindication_list(&catalog.tags);
    let is_active = !filter.read().excluded_contraindications.is_empty();
    rsx! {
        ContraindicationSelect {
            label,
            options,
            is_active,
            ontoggle: move |id| filter.write().toggle_contraindication(id),
            onclear: move |()| filter.write().clear_contraindications(),
        }
    }
}

#[component]
fn ContraindicationSelect(
    label: String,
    options: Vec<(domain::TagID, String, bool)>,
    is_active: bool,
    ontoggle: EventHandler<domain::TagID>,
    onclear: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);
    rsx! {
        div {
            class: "field",
            label {
                class: "label is-small",
                {domain::TagCategory::Contraindications.label()}
            }
            div {
                class: "dropdown is-block",
                class: if *open.read() { "is-active" },
                div {
                    class: "dropdown-trigger",
                    button {
                        class: "button is-fullwidth is-justify-content-space-between",
                        class: if is_active { "is-link" },
                        onclick: move |_| {
                            let value = *open.peek();
                            open.set(!value);
                        },
                        span { "{label}" }
                        span { class: "icon is-small", i { class: "fas fa-angle-down" } }
                    }
                }
                div {
                    class: "dropdown-menu is-block",
                    div {
                        class: "dropdown-content",
                        a {
                            class: "dropdown-item",
                            onclick: move |_| onclear.call(()),
                            "clear all"
                        }
                        for (id, name, checked) in options {
                            label {
                                class: "dropdown-item checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked,
                                    onchange: move |_| ontoggle.call(id.clone()),
                                }
                                " {name}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn view_sticky_bar(
    catalog: &domain::Catalog,
    mut filter: Signal<domain::ExerciseFilter>,
    view_mode: Signal<ViewMode>,
    mut panel_open: Signal<bool>,
    sticky_visible: Signal<bool>,
) -> Element {
    let count = filter.read().active_count();
    let search = filter.read().search.clone();
    rsx! {
        div {
            class: "mobile-sticky px-3 py-2",
            class: if *sticky_visible.read() { "is-visible" },
            div {
                class: "field is-grouped",
                div {
                    class: "control is-expanded",
                    input {
                        class: "input is-small",
                        r#type: "text",
                        placeholder: "search exercises",
                        value: search,
                        oninput: move |event: FormEvent| filter.write().search = event.value(),
                    }
                }
                div {
                    class: "control",
                    button {
                        class: "button is-small",
                        class: if count > 0 { "is-link" },
                        onclick: move |_| {
                            let value = *panel_open.peek();
                            panel_open.set(!value);
                        },
                        span { class: "icon is-small", i { class: "fas fa-filter" } }
                        if count > 0 {
                            span { "({count})" }
                        }
                    }
                }
            }
            if *panel_open.read() {
                div {
                    class: "mobile-filters mt-2",
                    {view_tag_select(catalog, filter, domain::TagCategory::Goals)}
                    {view_tag_select(catalog, filter, domain::TagCategory::MuscleGroups)}
                    {view_tag_select(catalog, filter, domain::TagCategory::StartingPositions)}
                    {view_contra_select(catalog, filter)}
                    ViewToggle { view_mode }
                }
            }
        }
    }
}

fn view_detail(
    catalog: &domain::Catalog,
    filter: Signal<domain::ExerciseFilter>,
    search_state: Signal<domain::SearchState>,
    mut detail: Signal<Option<domain::ExerciseID>>,
) -> Element {
    let id = detail.read().clone();
    let Some(exercise) = id.as_ref().and_then(|id| catalog.exercise(id)) else {
        return rsx! {};
    };
    let name = exercise.name.to_lowercase();
    rsx! {
        Dialog {
            title: rsx! { "{name}" },
            close_event: move |_| detail.set(None),
            {view_detail_meta(catalog, exercise, filter, search_state, detail)}
            {view_detail_images(exercise)}
            {view_detail_sections(exercise)}
        }
    }
}

fn view_detail_meta(
    catalog: &domain::Catalog,
    exercise: &domain::Exercise,
    filter: Signal<domain::ExerciseFilter>,
    search_state: Signal<domain::SearchState>,
    detail: Signal<Option<domain::ExerciseID>>,
) -> Element {
    let position_tag = navigable_tag(
        filter,
        search_state,
        detail,
        domain::TagCategory::StartingPositions,
        exercise.starting_position.clone(),
        catalog.tags.name(
            domain::TagCategory::StartingPositions,
            &exercise.starting_position,
        ),
    );
    let goal_tags = exercise
        .goals
        .iter()
        .map(|id| {
            navigable_tag(
                filter,
                search_state,
                detail,
                domain::TagCategory::Goals,
                id.clone(),
                catalog.tags.name(domain::TagCategory::Goals, id),
            )
        })
        .collect::<Vec<_>>();
    let muscle_tags = exercise
        .muscle_groups
        .iter()
        .map(|id| {
            navigable_tag(
                filter,
                search_state,
                detail,
                domain::TagCategory::MuscleGroups,
                id.clone(),
                catalog.tags.name(domain::TagCategory::MuscleGroups, id),
            )
        })
        .collect::<Vec<_>>();
    let contra_tags = exercise
        .contraindications
        .iter()
        .map(|id| {
            let name = catalog.tags.name(domain::TagCategory::Contraindications, id);
            rsx! {
                span { class: "tag", "{name}" }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        Block {
            {meta_row("position", vec![position_tag])}
            {meta_row("goals", placeholder_if_empty(goal_tags))}
            {meta_row("muscles", placeholder_if_empty(muscle_tags))}
            // row omitted entirely when there are no contraindications
            if !contra_tags.is_empty() {
                {meta_row("contras", contra_tags)}
            }
        }
    }
}

fn meta_row(label: &str, tags: Vec<Element>) -> Element {
    rsx! {
        div {
            class: "is-flex is-align-items-center mb-2",
            span { class: "meta-label is-size-7 has-text-grey mr-3", "{label}" }
            div {
                class: "tags mb-0",
                for tag in tags {
                    {tag}
                }
            }
        }
    }
}

fn placeholder_if_empty(tags: Vec<Element>) -> Vec<Element> {
    if tags.is_empty() {
        vec![rsx! { span { class: "tag", "none" } }]
    } else {
        tags
    }
}

fn navigable_tag(
    filter: Signal<domain::ExerciseFilter>,
    search_state: Signal<domain::SearchState>,
    detail: Signal<Option<domain::ExerciseID>>,
    category: domain::TagCategory,
    id: domain::TagID,
    name: String,
) -> Element {
    rsx! {
        a {
            class: "tag is-link is-light",
            onclick: move |_| navigate_to_tag(filter, search_state, detail, category, id.clone()),
            "{name}"
        }
    }
}

/// Cross-navigation from a detail view tag: one filter set, everything else
/// reset, detail view closed, view scrolled back to the top.
fn navigate_to_tag(
    mut filter: Signal<domain::ExerciseFilter>,
    mut search_state: Signal<domain::SearchState>,
    mut detail: Signal<Option<domain::ExerciseID>>,
    category: domain::TagCategory,
    id: domain::TagID,
) {
    filter.set(domain::ExerciseFilter::for_tag(category, id));
    search_state.write().dismiss();
    detail.set(None);
    scroll_to_top();
}

fn view_detail_images(exercise: &domain::Exercise) -> Element {
    if exercise.images.is_empty() {
        return rsx! {};
    }
    let name = exercise.name.to_lowercase();
    rsx! {
        div {
            class: "detail-images block",
            for image in exercise.images.clone() {
                img {
                    class: "detail-image",
                    src: "{IMAGES_DIR}/{image}",
                    alt: "{name}",
                }
            }
        }
    }
}

fn view_detail_sections(exercise: &domain::Exercise) -> Element {
    let breath_steps = exercise.breath_steps();
    rsx! {
        if let Some(details) = exercise.starting_position_details.clone() {
            Block {
                h3 { class: "title is-6 mb-2", "starting position details" }
                p { "{details}" }
            }
        }
        Block {
            h3 { class: "title is-6 mb-2", "breath & action" }
            if breath_steps.is_empty() {
                p { "n/a" }
            } else {
                ul {
                    class: "breath-steps",
                    for step in breath_steps {
                        li {
                            if let Some(breath) = step.breath {
                                span {
                                    class: "has-text-weight-bold",
                                    "{breath.label()}: "
                                }
                            }
                            "{step.text}"
                        }
                    }
                }
            }
        }
        {view_text_list("watch points", &exercise.watch_points)}
        {view_text_list("modifications", &exercise.modifications)}
        {view_text_list("variations / props", &exercise.variations)}
    }
}

fn view_text_list(title: &str, items: &[String]) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    let items = items.iter().map(|i| i.to_lowercase()).collect::<Vec<_>>();
    rsx! {
        Block {
            h3 { class: "title is-6 mb-2", "{title}" }
            ul {
                for item in items {
                    li { "{item}" }
                }
            }
        }
    }
}

fn install_window_listeners(
    sticky_visible: Signal<bool>,
    panel_open: Signal<bool>,
    detail: Signal<Option<domain::ExerciseID>>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };

    install_sticky_listener(&window, sticky_visible, panel_open);
    install_escape_listener(&window, detail);
}

fn install_sticky_listener(
    window: &web_sys::Window,
    mut sticky_visible: Signal<bool>,
    mut panel_open: Signal<bool>,
) {
    let ticking = Rc::new(Cell::new(false));
    let update = Rc::new(Closure::<dyn FnMut()>::new({
        let window = window.clone();
        let ticking = ticking.clone();
        move || {
            ticking.set(false);
            let visible = is_mobile(&window)
                && window.scroll_y().unwrap_or_default() > sticky_threshold(&window);
            if *sticky_visible.peek() != visible {
                sticky_visible.set(visible);
            }
            if !visible && *panel_open.peek() {
                panel_open.set(false);
            }
        }
    }));

    // at most one state update per animation frame
    let on_scroll = Closure::<dyn FnMut()>::new({
        let window = window.clone();
        let update = update.clone();
        let ticking = ticking.clone();
        move || {
            if ticking.replace(true) {
                return;
            }
            if window
                .request_animation_frame((*update).as_ref().unchecked_ref())
                .is_err()
            {
                ticking.set(false);
            }
        }
    });
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("resize", on_scroll.as_ref().unchecked_ref());
    // listeners live for the lifetime of the page
    on_scroll.forget();
}

fn install_escape_listener(
    window: &web_sys::Window,
    mut detail: Signal<Option<domain::ExerciseID>>,
) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" && detail.peek().is_some() {
                detail.set(None);
            }
        },
    );
    let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

fn is_mobile(window: &web_sys::Window) -> bool {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width <= MOBILE_WIDTH)
}

fn sticky_threshold(window: &web_sys::Window) -> f64 {
    window
        .document()
        .and_then(|document| document.get_element_by_id("header"))
        .and_then(|header| header.dyn_into::<web_sys::HtmlElement>().ok())
        .map_or(0.0, |header| {
            f64::from(header.offset_top() + header.offset_height() + 20)
        })
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
