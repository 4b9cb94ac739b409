use dioxus::prelude::*;

#[component]
pub fn SelectField(
    label: String,
    options: Vec<Element>,
    is_active: bool,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label is-small", "{label}" }
            div {
                class: "control",
                div {
                    class: "select is-fullwidth",
                    class: if is_active { "is-link" },
                    select {
                        onchange,
                        for option in options {
                            {option}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SelectOption(text: String, value: String, selected: bool) -> Element {
    rsx! {
        option {
            selected,
            value,
            "{text}"
        }
    }
}
