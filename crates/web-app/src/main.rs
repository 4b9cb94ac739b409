#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use dioxus::prelude::*;
use log::error;

use manual_domain as domain;
use manual_storage as storage;

use page::{exercises::Exercises, not_found::NotFound};

mod component;
mod logging;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Exercises {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static CATALOG_SERVICE: GlobalSignal<domain::Service<storage::rest::Rest>> =
    Signal::global(|| domain::Service::new(storage::rest::Rest));

fn main() {
    let _ = logging::init();
    std::panic::set_hook(Box::new(|info| error!("{info}")));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
        }
    }
}
