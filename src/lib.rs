pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod selection;

use yew::prelude::*;

use crate::pages::home::Home;

#[function_component(Site)]
pub fn site() -> Html {
    html! {
        <Home />
    }
}
