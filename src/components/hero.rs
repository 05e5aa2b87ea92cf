use yew::prelude::*;

use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero" id="top">
            <div class="hero-background"></div>
            <div class="hero-content">
                <div class="hero-header">
                    <h1 class="hero-title">{config::get_brand_name()}</h1>
                    <p class="hero-subtitle">
                        {"Small, honest software."}<br/>
                        {"Apps that respect your time and websites that work as hard as you do."}
                    </p>
                </div>
                <div class="hero-cta-group">
                    <a href="#apps" class="hero-cta">{"See our apps"}</a>
                    <a href="#projects" class="hero-cta hero-cta-secondary">{"Client work"}</a>
                </div>
            </div>
        </header>
    }
}
