use yew::prelude::*;

use crate::content::App;
use crate::selection::{pick, Catalog, Selection, StyleTable};

#[derive(Clone, Debug, PartialEq)]
struct Accent {
    gradient: &'static str,
    icon: &'static str,
}

fn accent_table() -> StyleTable<&'static str, Accent> {
    StyleTable::new(Accent {
        gradient: "linear-gradient(135deg, #3a3a3a, #1e1e1e)",
        icon: "fas fa-cube",
    })
    .with(
        "productivity",
        Accent {
            gradient: "linear-gradient(135deg, #1E90FF, #7EB2FF)",
            icon: "fas fa-bolt",
        },
    )
    .with(
        "finance",
        Accent {
            gradient: "linear-gradient(135deg, #2E8B57, #7CD9A6)",
            icon: "fas fa-wallet",
        },
    )
    .with(
        "utility",
        Accent {
            gradient: "linear-gradient(135deg, #FF8C00, #FFC46B)",
            icon: "fas fa-toolbox",
        },
    )
}

/// What the panel below the tabs shows.
#[derive(Debug, PartialEq)]
enum Panel<'a> {
    App(&'a App),
    Placeholder,
}

fn panel_for<'a>(apps: &'a Catalog<App>, selection: &Selection<String>) -> Panel<'a> {
    match selection.active_str().and_then(|id| pick(apps, id)) {
        Some(app) => Panel::App(app),
        None => Panel::Placeholder,
    }
}

#[derive(Properties, PartialEq)]
pub struct AppShowcaseProps {
    pub apps: &'static Catalog<App>,
}

#[function_component(AppShowcase)]
pub fn app_showcase(props: &AppShowcaseProps) -> Html {
    let apps = props.apps;
    let selection = use_state(|| Selection::new(apps.default_key().map(str::to_string)));
    let accents = accent_table();

    let tabs = apps
        .iter()
        .map(|app| {
            let is_active = selection.is_active(&app.id);
            let onclick = {
                let selection = selection.clone();
                let id = app.id.clone();
                Callback::from(move |_: MouseEvent| {
                    log::debug!("App tab selected: {}", id);
                    let mut next = (*selection).clone();
                    next.select(id.clone());
                    selection.set(next);
                })
            };
            html! {
                <button
                    key={app.id.clone()}
                    class={classes!("app-tab", is_active.then_some("active"))}
                    onclick={onclick}
                >
                    {&app.name}
                </button>
            }
        })
        .collect::<Html>();

    let panel = match panel_for(apps, &selection) {
        Panel::App(app) => {
            let accent = accents.get(app.category.as_str());
            html! {
                <div class="app-panel" style={format!("background: {};", accent.gradient)}>
                    <div class="app-panel-header">
                        <i class={accent.icon}></i>
                        <div>
                            <h3>{&app.name}</h3>
                            <p class="app-tagline">{&app.tagline}</p>
                        </div>
                    </div>
                    <p class="app-description">{&app.description}</p>
                    <ul class="app-features">
                        { for app.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                    </ul>
                    if let Some(link) = app.link.as_ref() {
                        <a href={link.clone()} target="_blank" rel="noopener noreferrer" class="app-link">
                            {"Get the app"}
                        </a>
                    }
                </div>
            }
        }
        Panel::Placeholder => html! {
            <div class="app-panel app-panel-empty">
                <p>{"Pick an app to see what it does."}</p>
            </div>
        },
    };

    html! {
        <section class="app-showcase" id="apps">
            <h2>{"Our apps"}</h2>
            <div class="app-tabs">
                {tabs}
            </div>
            {panel}
        </section>
    }
}
