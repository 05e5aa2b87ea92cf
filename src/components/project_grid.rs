use yew::prelude::*;

use crate::content::{Project, ProjectFilter};
use crate::selection::{filter, Catalog, Selection, StyleTable};

fn badge_colors() -> StyleTable<&'static str, &'static str> {
    StyleTable::new("#999")
        .with("website", "#7EB2FF")
        .with("mobile", "#7CD9A6")
}

fn filter_label(tag: ProjectFilter, count: usize) -> String {
    format!("{} ({})", tag.label(), count)
}

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub projects: &'static Catalog<Project>,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    let projects = props.projects;
    let selection = use_state(Selection::<ProjectFilter>::first_tag);
    let active = selection.active().copied();
    let colors = badge_colors();

    let buttons = projects
        .tag_counts::<ProjectFilter>()
        .into_iter()
        .map(|(tag, count)| {
            let onclick = {
                let selection = selection.clone();
                Callback::from(move |_: MouseEvent| {
                    log::debug!("Project filter selected: {:?}", tag);
                    let mut next = (*selection).clone();
                    next.select(tag);
                    selection.set(next);
                })
            };
            html! {
                <button
                    class={classes!("filter-button", (Some(tag) == active).then_some("active"))}
                    onclick={onclick}
                >
                    {filter_label(tag, count)}
                </button>
            }
        })
        .collect::<Html>();

    let visible = match active {
        Some(tag) => filter(projects, &tag),
        None => Vec::new(),
    };
    let grid = if visible.is_empty() {
        html! {
            <p class="project-empty">{"No projects in this category yet."}</p>
        }
    } else {
        visible
            .into_iter()
            .map(|project| {
                let color = *colors.get(project.kind.as_str());
                html! {
                    <article key={project.id.clone()} class="project-card">
                        <span
                            class="project-badge"
                            style={format!("color: {}; border: 1px solid {};", color, color)}
                        >
                            {&project.kind}
                        </span>
                        <h3>{&project.title}</h3>
                        <p>{&project.description}</p>
                        <div class="project-stack">
                            { for project.stack.iter().map(|tech| html! { <span class="stack-chip">{tech}</span> }) }
                        </div>
                        if let Some(link) = project.link.as_ref() {
                            <a href={link.clone()} target="_blank" rel="noopener noreferrer">{"View project"}</a>
                        }
                    </article>
                }
            })
            .collect::<Html>()
    };

    html! {
        <section class="projects-section" id="projects">
            <h2>{"Client work"}</h2>
            <div class="project-filters">
                {buttons}
            </div>
            <div class="project-grid">
                {grid}
            </div>
        </section>
    }
}
