use yew::prelude::*;

use crate::components::about::About;
use crate::components::app_showcase::AppShowcase;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::hero::Hero;
use crate::components::project_grid::ProjectGrid;
use crate::components::video_gallery::VideoGallery;
use crate::config;
use crate::content;

const HOME_CSS: &str = r#"
    .home-page {
        background: #1a1a1a;
        color: #ddd;
        font-family: system-ui, sans-serif;
    }
    .home-page section {
        padding: 4rem 2rem;
        max-width: 1000px;
        margin: 0 auto;
    }
    .home-page h2 {
        font-size: 2.5rem;
        margin-bottom: 1.5rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        text-align: center;
    }
    .hero {
        min-height: 80vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-title {
        font-size: 3.5rem;
        color: white;
    }
    .hero-subtitle {
        font-size: 1.3rem;
        color: #bbb;
    }
    .hero-cta {
        display: inline-block;
        margin: 0.5rem;
        padding: 0.8rem 1.6rem;
        border-radius: 8px;
        background: #1E90FF;
        color: white;
        text-decoration: none;
    }
    .hero-cta-secondary {
        background: transparent;
        border: 1px solid #1E90FF;
    }
    .app-tabs, .project-filters {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        justify-content: center;
        margin-bottom: 2rem;
    }
    .app-tab, .filter-button {
        padding: 0.5rem 1rem;
        border-radius: 999px;
        border: 1px solid rgba(30, 144, 255, 0.3);
        background: transparent;
        color: #ddd;
        cursor: pointer;
    }
    .app-tab.active, .filter-button.active {
        background: #1E90FF;
        color: white;
    }
    .app-panel {
        padding: 2rem;
        border-radius: 16px;
        color: white;
    }
    .app-panel-header {
        display: flex;
        gap: 1rem;
        align-items: center;
    }
    .video-grid, .project-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
        gap: 1.5rem;
    }
    .project-card {
        padding: 1.5rem;
        border-radius: 12px;
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
    }
    .project-badge {
        font-size: 0.8rem;
        padding: 0.1rem 0.5rem;
        border-radius: 4px;
        text-transform: uppercase;
    }
    .stack-chip {
        display: inline-block;
        margin: 0.2rem;
        padding: 0.1rem 0.5rem;
        border-radius: 4px;
        background: rgba(126, 178, 255, 0.1);
        font-size: 0.8rem;
    }
    .project-empty, .content-unavailable {
        text-align: center;
        color: #999;
    }
    .faq-item {
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        padding: 1rem 0;
        background: none;
        border: none;
        color: white;
        font-size: 1.1rem;
        cursor: pointer;
        text-align: left;
    }
    .faq-answer {
        padding-bottom: 1rem;
        color: #bbb;
    }
    @media (max-width: 768px) {
        .home-page section {
            padding: 2rem 1rem;
        }
        .home-page h2 {
            font-size: 2rem;
        }
        .hero-title {
            font-size: 2.5rem;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let sections = match content::site_content() {
        Ok(content) => html! {
            <>
                <AppShowcase apps={&content.apps} />
                <VideoGallery videos={&content.videos} />
                <ProjectGrid projects={&content.projects} />
                <FaqAccordion entries={&content.faq} />
            </>
        },
        Err(e) => {
            log::error!("Rendering homepage without catalogs: {}", e);
            html! {
                <section class="content-unavailable">
                    <p>{"Our app and project listings are unavailable right now."}</p>
                    <p>
                        {"Reach us at "}
                        <a href={format!("mailto:{}", config::get_contact_email())}>{config::get_contact_email()}</a>
                    </p>
                </section>
            }
        }
    };

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>
            <Hero />
            <About />
            {sections}
            <footer style="text-align: center; padding: 2rem; color: #666;">
                {format!("© {}", config::get_brand_name())}
            </footer>
        </div>
    }
}
