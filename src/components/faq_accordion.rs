use yew::prelude::*;

use crate::content::FaqEntry;
use crate::selection::{expansions, Catalog, Selection};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: String,
    question: String,
    answer: String,
    expanded: bool,
    on_toggle: Callback<String>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };
    html! {
        <div id={format!("faq-{}", props.id)} class={classes!("faq-item", props.expanded.then_some("open"))}>
            <div class="faq-question-container">
                <button class="faq-question" onclick={toggle} aria-expanded={props.expanded.to_string()}>
                    <span class="question-text">{&props.question}</span>
                    <span class="toggle-icon">{if props.expanded { "−" } else { "+" }}</span>
                </button>
            </div>
            if props.expanded {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static Catalog<FaqEntry>,
}

/// Only one answer is open at a time; opening another closes it.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let selection = use_state(Selection::<String>::default);

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |id: String| {
            let mut next = (*selection).clone();
            next.toggle(id);
            log::debug!("FAQ entry expanded: {:?}", next.active());
            selection.set(next);
        })
    };

    html! {
        <section class="faq-section" id="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                {
                    for expansions(props.entries, selection.active_str()).into_iter().map(|row| html! {
                        <FaqItem
                            key={row.record.id.clone()}
                            id={row.record.id.clone()}
                            question={row.record.question.clone()}
                            answer={row.record.answer.clone()}
                            expanded={row.expanded}
                            on_toggle={on_toggle.clone()}
                        />
                    })
                }
            </div>
        </section>
    }
}
