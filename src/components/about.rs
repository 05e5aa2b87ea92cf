use yew::prelude::*;

use crate::config;

#[function_component(About)]
pub fn about() -> Html {
    let contact = config::get_contact_email();
    html! {
        <section class="about-section" id="about">
            <div class="about-content">
                <h2>{"About us"}</h2>
                <p>
                    {"We are a two-person studio building focused tools for people who would rather spend less time on their phones. "}
                    {"Everything we ship is fast, private by default and paid for once."}
                </p>
                <p>
                    {"When we are not working on our own apps we build websites and mobile apps for local businesses. "}
                    {"Say hi at "}
                    <a href={format!("mailto:{}", contact)} style="color: #7EB2FF; text-decoration: none;">{contact}</a>
                    {"."}
                </p>
            </div>
        </section>
    }
}
