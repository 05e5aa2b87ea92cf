use yew::prelude::*;

use crate::config;
use crate::content::Video;
use crate::selection::Catalog;

fn embed_src(video: &Video) -> String {
    config::video_embed_url(&video.youtube_id)
}

#[derive(Properties, PartialEq)]
pub struct VideoGalleryProps {
    pub videos: &'static Catalog<Video>,
}

#[function_component(VideoGallery)]
pub fn video_gallery(props: &VideoGalleryProps) -> Html {
    html! {
        <section class="video-gallery" id="videos">
            <h2>{"See them in action"}</h2>
            <div class="video-grid">
                {
                    for props.videos.iter().map(|video| html! {
                        <figure key={video.id.clone()} class="video-card">
                            <iframe
                                src={embed_src(video)}
                                title={video.title.clone()}
                                loading="lazy"
                                allow="accelerometer; encrypted-media; picture-in-picture"
                                allowfullscreen=true
                                style="width: 100%; aspect-ratio: 16/9; border: none; border-radius: 12px;"
                            ></iframe>
                            <figcaption>{&video.title}</figcaption>
                        </figure>
                    })
                }
            </div>
        </section>
    }
}
