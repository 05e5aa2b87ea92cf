// Overridable at build time, e.g. `SITE_BRAND_NAME="Acme" trunk build --release`.

const DEFAULT_BRAND_NAME: &str = "Northlight Tools";
const DEFAULT_CONTACT_EMAIL: &str = "hello@northlight.tools";
const DEFAULT_VIDEO_EMBED_HOST: &str = "https://www.youtube-nocookie.com";

pub fn get_brand_name() -> &'static str {
    option_env!("SITE_BRAND_NAME").unwrap_or(DEFAULT_BRAND_NAME)
}

pub fn get_contact_email() -> &'static str {
    option_env!("SITE_CONTACT_EMAIL").unwrap_or(DEFAULT_CONTACT_EMAIL)
}

pub fn get_video_embed_host() -> &'static str {
    option_env!("SITE_VIDEO_EMBED_HOST").unwrap_or(DEFAULT_VIDEO_EMBED_HOST)
}

pub fn video_embed_url(youtube_id: &str) -> String {
    embed_url(get_video_embed_host(), youtube_id)
}

fn embed_url(host: &str, youtube_id: &str) -> String {
    format!("{}/embed/{}", host.trim_end_matches('/'), youtube_id)
}
