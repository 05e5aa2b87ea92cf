pub mod about;
pub mod app_showcase;
pub mod faq_accordion;
pub mod hero;
pub mod project_grid;
pub mod video_gallery;
