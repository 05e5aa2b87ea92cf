use showcase_site::Site;

fn main() {
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }));

    yew::Renderer::<Site>::new().render();
}
