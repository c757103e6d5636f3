pub mod app;
pub mod error;
pub mod models {
    pub mod article;
}
pub mod components {
    pub mod article_form;
    pub mod article_list;
}
pub mod api {
    #[cfg(feature = "ssr")]
    pub mod articles;
    pub mod client;
    pub mod errors;
}
pub mod db {
    pub mod repository;
}
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
