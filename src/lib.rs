pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod models {
    pub mod article;
    pub mod bookmark;
    pub mod company;
    pub mod tracker;
}
pub mod components {
    pub mod article_card;
    pub mod article_writer;
    pub mod ask_ai;
    pub mod bookmark_button;
    pub mod bookmark_list;
    pub mod category_filters;
    pub mod company_search;
    pub mod feedback;
    pub mod login_form;
    pub mod navbar;
    pub mod news_feed;
    pub mod protected;
    pub mod search_bar;
    pub mod tracker;
}
pub mod api {
    pub mod actions;
    pub mod client;
    pub mod errors;
    #[cfg(feature = "ssr")]
    pub mod proxy;
}
pub mod rendering {
    pub mod dates;
    pub mod markdown;
}
pub mod storage {
    pub mod client;
}
#[cfg(feature = "ssr")]
pub mod state;
#[cfg(feature = "hydrate")]
pub mod logging;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::hydrate_body(app::App);
}
