//! OnionGate Signup Frontend Entry Point

mod app;
mod bindings;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod store;

use app::App;
use config::SignupConfig;
use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::JsCast;

/// Element the page reserves for the form
const MOUNT_ID: &str = "subdomain-signup";

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let _ = console_logger::init(level);

    let mount = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(MOUNT_ID));
    let config = SignupConfig::from_page(mount.as_ref());

    match mount.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(el) => leptos::mount::mount_to(el, move || view! { <App config=config /> }).forget(),
        None => {
            log::warn!("#{} not found, mounting signup form on <body>", MOUNT_ID);
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}
