//! Tasche Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod context;
mod logger;
mod pages;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
