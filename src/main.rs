#![allow(warnings)]
//! Menu & Cart Frontend Entry Point

mod models;
mod config;
mod catalog;
mod cart;
mod section;
mod order;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] mounting menu");
    mount_to_body(App);
}
