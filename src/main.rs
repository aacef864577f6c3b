//! Todo Frontend Entry Point

mod actions;
mod app;
mod browser;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod ids;
mod list;
mod menu;
mod models;
mod schedule;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
