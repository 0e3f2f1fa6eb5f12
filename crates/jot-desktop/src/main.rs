//! Jot Desktop Application
//!
//! A desktop client for the Jot notes service: browse notes, edit them in
//! the rich-text surface, and (for admins) review each note's audit trail.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod state;
mod theme;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jot=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Jot...");

    dioxus::launch(app::App);
}
