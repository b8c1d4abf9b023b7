//! Vitaline
//!
//! A desktop portfolio with an interactive career timeline.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;
mod timeline;
mod utils;

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use dioxus::desktop::wry::http::{Request, Response, StatusCode};
use dioxus::desktop::wry::RequestAsyncResponder;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Serves local files to the webview under `http://vita.localhost/`. The path
/// arrives as a single percent-encoded segment built by
/// [`utils::get_local_file_url`].
fn serve_local_file(request: Request<Vec<u8>>, responder: RequestAsyncResponder) {
    let encoded = request.uri().path().trim_start_matches('/');
    let path = match urlencoding::decode(encoded) {
        Ok(decoded) => PathBuf::from(decoded.into_owned()),
        Err(_) => return respond_not_found(responder),
    };
    match fs::read(&path) {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            let response = Response::builder()
                .header("Content-Type", mime.as_ref())
                .body(Cow::from(bytes))
                .unwrap_or_else(|_| Response::new(Cow::from(Vec::new())));
            responder.respond(response);
        }
        Err(err) => {
            eprintln!("[ASSETS WARN] Failed to read {}: {}", path.display(), err);
            respond_not_found(responder);
        }
    }
}

fn respond_not_found(responder: RequestAsyncResponder) {
    let response = Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Cow::from(Vec::new()))
        .unwrap_or_else(|_| Response::new(Cow::from(Vec::new())));
    responder.respond(response);
}

fn main() {
    // Configure the window; chrome is drawn by the app itself.
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Vitaline")
                .with_inner_size(LogicalSize::new(1180.0, 760.0))
                .with_min_inner_size(LogicalSize::new(900.0, 600.0))
                .with_decorations(false)
                .with_resizable(true),
        )
        .with_asynchronous_custom_protocol("vita", |_webview_id, request, responder| {
            serve_local_file(request, responder)
        })
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
