#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::version::window_title;

fn main() {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        for (key, value) in [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")] {
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }

    // Logging goes through the tracing subscriber `launch` installs.
    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(window_title())
                    .with_inner_size(LogicalSize::new(1180.0, 820.0))
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
