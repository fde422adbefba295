//! Generated accessor code, compiled against `xamlnames-runtime`.
//!
//! `build.rs` runs the generator on the `MainWindow.xaml` fixture and the
//! output is included here unchanged. [`ui`] plays the toolkit.

pub mod ui;

/// Component generated from `MainWindow.xaml`.
pub mod main_window {
    include!(concat!(env!("OUT_DIR"), "/main_window.rs"));
}
