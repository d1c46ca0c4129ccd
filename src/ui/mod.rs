//! Terminal UI: the interactive game view with column selector, score line,
//! and win/draw banners.

mod app;
mod game_view;

pub use app::App;
