#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod gallery;
pub mod history;
pub mod input;
pub mod panels;
pub mod replicator;
pub mod session;
pub mod stroke;

pub use app::DoilyApp;
pub use canvas::CanvasEngine;
pub use gallery::GalleryStore;
pub use history::StrokeHistory;
pub use input::StrokeGesture;
pub use session::SessionParams;
pub use stroke::Stroke;
pub use stroke::StrokeRef;
