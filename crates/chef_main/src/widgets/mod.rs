mod app;
mod image_overlay;
mod item_list;
mod status_bar;

pub use app::App;
