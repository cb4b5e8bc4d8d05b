use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod logging;
mod session;
mod storage;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
