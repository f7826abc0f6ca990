use crate::app::App;

mod app;
mod components;
mod results_grid;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
