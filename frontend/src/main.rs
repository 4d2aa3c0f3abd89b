use yew::prelude::*;

mod game;

#[function_component(Main)]
fn app() -> Html {
    html! {
        <game::Game />
    }
}

fn main() {
    yew::Renderer::<Main>::new().render();
}
