use gloo::utils::document;
use ui::{counter_button::CounterButton, greeting::Greeting};
use yew::prelude::*;

pub mod ui;

#[function_component]
fn App() -> Html {
    html! {
        <div>
            <Greeting />
            <CounterButton />
        </div>
    }
}

fn main() {
    match document().get_element_by_id("root") {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
