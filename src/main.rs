use tally::counter::{Counter, CounterEvent, GREETING};
use yew::prelude::*;

#[function_component]
fn App() -> Html {
    let counter = use_state(Counter::new);
    let onclick = {
        let counter = counter.clone();
        move |_| {
            let value = (*counter).apply(CounterEvent::Click);
            counter.set(value);
        }
    };

    html! {
        <div>
            <h1>{ GREETING }</h1>
            <button {onclick}>{ (*counter).label() }</button>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
