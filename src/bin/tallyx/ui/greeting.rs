use tally::counter::GREETING;
use yew::prelude::*;

#[function_component]
pub fn Greeting() -> Html {
    html! {
        <h1 id="greeting">{ GREETING }</h1>
    }
}
