use gloo_console::log;
use tally::counter::{Counter, CounterEvent};
use web_sys::MouseEvent;
use yew::prelude::*;

#[function_component]
pub fn CounterButton() -> Html {
    let counter = use_state(Counter::new);
    let onclick = {
        let counter = counter.clone();
        Callback::from(move |_event: MouseEvent| {
            let value = (*counter).apply(CounterEvent::Click);
            log!(format!("{}", value));
            counter.set(value);
        })
    };
    html! {
        <button {onclick} id="counter_button">{ (*counter).label() }</button>
    }
}
