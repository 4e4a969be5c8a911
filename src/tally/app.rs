use crate::counter::{Counter, CounterEvent, GREETING};
use crate::dom::Document;

/// Contract between a component and the rendering layer: state is owned by
/// the mount, events run through the pure transition, and the view projects
/// state into a fresh document.
pub trait Component {
    type State: Clone;
    type Event: Clone;

    fn init() -> Self::State;
    fn update(state: Self::State, event: Self::Event) -> Self::State;
    fn view(state: &Self::State) -> Document<Self::Event>;
}

/// The scaffold application: a greeting heading and a button labelled with
/// the current count. Clicking the button increments the count by one.
pub struct App;

impl Component for App {
    type State = Counter;
    type Event = CounterEvent;

    fn init() -> Counter {
        Counter::new()
    }

    fn update(state: Counter, event: CounterEvent) -> Counter {
        state.apply(event)
    }

    fn view(state: &Counter) -> Document<CounterEvent> {
        let mut doc = Document::new("div");
        let heading = doc.element(doc.root(), "h1");
        doc.text(heading, GREETING);
        let button = doc.element(doc.root(), "button");
        doc.set_on_click(button, CounterEvent::Click);
        doc.text(button, &state.label());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view0() {
        let doc = App::view(&App::init());
        assert_eq!(
            format!("{}", doc),
            "<div><h1>Vite + React</h1><button>count is 0</button></div>"
        );
    }

    #[test]
    fn view1() {
        let state = App::update(App::init(), CounterEvent::Click);
        let doc = App::view(&state);
        assert_eq!(
            format!("{}", doc),
            "<div><h1>Vite + React</h1><button>count is 1</button></div>"
        );
    }
}
