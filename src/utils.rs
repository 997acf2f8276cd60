use leptos::web_sys::HtmlInputElement;
use wasm_bindgen::JsCast;

pub fn input_value(ev: &leptos::ev::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
