//! Animated Background Component
//! Fills the page with slowly drifting translucent orbs behind the forms

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    // Populate the container after the component is in the DOM
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(100).await;

        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };

        if let Some(container) = document.get_element_by_id("animated-background") {
            if let Some(element) = container.dyn_ref::<HtmlElement>() {
                create_orbs(element);
            }
        }
    });

    view! {
        <div
            class="animated-background"
            id="animated-background"
        ></div>
    }
}

fn create_orbs(container: &HtmlElement) {
    let document = match web_sys::window().and_then(|win| win.document()) {
        Some(document) => document,
        None => return,
    };

    let num_orbs = 24;

    for _ in 0..num_orbs {
        let orb = match document.create_element("div") {
            Ok(orb) => orb,
            Err(_) => return,
        };

        orb.set_class_name("orb");

        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 6.0;
        let size = js_sys::Math::random() * 48.0 + 16.0;

        orb.set_attribute(
            "style",
            &format!(
                "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px;",
                left, top, delay, size, size
            ),
        )
        .ok();

        container.append_child(&orb).ok();
    }
}
