// web_app/components/motion.rs - One-shot entry animations
//
// `Reveal` renders its children in the motion's initial state and flips to
// the target state once: right after mount for `Trigger::Mount`, or the
// first time the element intersects the viewport for `Trigger::Viewport`.
// The CSS transition in the inline style does the animating.
//
// On the server nothing fires, so the initial state is what gets rendered.

use leptos::html::Div;
use leptos::prelude::*;

use crate::web_app::model::{Motion, Trigger};

#[component]
pub fn Reveal(
    motion: Motion,
    children: Children,
    #[prop(default = "")]
    class: &'static str,
    /// Inline style kept in front of the animated properties
    #[prop(optional, into)]
    base_style: String,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let node_ref = NodeRef::<Div>::new();

    arm(motion.trigger, node_ref, revealed);

    view! {
        <div
            node_ref=node_ref
            class=class
            style=move || format!("{}{}", base_style, motion.style(revealed.get()))
        >
            {children()}
        </div>
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry};

        fn arm(trigger: Trigger, node_ref: NodeRef<Div>, revealed: RwSignal<bool>) {
            match trigger {
                Trigger::Mount => {
                    // Wait a frame so the initial state is painted before the transition starts.
                    Effect::new(move |_| {
                        leptos::leptos_dom::helpers::request_animation_frame(move || revealed.set(true));
                    });
                }
                Trigger::Viewport => {
                    Effect::new(move |_| {
                        if let Some(el) = node_ref.get() {
                            if let Err(err) = observe_once(&el, revealed) {
                                tracing::warn!("intersection observer unavailable: {:?}", err);
                                revealed.set(true);
                            }
                        }
                    });
                }
            }
        }

        fn observe_once(el: &web_sys::Element, revealed: RwSignal<bool>) -> Result<(), JsValue> {
            let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let entered = entries
                        .iter()
                        .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                    if entered {
                        revealed.set(true);
                        observer.disconnect();
                    }
                },
            );

            let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
            observer.observe(el);
            // The observer owns the callback for the rest of the page's life.
            on_intersect.forget();
            Ok(())
        }
    } else {
        fn arm(_trigger: Trigger, _node_ref: NodeRef<Div>, _revealed: RwSignal<bool>) {}
    }
}
