use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::{Reveal, REVEAL_THRESHOLD};

impl Reducible for Reveal {
    /// Whether the section is currently intersecting the viewport.
    type Action = bool;

    fn reduce(self: Rc<Self>, is_intersecting: bool) -> Rc<Self> {
        Rc::new(self.observe(is_intersecting))
    }
}

fn observer_supported() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct FadeInSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A section that fades in the first time at least 12% of it is on screen.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInSectionProps) -> Html {
    let node_ref = use_node_ref();
    let reveal = use_reducer_eq(|| Reveal::initial(observer_supported()));

    {
        let node_ref = node_ref.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                if !reveal.is_visible() {
                    if let Some(element) = node_ref.cast::<Element>() {
                        let callback = {
                            let reveal = reveal.dispatcher();
                            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                                move |entries: Array, observer: IntersectionObserver| {
                                    for entry in entries.iter() {
                                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                                        let intersecting = entry.is_intersecting();
                                        reveal.dispatch(intersecting);
                                        if intersecting {
                                            observer.unobserve(&entry.target());
                                        }
                                    }
                                },
                            )
                        };

                        let mut options = IntersectionObserverInit::new();
                        options.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                        let observer = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        );
                        match observer {
                            Ok(observer) => {
                                observer.observe(&element);
                                cleanup = Some((observer, callback));
                            }
                            Err(_) => {
                                log::warn!("IntersectionObserver unavailable, revealing section");
                                reveal.dispatch(true);
                            }
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = cleanup {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            ref={node_ref}
            class={classes!("fade-in-section", reveal.class(), props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
