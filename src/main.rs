use log::info;
use web_sys::{window, HtmlElement, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use storefront::config::{self, SiteConfig};
use storefront::hooks::use_smooth_anchor_scroll;
use storefront::menu::{MenuEvent, MenuState};
use storefront::pages::home::Home;

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let hamburger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let open = menu.open;
        use_effect_with_deps(
            move |open| {
                if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body.class_list().toggle_with_force("nav-open", *open);
                }
                || ()
            },
            open,
        );
    }

    // Clicks and taps anywhere but the menu or its trigger close it.
    let close_if_outside = {
        let menu = menu.clone();
        let hamburger_ref = hamburger_ref.clone();
        let menu_ref = menu_ref.clone();
        move |e: Event| {
            if !menu.open {
                return;
            }
            let Some(target) = e.target_dyn_into::<Node>() else {
                return;
            };
            let inside = [&menu_ref, &hamburger_ref]
                .iter()
                .filter_map(|node| node.get())
                .any(|node| node.contains(Some(&target)));
            if !inside {
                menu.dispatch(MenuEvent::OutsideClick);
            }
        }
    };
    use_event_with_window("click", close_if_outside.clone());
    use_event_with_window("touchstart", close_if_outside);

    {
        let menu = menu.clone();
        let hamburger_ref = hamburger_ref.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && menu.open {
                menu.dispatch(MenuEvent::Escape);
                if let Some(trigger) = hamburger_ref.cast::<HtmlElement>() {
                    let _ = trigger.focus();
                }
            }
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("resize", move |_: Event| {
            menu.dispatch(MenuEvent::Resized {
                viewport_width: viewport_width(),
            });
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu.dispatch(MenuEvent::Toggle);
        })
    };

    let on_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuEvent::LinkActivated {
                viewport_width: viewport_width(),
            });
        })
    };

    let open = menu.open;

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a class="nav-logo" href="#home">{props.brand.clone()}</a>

                <button
                    id="hamburger"
                    ref={hamburger_ref}
                    type="button"
                    class={classes!("hamburger", menu.class())}
                    aria-label="Toggle navigation"
                    aria-controls="navMenu"
                    aria-expanded={open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", menu.class())}>
                    <li><a class="nav-link" href="#home" onclick={on_link.clone()}>{"Home"}</a></li>
                    <li><a class="nav-link" href="#products" onclick={on_link.clone()}>{"Products"}</a></li>
                    <li><a class="nav-link" href="#about" onclick={on_link.clone()}>{"About"}</a></li>
                    <li><a class="nav-link" href="#contact" onclick={on_link}>{"Contact"}</a></li>
                </ul>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load_or_default(), ());
    use_smooth_anchor_scroll();

    html! {
        <>
            <Nav brand={config.brand.clone()} />
            <Home config={config.clone()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("Failed to initialize logging:", e.to_string());
    }

    info!("Starting storefront");
    yew::Renderer::<App>::new().render();
}
