use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::{window, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::SlideConfig;
use crate::rotator::{
    indicators_for, initial_index, AutoplayTimer, SlideFrame, SlideRotator, DEFAULT_INTERVAL_MS,
};

/// Autoplay backed by a browser interval. Dropping the handle clears it.
pub struct IntervalTimer {
    tick: Callback<()>,
    handle: Option<Interval>,
}

impl IntervalTimer {
    pub fn new(tick: Callback<()>) -> Self {
        Self { tick, handle: None }
    }
}

impl AutoplayTimer for IntervalTimer {
    fn arm(&mut self, interval_ms: u32) {
        let tick = self.tick.clone();
        self.handle = Some(Interval::new(interval_ms, move || tick.emit(())));
    }

    fn disarm(&mut self) {
        self.handle.take();
    }

    fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

type SharedRotator = Rc<RefCell<Option<SlideRotator<IntervalTimer>>>>;

/// Runs `op` against the rotator and pushes the resulting frame to the view.
/// The borrow ends before the state setter runs.
fn drive(
    rotator: &SharedRotator,
    frame: &UseStateSetter<SlideFrame>,
    op: impl FnOnce(&mut SlideRotator<IntervalTimer>),
) {
    let (before, after) = match rotator.borrow_mut().as_mut() {
        Some(rotator) => {
            let before = rotator.frame();
            op(rotator);
            (before, rotator.frame())
        }
        None => return,
    };
    if before != after {
        frame.set(after);
    }
}

fn focus_in_text_field() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<SlideConfig>,
    #[prop_or(DEFAULT_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let marked: Vec<bool> = props.slides.iter().map(|slide| slide.active).collect();
    let rotator: SharedRotator = use_mut_ref(|| None);
    let frame = {
        let initial = initial_index(&marked);
        use_state(move || SlideFrame {
            current: initial,
            activation: 0,
        })
    };
    let slider_ref = use_node_ref();

    {
        let rotator = rotator.clone();
        let frame = frame.setter();
        use_effect_with_deps(
            move |(marked, interval_ms)| {
                let weak = Rc::downgrade(&rotator);
                let tick = {
                    let frame = frame.clone();
                    Callback::from(move |_: ()| {
                        if let Some(rotator) = weak.upgrade() {
                            drive(&rotator, &frame, |r| r.next());
                        }
                    })
                };
                *rotator.borrow_mut() =
                    SlideRotator::new(marked, *interval_ms, IntervalTimer::new(tick));
                drive(&rotator, &frame, |r| r.start());
                debug!("Hero slider mounted with {} slides", marked.len());

                move || {
                    // Dropping the rotator drops its interval.
                    rotator.borrow_mut().take();
                }
            },
            (marked.clone(), props.interval_ms),
        );
    }

    {
        let rotator = rotator.clone();
        let frame = frame.setter();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let typing = focus_in_text_field();
            drive(&rotator, &frame, |r| {
                r.handle_key(&e.key(), typing);
            });
        });
    }

    if props.slides.is_empty() {
        return html! {};
    }

    let onmouseover = {
        let rotator = rotator.clone();
        let frame = frame.setter();
        Callback::from(move |_: MouseEvent| drive(&rotator, &frame, |r| r.stop()))
    };

    // mouseleave from a child also reaches this handler, only leaving the
    // slider itself resumes autoplay.
    let onmouseleave = {
        let rotator = rotator.clone();
        let frame = frame.setter();
        let slider_ref = slider_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let left_slider = match (slider_ref.get(), e.target_dyn_into::<Node>()) {
                (Some(slider), Some(target)) => slider.is_same_node(Some(&target)),
                _ => false,
            };
            if left_slider {
                drive(&rotator, &frame, |r| r.start());
            }
        })
    };

    let step = |forward: bool| {
        let rotator = rotator.clone();
        let frame = frame.setter();
        Callback::from(move |_: MouseEvent| {
            drive(&rotator, &frame, |r| {
                r.stop();
                if forward {
                    r.next();
                } else {
                    r.previous();
                }
                r.start();
            })
        })
    };

    let current = frame.current;
    let activation = frame.activation;

    let slides = props.slides.iter().enumerate().map(|(index, slide)| {
        let active = index == current;
        let content = html! {
            <>
                <h1>{slide.title.clone()}</h1>
                <p>{slide.subtitle.clone()}</p>
                {
                    match (&slide.cta_label, &slide.cta_href) {
                        (Some(label), Some(href)) => html! {
                            <a class="cta-button" href={href.clone()}>{label.clone()}</a>
                        },
                        _ => html! {},
                    }
                }
            </>
        };
        // A fresh key on every activation recreates the block so the
        // entrance animation runs again.
        let content = if active {
            html! {
                <div key={format!("active-{}", activation)} class="slide-content fade-in">
                    {content}
                </div>
            }
        } else {
            html! {
                <div key="idle" class="slide-content">{content}</div>
            }
        };
        html! {
            <div
                class={classes!("slide", active.then(|| "active"))}
                style={format!("background-image: url('{}');", slide.image)}
                aria-hidden={(!active).to_string()}
            >
                {content}
            </div>
        }
    });

    let dots = indicators_for(props.slides.len(), current).into_iter().map(|dot| {
        let onclick = {
            let rotator = rotator.clone();
            let frame = frame.setter();
            let index = dot.index;
            Callback::from(move |_: MouseEvent| drive(&rotator, &frame, |r| r.go_to(index)))
        };
        html! {
            <button
                type="button"
                class={classes!("dot", dot.active.then(|| "active"))}
                data-slide={dot.index.to_string()}
                title={dot.label.clone()}
                aria-label={dot.label.clone()}
                {onclick}
            />
        }
    });

    html! {
        <section class="hero-slider" ref={slider_ref} {onmouseover} {onmouseleave}>
            { for slides }
            <button type="button" class="slider-arrow prev" aria-label="Previous slide" onclick={step(false)}>
                {"‹"}
            </button>
            <button type="button" class="slider-arrow next" aria-label="Next slide" onclick={step(true)}>
                {"›"}
            </button>
            <div class="slider-dots">
                { for dots }
            </div>
            <style>
                {r#"
                .hero-slider {
                    position: relative;
                    height: 85vh;
                    min-height: 420px;
                    overflow: hidden;
                    background: #10161f;
                }

                .hero-slider .slide {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    padding: 0 8vw;
                    background-size: cover;
                    background-position: center;
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.8s ease, visibility 0.8s;
                }

                .hero-slider .slide::before {
                    content: "";
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(0, 0, 0, 0.65), rgba(0, 0, 0, 0.1));
                }

                .hero-slider .slide.active {
                    opacity: 1;
                    visibility: visible;
                }

                .slide-content {
                    position: relative;
                    max-width: 560px;
                    color: #ffffff;
                }

                .slide-content h1 {
                    font-size: 3rem;
                    line-height: 1.1;
                    margin-bottom: 1rem;
                }

                .slide-content p {
                    font-size: 1.2rem;
                    color: #dfe7f2;
                    margin-bottom: 2rem;
                }

                .slide-content.fade-in {
                    animation: slideContentIn 0.9s ease forwards;
                }

                @keyframes slideContentIn {
                    from {
                        opacity: 0;
                        transform: translateY(24px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .slider-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 44px;
                    height: 44px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.15);
                    color: #ffffff;
                    font-size: 1.8rem;
                    cursor: pointer;
                }

                .slider-arrow.prev { left: 1.5rem; }
                .slider-arrow.next { right: 1.5rem; }

                .slider-dots {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.6rem;
                }

                .slider-dots .dot {
                    width: 12px;
                    height: 12px;
                    padding: 0;
                    border: 2px solid #ffffff;
                    border-radius: 50%;
                    background: transparent;
                    cursor: pointer;
                }

                .slider-dots .dot.active {
                    background: #f5b400;
                    border-color: #f5b400;
                }

                @media (max-width: 768px) {
                    .slide-content h1 { font-size: 2rem; }
                    .slider-arrow { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
