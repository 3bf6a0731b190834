use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, WheelEvent};
use yew::prelude::*;

use crate::cards::CardOrder;
use crate::components::card_stack::CardStack;
use crate::components::hero_title::HeroTitle;
use crate::components::nav::Nav;
use crate::components::slide_stage::SlideStage;
use crate::config;
use crate::intro::hero_parallax_style;
use crate::reveal::{in_zone, RevealController, RevealProgress, StageBounds, WheelOutcome};

fn stage_bounds(stage_ref: &NodeRef) -> Option<StageBounds> {
    let stage = stage_ref.cast::<Element>()?;
    let rect = stage.get_bounding_client_rect();
    Some(StageBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll_y = use_state(|| 0.0_f64);
    let loaded = use_state(|| false);
    let progress = use_state(RevealProgress::default);
    let cards = use_state(CardOrder::default);
    let stage_ref = use_node_ref();
    // Read by the wheel listener, which outlives any single render.
    let controller = use_mut_ref(RevealController::default);

    use_effect_with_deps(
        move |_| {
            match web_sys::window().and_then(|window| window.document()) {
                Some(document) => {
                    document.set_title(config::PAGE_TITLE);
                    info!("Document title set to {}", config::PAGE_TITLE);
                }
                None => warn!("No document available, title left unchanged"),
            }
            || ()
        },
        (),
    );

    // Hero parallax
    {
        let scroll_y = scroll_y.setter();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    EventListener::new(&window, "scroll", move |_| {
                        if let Some(y) = web_sys::window().and_then(|window| window.scroll_y().ok()) {
                            scroll_y.set(y);
                        }
                    })
                });
                if listener.is_none() {
                    warn!("No window available, hero parallax disabled");
                }
                move || drop(listener)
            },
            (),
        );
    }

    // Load-in animations
    {
        let loaded = loaded.setter();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOAD_IN_DELAY_MS, move || {
                    debug!("Load-in animations enabled");
                    loaded.set(true);
                });
                // A pending timeout is cancelled when dropped.
                move || drop(timeout)
            },
            (),
        );
    }

    // Slide reveal
    {
        let progress = progress.setter();
        let stage_ref = stage_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    EventListener::new_with_options(
                        &window,
                        "wheel",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let delta_y = match event.dyn_ref::<WheelEvent>() {
                                Some(wheel) => wheel.delta_y(),
                                None => return,
                            };
                            let zone = in_zone(stage_bounds(&stage_ref), viewport_height());

                            let (outcome, current) = {
                                let mut controller = controller.borrow_mut();
                                let outcome = controller.on_wheel(delta_y, zone);
                                (outcome, controller.progress())
                            };

                            if outcome == WheelOutcome::Consumed {
                                event.prevent_default();
                                debug!("Reveal progress {:.2}", current.value());
                                progress.set(current);
                            }
                        },
                    )
                });
                if listener.is_none() {
                    warn!("No window available, slide reveal disabled");
                }
                move || drop(listener)
            },
            (),
        );
    }

    let on_front_click = {
        let cards = cards.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let order = *cards;
            info!("Top card {} sent to the back", order.front().key());
            cards.set(order.send_front_to_back());
        })
    };

    html! {
        <>
            <Nav loaded={*loaded} />

            <section class="hero-section">
                <div class="container">
                    <div class="credit">
                        <p class="typewriter">
                            <span class="line line-1">
                                {"HEY👋, SINCE YOU'RE HERE,"}
                                <span class="cursor" />
                            </span>
                            <br />
                            <span class="line line-2">
                                {"TAKE A LOOK AROUND!"}
                                <span class="cursor" />
                            </span>
                        </p>
                    </div>

                    <div class="hero-text" style={hero_parallax_style(*scroll_y)}>
                        <HeroTitle />
                    </div>

                    <CardStack order={*cards} loaded={*loaded} on_front_click={on_front_click} />
                </div>
            </section>

            <SlideStage progress={*progress} stage_ref={stage_ref} />

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #f5f1ea;
                    color: #1a1a1a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .hero-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                }
                .container {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0 4rem;
                }
                .typewriter .line {
                    display: inline-block;
                    overflow: hidden;
                    white-space: nowrap;
                }
                .cursor {
                    display: inline-block;
                    width: 2px;
                    height: 1em;
                    background: currentColor;
                    animation: blink 1s steps(1) infinite;
                }
                @keyframes blink {
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </>
    }
}
