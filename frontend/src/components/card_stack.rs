use yew::prelude::*;
use web_sys::MouseEvent;
use crate::cards::{card_style, CardOrder};

#[derive(Properties, PartialEq)]
pub struct CardStackProps {
    pub order: CardOrder,
    pub loaded: bool,
    pub on_front_click: Callback<MouseEvent>,
}

#[function_component(CardStack)]
pub fn card_stack(props: &CardStackProps) -> Html {
    let CardStackProps { order, loaded, on_front_click } = props;

    html! {
        <div class={classes!("card-stack", loaded.then(|| "loaded"))}>
            {
                for order.as_slice().iter().enumerate().map(|(index, card)| {
                    let is_front = order.is_front(index);
                    // Cards underneath get no handler at all.
                    let onclick = is_front.then(|| on_front_click.clone());
                    html! {
                        <div
                            key={card.key()}
                            class={classes!("stack-card", card.class_name())}
                            style={card_style(index, is_front)}
                            onclick={onclick}
                        />
                    }
                })
            }
            <style>
                {r#"
                .card-stack {
                    position: relative;
                    width: 280px;
                    height: 360px;
                    opacity: 0;
                    transition: opacity 0.8s ease;
                }
                .card-stack.loaded {
                    opacity: 1;
                }
                .stack-card {
                    position: absolute;
                    inset: 0;
                    border-radius: 16px;
                    transition: transform 0.4s ease;
                }
                .card-a { background: #d9d4c7; transform: rotate(-6deg); }
                .card-b { background: #c9d6df; transform: rotate(4deg); }
                .card-c { background: #e8c1a0; transform: rotate(-2deg); }
                .card-d { background: #f2e9e4; transform: rotate(2deg); }
                "#}
            </style>
        </div>
    }
}
