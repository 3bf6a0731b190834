use yew::prelude::*;
use crate::intro::{letter_delays, letter_style};

fn render_letter(&(letter, delay): &(char, f64)) -> Html {
    html! {
        <span class="letter" data-char={letter.to_string()} style={letter_style(delay)}>
            {letter.to_string()}
        </span>
    }
}

#[function_component(HeroTitle)]
pub fn hero_title() -> Html {
    let first = letter_delays("DIGITAL", 0);
    let second = letter_delays("DESIGNER", first.len());

    html! {
        <h1>
            <div class="word">{ for first.iter().map(render_letter) }</div>
            <div class="word">{ for second.iter().map(render_letter) }</div>
            <style>
                {r#"
                .letter {
                    display: inline-block;
                    opacity: 0;
                    animation: letterIn 0.5s forwards;
                }
                @keyframes letterIn {
                    from { opacity: 0; transform: translateY(40%); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </h1>
    }
}
