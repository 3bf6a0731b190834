use yew::prelude::*;
use crate::reveal::{panel_transform, RevealProgress};

const PROJECTS: [&str; 3] = ["SCAFFOLD", "PICKI", "DRESS-UP DARLING"];

#[derive(Properties, PartialEq)]
pub struct SlideStageProps {
    pub progress: RevealProgress,
    pub stage_ref: NodeRef,
}

#[function_component(SlideStage)]
pub fn slide_stage(props: &SlideStageProps) -> Html {
    let progress = props.progress;

    html! {
        <section class="slide-stage" ref={props.stage_ref.clone()}>
            <div class="slide-pin">
                <section class="stack-slide slide-about-intro">
                    <div class="about-intro-layout">
                        <p class="about-intro-label">{"01 — WHO I AM"}</p>
                        <p class="about-intro-text">
                            {"I'M BELINDA TO, A DIGITAL DESIGNER AND DEVELOPER."}
                            <br />
                            {"I BRIDGE "}<span class="highlight">{"IDEAS"}</span>{" AND "}
                            <span class="highlight">{"DESIGN"}</span>{" TO BRING"}
                            <br />
                            {"DIGITAL EXPERIENCES TO LIFE."}
                        </p>
                    </div>
                </section>

                <section
                    class="stack-slide slide-about"
                    style={panel_transform(progress.first_panel_offset())}
                >
                    <div class="projects-container">
                        <div class="projects-header">
                            <h2 class="projects-label">{"02 — FEATURED PROJECTS"}</h2>
                            <button class="view-more-btn">{"VIEW MORE"}</button>
                        </div>
                        <div class="projects-grid">
                            {
                                for PROJECTS.iter().map(|title| html! {
                                    <div class="project-card">
                                        <div class="project-image"></div>
                                        <h3 class="project-title">{*title}</h3>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </section>

                <section
                    class="stack-slide slide-third"
                    style={panel_transform(progress.second_panel_offset())}
                >
                    <h2>{"CONTACT"}</h2>
                </section>
            </div>
            <style>
                {r#"
                .slide-stage {
                    position: relative;
                    height: 200vh;
                }
                .slide-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                }
                .stack-slide {
                    position: absolute;
                    inset: 0;
                    will-change: transform;
                }
                .slide-about-intro { background: #f5f1ea; }
                .slide-about { background: #1a1a1a; color: #ffffff; }
                .slide-third { background: #e8c1a0; }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                "#}
            </style>
        </section>
    }
}
