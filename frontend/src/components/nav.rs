use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub loaded: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    html! {
        <nav class="navbar">
            <div class="nav-container">
                <div class="logo">{"BEL"}</div>
                <div class={classes!("nav-links", props.loaded.then(|| "nav-loaded"))}>
                    <button class="nav-link">{"HOME"}</button>
                    <button class="nav-link">{"PROJECTS"}</button>
                    <button class="nav-link">{"ABOUT ME"}</button>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                }
                .nav-container {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem 2rem;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                    opacity: 0;
                    transform: translateY(-10px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .nav-links.nav-loaded {
                    opacity: 1;
                    transform: translateY(0);
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                "#}
            </style>
        </nav>
    }
}
