use super::OWNER;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero section">
            <div class="container">
                <p class="hero-eyebrow">"Software engineer · Lyon, France"</p>
                <h1 class="hero-title">
                    "Hi, I'm "
                    <span class="accent">{OWNER}</span>
                    "."
                </h1>
                <p class="hero-description">
                    "I build fast, quiet software: browser front ends in Rust and WebAssembly, "
                    "and the services behind them."
                </p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"See my work"</a>
                    <a href="#contact" class="btn btn-secondary">"Get in touch"</a>
                </div>
            </div>
        </section>
    }
}
