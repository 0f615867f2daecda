use leptos::prelude::*;

const EMAIL: &str = "hello@alexmoreau.dev";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact section">
            <div class="container">
                <h2 class="section-title">"Contact"</h2>
                <p>
                    "Open to staff-level roles and short consulting engagements. "
                    "The fastest way to reach me is "
                    <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                    "."
                </p>
                <ul class="socials">
                    <li><a href="https://github.com/alexmoreau" target="_blank" rel="noopener">"GitHub"</a></li>
                    <li><a href="https://www.linkedin.com/in/alexmoreau" target="_blank" rel="noopener">"LinkedIn"</a></li>
                </ul>
            </div>
        </section>
    }
}
