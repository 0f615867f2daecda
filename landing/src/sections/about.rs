use leptos::prelude::*;

const SKILLS: &[&str] = &[
    "Rust",
    "WebAssembly",
    "Leptos",
    "TypeScript",
    "PostgreSQL",
    "Distributed systems",
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about section">
            <div class="container">
                <h2 class="section-title">"About"</h2>
                <div class="about-grid">
                    <div class="about-text">
                        <p>
                            "Ten years of shipping product code taught me that most performance "
                            "problems are design problems. I like small teams, typed interfaces, "
                            "and pages that load before you notice."
                        </p>
                        <p>
                            "Lately I have been moving interactive front ends from JavaScript to "
                            "Rust compiled to WebAssembly, and writing about what carries over."
                        </p>
                        <ul class="skills">
                            {SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
                        </ul>
                    </div>
                    <img
                        class="about-portrait"
                        data-src="assets/img/portrait.webp"
                        alt="Portrait"
                        width="320"
                        height="320"
                    />
                </div>
            </div>
        </section>
    }
}
