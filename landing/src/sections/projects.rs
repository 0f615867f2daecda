use leptos::prelude::*;

struct Project {
    name: &'static str,
    blurb: &'static str,
    image: &'static str,
    href: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "tidepool",
        blurb: "A tiny CRDT-backed notes app that syncs peer to peer.",
        image: "assets/img/tidepool.webp",
        href: "https://github.com/alexmoreau/tidepool",
    },
    Project {
        name: "sundial",
        blurb: "Cron expressions explained in plain language, in the browser.",
        image: "assets/img/sundial.webp",
        href: "https://github.com/alexmoreau/sundial",
    },
    Project {
        name: "folio",
        blurb: "This page. Leptos, a little CSS, and a secret if you type the right word.",
        image: "assets/img/folio.webp",
        href: "https://github.com/alexmoreau/folio",
    },
];

/// Screenshots carry `data-src` and are promoted to `src` after `load`.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="projects section">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="project-card">
                                    <img data-src=project.image alt=project.name loading="lazy" />
                                    <h3>{project.name}</h3>
                                    <p>{project.blurb}</p>
                                    <a href=project.href target="_blank" rel="noopener">"Source →"</a>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
