use leptos::prelude::*;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    highlights: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        title: "Staff Engineer",
        company: "Northwind Labs",
        period: "2022 – present",
        highlights: &[
            "Rewrote the booking front end in Rust/WASM; first paint down 40%",
            "Led the move from a monolith to three well-bounded services",
        ],
    },
    Role {
        title: "Senior Engineer",
        company: "Paperplane",
        period: "2018 – 2022",
        highlights: &[
            "Built the offline-first sync engine used by the mobile apps",
            "Mentored six engineers through their first on-call rotations",
        ],
    },
    Role {
        title: "Software Engineer",
        company: "Atelier Numérique",
        period: "2015 – 2018",
        highlights: &["Shipped client sites for museums and public archives"],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="experience section">
            <div class="container">
                <h2 class="section-title">"Experience"</h2>
                {ROLES
                    .iter()
                    .map(|role| {
                        view! {
                            <div class="experience-item">
                                <h3>{role.title} " · " {role.company}</h3>
                                <p class="role-meta">{role.period}</p>
                                <ul>
                                    {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
