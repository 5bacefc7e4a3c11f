//! Footer component

use leptos::*;

struct TeamMember {
    name: &'static str,
    github: &'static str,
    instagram: &'static str,
}

static TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Astha Kumari",
        github: "https://github.com/AsthaK9",
        instagram: "#",
    },
    TeamMember {
        name: "Akash Raj",
        github: "https://github.com/Akash-r09",
        instagram: "#",
    },
    TeamMember {
        name: "Shreyansh Bhadani",
        github: "#",
        instagram: "#",
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-team">
                {TEAM
                    .iter()
                    .map(|member| view! {
                        <div class="team-member">
                            <span class="team-name">{member.name}</span>
                            <a
                                href=member.github
                                class="footer-link"
                                target="_blank"
                                aria-label=format!("{}'s GitHub", member.name)
                            >
                                "GitHub"
                            </a>
                            <a
                                href=member.instagram
                                class="footer-link"
                                target="_blank"
                                aria-label=format!("{}'s Instagram", member.name)
                            >
                                "Instagram"
                            </a>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="footer-copyright">
                "© 2024 Digital Fingerprint Project • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
