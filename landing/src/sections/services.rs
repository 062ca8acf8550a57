use leptos::prelude::*;

/// Line icon drawn next to a service title.
#[derive(Debug, Clone, Copy)]
enum Icon {
    Trend,
    Sparkles,
    Megaphone,
    Rocket,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Trend => &["M3 17l6-6 4 4 7-7", "M21 10V4h-6"],
            Icon::Sparkles => &["M12 3l1.5 4.5L18 9l-4.5 1.5L12 15l-1.5-4.5L6 9l4.5-1.5L12 3z"],
            Icon::Megaphone => &["M3 10v4a2 2 0 0 0 2 2h2l4 3V5L7 8H5a2 2 0 0 0-2 2z"],
            Icon::Rocket => &["M14 3l7 7-8 8-7-7z", "M5 19l3 3"],
        }
    }
}

struct Service {
    title: &'static str,
    desc: &'static str,
    icon: Icon,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Strategy & Social",
        desc: "Audience, positioning, channel architecture, measurement frameworks.",
        icon: Icon::Trend,
    },
    Service {
        title: "Creative & Content",
        desc: "Social-first ideas, production, creator collaborations, always-on.",
        icon: Icon::Sparkles,
    },
    Service {
        title: "Paid Media",
        desc: "Full-funnel planning, performance, attribution and optimisation.",
        icon: Icon::Megaphone,
    },
    Service {
        title: "Campaigns",
        desc: "Moments that capture culture and earn attention at scale.",
        icon: Icon::Rocket,
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="container section">
            <div class="fade-in" style="max-width: 768px;">
                <h2 class="heading">"What we do"</h2>
                <p class="lead">"People over platforms. Social work that moves business outcomes."</p>
            </div>
            <div class="grid grid-sm-2 grid-lg-4" style="margin-top: 40px; gap: 20px;">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="card card-lift service fade-in">
                                <div class="service-title">
                                    <ServiceIcon icon=service.icon />
                                    <span>{service.title}</span>
                                </div>
                                <p class="service-desc">{service.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ServiceIcon(icon: Icon) -> impl IntoView {
    view! {
        <svg class="service-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8">
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
