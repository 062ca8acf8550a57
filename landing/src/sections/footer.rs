use heplink_core::ViewSelection;
use leptos::prelude::*;

use super::Logo;

struct FooterColumn {
    heading: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Services",
        links: &[
            ("Strategy", ViewSelection::Services.fragment()),
            ("Creative", ViewSelection::Services.fragment()),
            ("Media", ViewSelection::Services.fragment()),
            ("Campaigns", ViewSelection::Services.fragment()),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            ("Home", ViewSelection::Home.fragment()),
            ("Work", ViewSelection::Work.fragment()),
            ("Careers", ViewSelection::Careers.fragment()),
            ("Insights", ViewSelection::Insights.fragment()),
            ("Contact", ViewSelection::Contact.fragment()),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[("Privacy", "#"), ("Cookies", "#")],
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container grid grid-sm-2 grid-lg-4 footer-grid" style="gap: 32px;">
                <div>
                    <Logo />
                    <p class="muted" style="margin-top: 12px;">"Born social. Built for outcomes."</p>
                </div>
                {COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div>
                                <div class="dim">{column.heading}</div>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer-legal">{format!("© {year} Heplink. All rights reserved.")}</div>
        </footer>
    }
}
