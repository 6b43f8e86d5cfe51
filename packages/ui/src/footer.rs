use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::sections::{GITHUB_URL, LINKEDIN_URL};

#[component]
pub fn Footer() -> Element {
    let lang = crate::use_lang();
    let tracker = crate::use_tracker();
    let year = Utc::now().year();

    rsx! {
        footer { id: "footer",
            div { class: "footer_inner",
                p { "© {year} Musa Emir Doğan. " {crate::t(lang, "footer.rights")} }
                div { class: "footer_links",
                    for (name, url) in [("GitHub", GITHUB_URL), ("LinkedIn", LINKEDIN_URL)] {
                        a {
                            key: "{name}",
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            onclick: {
                                let tracker = tracker.clone();
                                move |_| tracker.external_link_click(name, url)
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
