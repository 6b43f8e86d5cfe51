use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang();
    let tracker = crate::use_tracker();

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        crate::TrackedSection { id: "hero", name: "hero",
            div { class: "hero_inner",
                h1 { "Musa Emir Doğan" }
                p { class: "hero_position", {crate::t(lang, "hero.position")} }
                p { class: "hero_description", {crate::t(lang, "hero.description")} }

                div { class: "cta_row",
                    a {
                        class: "btn primary",
                        href: "#contact",
                        onclick: move |_| tracker.contact_interaction("hero_contact_button"),
                        {crate::t(lang, "hero.contactMe")}
                    }
                }
            }
        }
    }
}
