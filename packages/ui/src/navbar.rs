use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Section anchors shown in the navigation, in page order.
pub const NAV_SECTIONS: [&str; 9] = [
    "about",
    "experience",
    "skills",
    "projects",
    "publications",
    "events",
    "leadership",
    "education",
    "contact",
];

#[component]
pub fn Navbar() -> Element {
    let mut i18n = crate::use_i18n();
    let lang = i18n.read().lang();
    let mut open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { id: "navbar", role: "navigation",
            div { class: "nav_inner",
                a { class: "brand", href: "#hero", "Emir Doğan" }

                button {
                    class: "nav_menu_toggle",
                    "aria-label": crate::t(lang, "nav.menu"),
                    "aria-expanded": "{open}",
                    onclick: move |_| open.toggle(),
                    "☰"
                }

                div { class: if open() { "nav_links open" } else { "nav_links" },
                    for section in NAV_SECTIONS {
                        a {
                            key: "{section}",
                            class: "nav_link",
                            href: "#{section}",
                            onclick: move |_| open.set(false),
                            {crate::t(lang, &format!("nav.{section}"))}
                        }
                    }
                }

                button {
                    id: "lang_toggle",
                    class: "lang_toggle",
                    "aria-label": crate::t(lang, "lang.switch"),
                    title: lang.toggled().label(),
                    onclick: move |_| {
                        i18n.write().toggle();
                    },
                    {lang.toggled().code().to_uppercase()}
                }
            }
        }
    }
}
