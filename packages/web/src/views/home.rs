use dioxus::prelude::*;
use ui::{About, Contact, Education, Events, Experience, Hero, Leadership, Projects, Publications, Skills};

/// The whole portfolio; sections follow the navigation order.
#[component]
pub fn Home() -> Element {
    rsx! {
        main { role: "main",
            Hero {}
            About {}
            Experience {}
            Skills {}
            Projects {}
            Publications {}
            Events {}
            Leadership {}
            Education {}
            Contact {}
        }
    }
}
