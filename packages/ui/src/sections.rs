//! Content sections of the portfolio page.
//!
//! Every section is wrapped in [`TrackedSection`] so its first appearance in
//! the viewport is reported, and outbound links go through the [`Tracker`].

use dioxus::prelude::*;

use crate::{t, use_lang, use_tracker, Lang, TrackedSection, Tracker};

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

pub const GITHUB_URL: &str = "https://github.com/memirdogan";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mudogan/";
pub const EMAIL: &str = "musaemird@gmail.com";
pub const RESUME_PATH: &str = "/resume/emir-dogan-resume.pdf";

#[component]
fn SectionHeader(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section_title",
            h2 { "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section_subtitle", "{subtitle}" }
            }
        }
    }
}

/// Anchor that opens in a new tab and reports the click.
#[component]
fn OutboundLink(
    #[props(into)] href: String,
    #[props(into)] link_type: String,
    #[props(default)] class: String,
    project: Option<String>,
    children: Element,
) -> Element {
    let tracker = use_tracker();
    let url = href.clone();
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: move |_| {
                tracker.external_link_click(&link_type, &url);
                if let Some(project) = &project {
                    tracker.project_view(project);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn About() -> Element {
    let lang = use_lang();
    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        TrackedSection { id: "about", name: "about",
            SectionHeader { title: t(lang, "about.title") }
            div { class: "about_grid",
                div { class: "card",
                    h3 { class: "card_title", {t(lang, "about.role")} }
                    p { {t(lang, "about.intro")} }
                    p { {t(lang, "about.details")} }
                    OutboundLink { class: "btn", href: GITHUB_URL, link_type: "GitHub", "GitHub" }
                }
                div { class: "highlights",
                    for n in 1..=3 {
                        div { key: "{n}", class: "card highlight",
                            h4 { {t(lang, &format!("about.highlight{n}.title"))} }
                            p { {t(lang, &format!("about.highlight{n}.desc"))} }
                        }
                    }
                }
            }
        }
    }
}

struct Job {
    key: &'static str,
    company: &'static str,
    role: &'static str,
    bullets: usize,
}

const JOBS: [Job; 4] = [
    Job { key: "sufle", company: "Sufle Teknoloji Araştırma Geliştirme A.Ş.", role: "Jr. Cloud & Platform Engineer", bullets: 5 },
    Job { key: "renabyte", company: "RenaByte", role: "Co-Founder & Team Lead", bullets: 3 },
    Job { key: "ybs", company: "Yönetilen Bilgi Sistemleri A.Ş.", role: "Software Engineer Intern", bullets: 3 },
    Job { key: "etruskai", company: "EtruscAI", role: "Machine Learning Engineer Intern", bullets: 2 },
];

#[component]
pub fn Experience() -> Element {
    let lang = use_lang();
    rsx! {
        TrackedSection { id: "experience", name: "experience",
            SectionHeader { title: t(lang, "experience.title"), subtitle: t(lang, "experience.subtitle") }
            div { class: "timeline",
                for job in JOBS.iter() {
                    div { key: "{job.key}", class: "card timeline_item",
                        div { class: "card_header",
                            div {
                                h3 { class: "card_title", "{job.role} @ {job.company}" }
                                p { class: "card_subtitle", {t(lang, "common.location.istanbul")} }
                            }
                            p { class: "card_subtitle", {t(lang, &format!("experience.{}.period", job.key))} }
                        }
                        ul {
                            for i in 1..=job.bullets {
                                li { key: "{i}", {t(lang, &format!("experience.{}.desc{i}", job.key))} }
                            }
                        }
                    }
                }
            }
        }
    }
}

const SKILLS: [(&str, &[&str]); 5] = [
    ("skills.cloud", &["AWS", "DigitalOcean", "Cloudflare", "Supabase"]),
    ("skills.containers", &["Kubernetes", "Docker", "Helm", "ECS", "EKS"]),
    ("skills.iac", &["Terraform", "Terragrunt", "GitHub Actions", "CI/CD"]),
    ("skills.observability", &["Prometheus", "Grafana", "New Relic", "CloudWatch"]),
    ("skills.programming", &["Python", "Bash", "C", "C++", "TypeScript"]),
];

#[component]
pub fn Skills() -> Element {
    let lang = use_lang();
    rsx! {
        TrackedSection { id: "skills", name: "skills",
            SectionHeader { title: t(lang, "skills.title"), subtitle: t(lang, "skills.subtitle") }
            div { class: "card_grid",
                for (key, items) in SKILLS {
                    div { key: "{key}", class: "card",
                        h3 { class: "card_title", {t(lang, key)} }
                        div { class: "chips",
                            for item in items.iter() {
                                span { key: "{item}", class: "chip", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct Project {
    key: &'static str,
    title: &'static str,
    tech: &'static [&'static str],
    github: Option<&'static str>,
    live: Option<&'static str>,
}

const PROJECTS: [Project; 6] = [
    Project {
        key: "renabyte",
        title: "RenaByte & Akbis Platform",
        tech: &["React", "Node.js", "AWS", "Docker", "PostgreSQL"],
        github: None,
        live: Some("https://renabyte.com"),
    },
    Project {
        key: "sunoa",
        title: "Sunoa E-Commerce Platform",
        tech: &["Next.js 15", "React 19", "TypeScript", "Tailwind CSS"],
        github: Some("https://github.com/memirdogan/sunoa-ecommerce-website"),
        live: Some("https://sunoa.memir.codes"),
    },
    Project {
        key: "minikube2048",
        title: "Minikube-2048",
        tech: &["Kubernetes", "Minikube", "Helm", "Docker"],
        github: Some("https://github.com/memirdogan/k8s-minikube-2048"),
        live: None,
    },
    Project {
        key: "terraform",
        title: "Terraform Architecture Design",
        tech: &["Terraform", "AWS", "VPC", "NAT Gateway", "Load Balancer"],
        github: Some("https://github.com/memirdogan/Terraform-Architecture-deploy"),
        live: None,
    },
    Project {
        key: "webscraping",
        title: "Web Scraping with Beautiful Soup",
        tech: &["Python", "Beautiful Soup", "Selenium", "HTML"],
        github: Some("https://github.com/memirdogan/Web-Scraping-with-Beautiful-Soup-and-Selenium"),
        live: None,
    },
    Project {
        key: "42piscine",
        title: "42 Piscine Projects",
        tech: &["C", "C++", "Shell Scripting", "Embedded Systems"],
        github: Some("https://github.com/memirdogan/42Piscine"),
        live: None,
    },
];

#[component]
pub fn Projects() -> Element {
    let lang = use_lang();
    rsx! {
        TrackedSection { id: "projects", name: "projects",
            SectionHeader { title: t(lang, "projects.title"), subtitle: t(lang, "projects.subtitle") }
            div { class: "card_grid two",
                for project in PROJECTS.iter() {
                    div { key: "{project.key}", class: "card project",
                        div { class: "card_header",
                            h3 { class: "card_title", "{project.title}" }
                            div { class: "project_links",
                                if let Some(url) = project.github {
                                    OutboundLink {
                                        class: "icon_link",
                                        href: url,
                                        link_type: "GitHub",
                                        project: project.title.to_string(),
                                        {t(lang, "common.viewProject")}
                                    }
                                }
                                if let Some(url) = project.live {
                                    OutboundLink {
                                        class: "icon_link live",
                                        href: url,
                                        link_type: "Live Site",
                                        project: project.title.to_string(),
                                        {t(lang, "common.liveSite")}
                                    }
                                }
                            }
                        }
                        p { {t(lang, &format!("projects.{}.desc", project.key))} }
                        div { class: "chips",
                            for tech in project.tech.iter() {
                                span { key: "{tech}", class: "chip", "{tech}" }
                            }
                        }
                    }
                }
            }
            div { class: "cta_row center",
                OutboundLink { class: "btn", href: GITHUB_URL, link_type: "GitHub", {t(lang, "projects.viewMore")} }
            }
        }
    }
}

struct Article {
    key: &'static str,
    title: &'static str,
    link: &'static str,
    date: &'static str,
}

const ARTICLES: [Article; 3] = [
    Article {
        key: "serverless",
        title: "AWS Serverless Essentials: A Beginner's Overview",
        link: "https://medium.com/@musaemird/aws-serverless-essentials-a-beginners-overview-645cd5474041",
        date: "2024-12-25",
    },
    Article {
        key: "tfstate",
        title: "What is terraform state file? | What different ways can it be configured",
        link: "https://medium.com/@musaemird/what-is-terraform-state-file-what-different-ways-can-it-be-configured-a219acc2d343",
        date: "2024-10-23",
    },
    Article {
        key: "confusion",
        title: "Confusion Matrix nedir? karmaşıklık matrisi ve modelin sınıflandırılması",
        link: "https://medium.com/@musaemird/confusion-matrix-nedir-karma%C5%9F%C4%B1kl%C4%B1k-matrisi-ve-modelin-s%C4%B1n%C4%B1fland%C4%B1r%C4%B1lmas%C4%B1-eeef0db68519",
        date: "2024-02-07",
    },
];

#[component]
pub fn Publications() -> Element {
    let lang = use_lang();
    rsx! {
        TrackedSection { id: "publications", name: "publications",
            SectionHeader { title: t(lang, "publications.title"), subtitle: t(lang, "publications.subtitle") }
            div { class: "card_grid",
                for article in ARTICLES.iter() {
                    div { key: "{article.key}", class: "card",
                        p { class: "card_subtitle", "Medium · {article.date}" }
                        h3 { class: "card_title", "{article.title}" }
                        p { {t(lang, &format!("publications.{}.desc", article.key))} }
                        OutboundLink { class: "read_more", href: article.link, link_type: "Medium",
                            {t(lang, "common.readMore")}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum EventRole {
    Speaker,
    Organizer,
    Participant,
}

impl EventRole {
    fn label(self, lang: Lang) -> String {
        let key = match self {
            EventRole::Speaker => "events.type.speaker",
            EventRole::Organizer => "events.type.organizer",
            EventRole::Participant => "events.type.participant",
        };
        t(lang, key)
    }
}

struct EventItem {
    key: &'static str,
    organization: &'static str,
    location_key: &'static str,
    date: &'static str,
    role: EventRole,
}

const EVENTS: [EventItem; 3] = [
    EventItem {
        key: "druludag",
        organization: "Uludağ Üniversitesi Veri Bilimi Topluluğu",
        location_key: "common.location.online",
        date: "2025-12",
        role: EventRole::Speaker,
    },
    EventItem {
        key: "buildwithai",
        organization: "Google Developer Student Clubs",
        location_key: "common.location.istanbul",
        date: "2024-04",
        role: EventRole::Organizer,
    },
    EventItem {
        key: "teknofest",
        organization: "TEKNOFEST",
        location_key: "common.location.istanbul",
        date: "2025-06",
        role: EventRole::Participant,
    },
];

#[component]
pub fn Events() -> Element {
    let lang = use_lang();
    rsx! {
        TrackedSection { id: "events", name: "events",
            SectionHeader { title: t(lang, "events.title"), subtitle: t(lang, "events.subtitle") }
            div { class: "card_grid",
                for event in EVENTS.iter() {
                    div { key: "{event.key}", class: "card event",
                        span { class: "badge", {event.role.label(lang)} }
                        h3 { class: "card_title", {t(lang, &format!("events.{}.title", event.key))} }
                        p { class: "card_subtitle", "{event.organization}" }
                        p { {t(lang, &format!("events.{}.desc", event.key))} }
                        p { class: "card_meta", "{event.date} · " {t(lang, event.location_key)} }
                    }
                }
            }
        }
    }
}

const LEADERSHIP: [(&str, &str, &str); 3] = [
    ("renabyte", "RenaByte", "Co-Founder & Team Lead"),
    ("gdsc", "Google Developer Student Clubs", "Co-Lead"),
    ("t3ai", "T3 AI'LE", "Community Volunteer"),
];

#[component]
pub fn Leadership() -> Element {
    let lang = use_lang();
    rsx! {
        TrackedSection { id: "leadership", name: "leadership",
            SectionHeader { title: t(lang, "leadership.title"), subtitle: t(lang, "leadership.subtitle") }
            div { class: "card_grid",
                for (key, organization, role) in LEADERSHIP {
                    div { key: "{key}", class: "card",
                        h3 { class: "card_title", "{organization}" }
                        p { class: "card_subtitle", "{role}" }
                        ul {
                            li { {t(lang, &format!("leadership.{key}.desc1"))} }
                            li { {t(lang, &format!("leadership.{key}.desc2"))} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Education() -> Element {
    let lang = use_lang();
    rsx! {
        TrackedSection { id: "education", name: "education",
            SectionHeader { title: t(lang, "education.title"), subtitle: t(lang, "education.subtitle") }
            div { class: "card_grid two",
                div { class: "card",
                    h3 { class: "card_title", {t(lang, "education.education")} }
                    div { class: "entry",
                        h4 { "İstanbul Aydın Üniversitesi" }
                        p { {t(lang, "education.iau.degree")} }
                        p { class: "card_meta", {t(lang, "education.iau.period")} }
                    }
                    div { class: "entry",
                        h4 { "42 İstanbul" }
                        p { "Common Core - Cadet" }
                        p { class: "card_meta", {t(lang, "education.42.period")} }
                    }
                }
                div { class: "card",
                    h3 { class: "card_title", {t(lang, "education.certifications")} }
                    div { class: "entry",
                        h4 { "AWS Certified Cloud Practitioner" }
                        p { "Amazon Web Services (AWS)" }
                        p { class: "card_meta", {t(lang, "education.aws.period")} }
                    }
                    div { class: "entry",
                        h4 { "Cambly Certificate of Accomplishment" }
                        p { "Cambly Inc. · " {t(lang, "common.english")} }
                    }
                }
            }
        }
    }
}

/// Reports the clicks a contact link stands for.
fn report_contact_click(tracker: &Tracker, label: &str, href: &str) {
    if href.starts_with("mailto:") {
        tracker.email_click("primary_email");
    }
    tracker.external_link_click(label, href);
}

#[component]
pub fn Contact() -> Element {
    let lang = use_lang();
    let tracker = use_tracker();
    let socials = [
        ("GitHub", GITHUB_URL.to_string()),
        ("LinkedIn", LINKEDIN_URL.to_string()),
        ("Email", format!("mailto:{EMAIL}")),
    ];
    let resume_tracker = tracker.clone();

    rsx! {
        TrackedSection { id: "contact", name: "contact", class: "center",
            SectionHeader { title: t(lang, "contact.title"), subtitle: t(lang, "contact.subtitle") }
            div { class: "cta_row center",
                a {
                    class: "btn primary",
                    href: RESUME_PATH,
                    download: true,
                    onclick: move |_| resume_tracker.resume_download(),
                    {t(lang, "contact.downloadResume")}
                }
            }
            div { class: "socials",
                for (label, href) in socials {
                    a {
                        key: "{label}",
                        class: "social",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: {
                            let tracker = tracker.clone();
                            let href = href.clone();
                            move |_| report_contact_click(&tracker, label, &href)
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
