//! Home page - the whole Prompt All About It site.
//!
//! One page, four sections, each with the id its nav link targets. Clicks
//! that reach the page root close the navigation menu; the header swallows
//! its own clicks, so only genuinely outside clicks land here.

use dioxus::prelude::*;
use promptall_core::MenuEvent;

use crate::components::{AnchorLink, Announcer, ContactForm, NavMenu};
use crate::context::use_menu;

/// The single page: hero, explainer, tips and contact sections
#[component]
pub fn Home() -> Element {
    let mut menu = use_menu();

    let close_menu_on_outside_click = move |_| {
        menu.set(menu().apply(MenuEvent::OutsideClicked));
    };

    rsx! {
        div { class: "page", onclick: close_menu_on_outside_click,
            NavMenu {}

            main {
                section { id: "home", class: "hero",
                    h1 { class: "page-title", "Prompt All About It" }
                    p { class: "tagline",
                        "Every prompt has a footprint. Let's make ours lighter."
                    }
                    AnchorLink {
                        href: "#contact".to_string(),
                        class: "btn btn-hero".to_string(),
                        "Get Involved"
                    }
                }

                section { id: "about", class: "content-section",
                    h2 { class: "section-header", "What Is Green AI" }
                    p { class: "body-text",
                        "Training and running AI models consumes real energy and "
                        "real water. "
                        span { class: "accent-term", "Green AI" }
                        " is the practice of getting the answers you need while "
                        "wasting as little of both as possible: smaller models "
                        "where they suffice, fewer redundant prompts, and "
                        "providers that run on clean power."
                    }
                    p { class: "body-text",
                        "This site is a starting point, not a guilt trip. Small "
                        "habits, multiplied by millions of users, move the needle."
                    }
                }

                section { id: "tips", class: "content-section",
                    h2 { class: "section-header", "Greener Prompting" }
                    ul { class: "tip-list",
                        li { class: "tip-item",
                            strong { "Think before you prompt. " }
                            "One well-posed question beats five vague retries."
                        }
                        li { class: "tip-item",
                            strong { "Right-size the model. " }
                            "A small model answers most everyday questions just fine."
                        }
                        li { class: "tip-item",
                            strong { "Batch your asks. " }
                            "Combine related questions into a single request."
                        }
                        li { class: "tip-item",
                            strong { "Reuse good answers. " }
                            "Save what worked instead of regenerating it."
                        }
                    }
                }

                section { id: "contact", class: "content-section contact-section",
                    h2 { class: "section-header", "Contact" }
                    p { class: "body-text",
                        "Questions, ideas, or a story about greening your AI "
                        "habits? Send us a green message."
                    }
                    ContactForm {}
                }
            }

            footer { class: "site-footer",
                p { "Prompt All About It \u{00B7} a Green AI awareness project" }
            }

            Announcer {}
        }
    }
}
