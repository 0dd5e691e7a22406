use dioxus::prelude::*;

use crate::client::constant::SITE_NAME;

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// HTML document shell shared by every page.
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    rsx!(
        html {
            lang: "en",
            "data-theme": "dark",
            head {
                meta { charset: "utf-8" }
                meta {
                    name: "viewport",
                    content: "width=device-width, initial-scale=1",
                }
                title { "{title} | {SITE_NAME}" }
                link {
                    rel: "stylesheet",
                    r#type: "text/css",
                    href: DAISYUI_CSS,
                }
                script { src: TAILWIND_JS }
            }
            body {
                {children}
            }
        }
    )
}
