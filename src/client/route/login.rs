use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::{Layout, Page},
    constant::SITE_NAME,
};

#[component]
pub fn Login() -> Element {
    rsx! {
        Layout {
            title: "Login".to_string(),
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                p {
                    class: "text-2xl",
                    {SITE_NAME}
                }
                div {
                    a {
                        href: "/auth/discord",
                        div {
                            class: "btn btn-outline flex gap-2 items-center",
                            Icon {
                                width: 24,
                                height: 24,
                                icon: FaDiscord
                            }
                            p {
                                "Login with Discord"
                            }
                        }
                    }
                }
            }
        }
    }
}
