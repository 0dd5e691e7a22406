use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::constant::SITE_NAME;

#[component]
pub fn Header(user_name: Option<String>) -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            a {
                href: "/",
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user_name) = user_name {
                p {
                    class: "opacity-75",
                    "{user_name}"
                }
                a {
                    href: "/auth/logout",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Logout"
                        }
                    }
                }
            } else {
                a {
                    href: "/auth/discord",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaDiscord
                        }
                        p {
                            "Login"
                        }
                    }
                }
            }
        }
    })
}
