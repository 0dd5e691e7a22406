use dioxus::prelude::*;

use crate::{
    client::component::{Header, Layout, Page},
    model::faction::{DashboardDto, FactionDto},
};

#[component]
pub fn Home(dashboard: DashboardDto) -> Element {
    let DashboardDto {
        user,
        is_admin,
        factions,
        my_factions,
    } = dashboard;

    rsx! {
        Layout {
            title: "Factions".to_string(),
            Header { user_name: user.name }
            Page {
                class: "flex flex-col gap-8",
                if !my_factions.is_empty() {
                    section {
                        h2 { class: "text-xl mb-2", "Your Factions" }
                        FactionTable { factions: my_factions, editable: false }
                    }
                }
                section {
                    h2 { class: "text-xl mb-2", "All Factions" }
                    FactionTable { factions, editable: true }
                }
                if is_admin {
                    AddFactionForm {}
                }
            }
        }
    }
}

#[component]
fn FactionTable(factions: Vec<FactionDto>, editable: bool) -> Element {
    if factions.is_empty() {
        return rsx! {
            p { class: "opacity-75", "No factions found." }
        };
    }

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Name" }
                        th { "Leader" }
                        th { "Members" }
                        th { "Economy" }
                        th { "Money" }
                        if editable {
                            th { "Actions" }
                        }
                    }
                }
                tbody {
                    for faction in factions {
                        tr {
                            key: "{faction.id}",
                            td { "{faction.name}" }
                            td { "{faction.leader}" }
                            td { "{faction.member_count}" }
                            td { "{faction.economy}%" }
                            td { "{faction.money}" }
                            if editable {
                                td {
                                    FactionActions { name: faction.name.clone(), economy: faction.economy, money: faction.money }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FactionActions(name: String, economy: i32, money: i32) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap gap-2",
            form {
                method: "post",
                action: "/update-economy",
                class: "join",
                input { r#type: "hidden", name: "factionName", value: "{name}" }
                input {
                    r#type: "number",
                    name: "economy",
                    class: "input input-bordered input-sm join-item w-24",
                    value: "{economy}",
                    required: true,
                }
                button { r#type: "submit", class: "btn btn-sm join-item", "Set economy" }
            }
            form {
                method: "post",
                action: "/update-money",
                class: "join",
                input { r#type: "hidden", name: "factionName", value: "{name}" }
                input {
                    r#type: "number",
                    name: "money",
                    class: "input input-bordered input-sm join-item w-24",
                    value: "{money}",
                    required: true,
                }
                button { r#type: "submit", class: "btn btn-sm join-item", "Set money" }
            }
            form {
                method: "post",
                action: "/remove-faction",
                input { r#type: "hidden", name: "factionName", value: "{name}" }
                button { r#type: "submit", class: "btn btn-sm btn-error", "Remove" }
            }
        }
    }
}

#[component]
fn AddFactionForm() -> Element {
    rsx! {
        section {
            h2 { class: "text-xl mb-2", "Add Faction" }
            form {
                method: "post",
                action: "/add-faction",
                class: "flex flex-col gap-2 max-w-md",
                input {
                    r#type: "text",
                    name: "name",
                    class: "input input-bordered w-full",
                    placeholder: "Faction name",
                    required: true,
                }
                input {
                    r#type: "text",
                    name: "leader",
                    class: "input input-bordered w-full",
                    placeholder: "Leader",
                    required: true,
                }
                input {
                    r#type: "number",
                    name: "memberCount",
                    class: "input input-bordered w-full",
                    placeholder: "Member count",
                    min: "0",
                    required: true,
                }
                input {
                    r#type: "text",
                    name: "userID",
                    class: "input input-bordered w-full",
                    placeholder: "Owner Discord ID (defaults to you)",
                }
                button { r#type: "submit", class: "btn btn-primary", "Add Faction" }
            }
        }
    }
}
