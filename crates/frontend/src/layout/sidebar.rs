//! Sidebar with collapsible menu groups

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::paths;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![
                (paths::HOME, "Overview", "home"),
                (paths::REPORTS, "Master Data Report", "database"),
            ],
        },
        MenuGroup {
            id: "master_data",
            label: "Master Data",
            icon: "layers",
            items: vec![
                (paths::ATM, "ATM Data", "credit-card"),
                (paths::COLLEGE_DUNIA, "College Dunia", "book"),
                (paths::BANK, "Bank Branches", "building"),
                (paths::HEYPLACES, "HeyPlaces", "map-pin"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let expanded_groups = RwSignal::new(vec!["dashboards", "master_data"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(path, label, icon_name)| {
                                    view! {
                                        <A href=path attr:class="app-sidebar__link">
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || location.pathname.with(|p| p == path)
                                                style:padding-left="10px"
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
