//! Role-filtered sidebar built from the menu configuration

use contracts::system::menu::{build_menu, MenuItem, MenuNode, MenuSection};
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::rights::use_rights;
use crate::system::session::active_role;

#[component]
pub fn Sidebar() -> impl IntoView {
    let rights = use_rights();
    let role = active_role();

    // Fetch once the sidebar is mounted
    Effect::new(move |_| rights.reload());

    let sections = Memo::new(move |_| {
        let role = role.get();
        rights
            .state
            .with(|s| build_menu(&s.menu_items, &role, &s.rights))
    });

    // Accordion: at most one parent open
    let expanded: RwSignal<Option<String>> = RwSignal::new(None);

    view! {
        <div class="app-sidebar__content">
            {move || rights.state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}
            {move || {
                sections
                    .get()
                    .into_iter()
                    .map(|section| view! { <SidebarSection section=section expanded=expanded /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn SidebarSection(section: MenuSection, expanded: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="app-sidebar__section">
            <div class="app-sidebar__section-title">{section.section}</div>
            {section
                .items
                .into_iter()
                .map(|node| view! { <SidebarNode node=node expanded=expanded /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn SidebarNode(node: MenuNode, expanded: RwSignal<Option<String>>) -> impl IntoView {
    let MenuNode { item, children } = node;

    let Some(children) = children else {
        return view! { <SidebarLink item=item padding="12px" /> }.into_any();
    };

    let label = StoredValue::new(item.label.clone());
    let is_open = move || label.with_value(|l| expanded.with(|e| e.as_deref() == Some(l.as_str())));
    let toggle = move |_| {
        let label = label.get_value();
        expanded.update(|e| {
            *e = if e.as_deref() == Some(label.as_str()) {
                None
            } else {
                Some(label)
            }
        });
    };

    view! {
        <div>
            <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                <div class="app-sidebar__item-content">
                    {icon(&item.icon)}
                    <span>{item.label.clone()}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_open>
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_open>
                <div class="app-sidebar__children">
                    {children
                        .clone()
                        .into_iter()
                        .map(|child| view! { <SidebarLink item=child padding="10px" /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn SidebarLink(item: MenuItem, padding: &'static str) -> impl IntoView {
    let ctx = use_global_context();
    let path = StoredValue::new(item.path.clone());

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || {
                path.with_value(|p| p.as_deref().is_some_and(|p| ctx.is_active(p)))
            }
            style:padding-left=padding
            on:click=move |_| match path.get_value() {
                Some(p) => ctx.navigate(&p),
                None => log::debug!("menu item without a path clicked"),
            }
        >
            <div class="app-sidebar__item-content">
                {icon(&item.icon)}
                <span>{item.label}</span>
            </div>
        </div>
    }
}
