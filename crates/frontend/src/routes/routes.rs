use contracts::shared::page_data::{PageData, Panel};
use contracts::system::users::Role;
use leptos::prelude::*;

use crate::domain::a001_booking_item::ui::details::CreateItemForm;
use crate::domain::a001_booking_item::ui::list::ItemList;
use crate::domain::a002_booking_slot::ui::board::SlotBoard;
use crate::domain::a002_booking_slot::ui::editor::SlotEditor;
use crate::domain::a003_booking::ui::list::BookingList;
use crate::domain::a004_calendar_date::ui::list::DateList;
use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::settings::ui::SettingsForm;
use crate::system::users::ui::details::CreateUserForm;
use crate::system::users::ui::list::UserList;

const ADMIN_TABS: [Tab; 4] = [
    Tab::new("managers", "Managers"),
    Tab::new("users", "Users"),
    Tab::new("items", "Items"),
    Tab::new("settings", "Settings"),
];

const MANAGER_TABS: [Tab; 3] = [
    Tab::new("users", "Users"),
    Tab::new("slots", "Slots"),
    Tab::new("dates", "Dates"),
];

const USER_TABS: [Tab; 2] = [Tab::new("slots", "Book a slot"), Tab::new("bookings", "My bookings")];

fn provide_tabs(tabs: &[Tab]) {
    let ctx = AppGlobalContext::new(tabs.to_vec());
    provide_context(ctx);
    ctx.init_router_integration();
}

#[component]
fn AdminPanel(data: PageData) -> impl IntoView {
    provide_tabs(&ADMIN_TABS);
    let PageData {
        users,
        managers,
        items,
        settings,
        ..
    } = data;

    view! {
        <Shell title="Administration">
            <TabPage tab="managers">
                <CreateUserForm role=Role::Manager />
                <UserList role=Role::Manager users=managers />
            </TabPage>
            <TabPage tab="users">
                <CreateUserForm role=Role::User />
                <UserList role=Role::User users=users />
            </TabPage>
            <TabPage tab="items">
                <CreateItemForm />
                <ItemList items=items.clone() />
                <SlotBoard items=items all_dates=true />
            </TabPage>
            <TabPage tab="settings">
                <SettingsForm settings=settings />
            </TabPage>
        </Shell>
    }
}

#[component]
fn ManagerPanel(data: PageData) -> impl IntoView {
    provide_tabs(&MANAGER_TABS);
    let PageData {
        users,
        items,
        dates,
        settings,
        ..
    } = data;

    view! {
        <Shell title="Manager">
            <TabPage tab="users">
                <CreateUserForm role=Role::User />
                <UserList role=Role::User users=users />
            </TabPage>
            <TabPage tab="slots">
                <SlotEditor items=items settings=settings />
            </TabPage>
            <TabPage tab="dates">
                <DateList dates=dates />
            </TabPage>
        </Shell>
    }
}

#[component]
fn UserPanel(data: PageData) -> impl IntoView {
    provide_tabs(&USER_TABS);
    let PageData { items, bookings, .. } = data;

    view! {
        <Shell title="Booking">
            <TabPage tab="slots">
                <SlotBoard items=items />
            </TabPage>
            <TabPage tab="bookings">
                <BookingList bookings=bookings />
            </TabPage>
        </Shell>
    }
}

#[component]
pub fn AppRoutes(data: PageData) -> impl IntoView {
    match data.panel {
        Panel::Admin => view! { <AdminPanel data=data /> }.into_any(),
        Panel::Manager => view! { <ManagerPanel data=data /> }.into_any(),
        Panel::User => view! { <UserPanel data=data /> }.into_any(),
    }
}
