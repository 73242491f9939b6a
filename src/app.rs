use dioxus::prelude::*;

use crate::components::dropdown::DropdownMenu;
use crate::components::icons::{BellIcon, CaretIcon, MessengerIcon, PlusIcon};
use crate::components::navigation::{NavItem, Navbar};

/// Composition root: three plain icon buttons and one dropdown trigger.
#[component]
pub fn App() -> Element {
    rsx! {
        Navbar {
            NavItem { icon: rsx! { PlusIcon { class: "nav__icon-svg" } } }
            NavItem { icon: rsx! { BellIcon { class: "nav__icon-svg" } } }
            NavItem { icon: rsx! { MessengerIcon { class: "nav__icon-svg" } } }
            NavItem { icon: rsx! { CaretIcon { class: "nav__icon-svg" } },
                DropdownMenu {}
            }
        }
    }
}
