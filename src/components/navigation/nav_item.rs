use dioxus::prelude::*;

use crate::types::OpenState;

/// Icon button that mounts its children while open.
///
/// Each click flips the item's own open flag. Closed items render nothing
/// for their children, so a nested `DropdownMenu` is unmounted and loses its
/// state on collapse.
#[component]
pub fn NavItem(icon: Element, children: Element) -> Element {
    let mut open = use_signal(OpenState::default);

    rsx! {
        li { class: "nav__item",
            a {
                href: "#",
                class: "nav__icon-button",
                onclick: move |evt| {
                    evt.prevent_default();
                    let now_open = open.write().toggle();
                    tracing::debug!(open = now_open, "nav item toggled");
                },
                {icon}
            }

            if open().is_open() {
                {children}
            }
        }
    }
}
