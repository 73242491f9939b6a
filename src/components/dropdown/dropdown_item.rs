use dioxus::prelude::*;

/// A single dropdown row: optional left icon, the label, optional right icon.
#[component]
pub fn DropdownItem(
    left_icon: Option<Element>,
    right_icon: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        a {
            href: "#",
            class: "dropdown__menu-item",
            if let Some(icon) = left_icon {
                span { class: "nav__icon-button", {icon} }
            }
            {children}
            if let Some(icon) = right_icon {
                span { class: "dropdown__icon-right nav__icon-button", {icon} }
            }
        }
    }
}
