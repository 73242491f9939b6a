use dioxus::prelude::*;

/// Horizontal bar holding the `NavItem`s passed as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            ul { class: "navbar__nav",
                {children}
            }
        }
    }
}
