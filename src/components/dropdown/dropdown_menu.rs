use dioxus::prelude::*;

use crate::components::dropdown::{CssTransition, DropdownItem};
use crate::components::icons::{ChevronIcon, CogIcon};
use crate::config::NavbarConfig;
use crate::types::MenuName;

/// Dropdown with a single transition-wrapped "main" panel.
#[component]
pub fn DropdownMenu() -> Element {
    let config = try_use_context::<NavbarConfig>().unwrap_or_default();
    // Only "main" is ever selected; further panels would switch this.
    let active_menu = use_signal(MenuName::default);

    rsx! {
        div { class: "dropdown",
            CssTransition {
                shown: active_menu() == MenuName::MAIN,
                config: config.transition.clone(),
                class: "dropdown__menu",
                DropdownItem {
                    left_icon: rsx! { CogIcon {} },
                    right_icon: rsx! { ChevronIcon {} },
                    "My Profile"
                }
                DropdownItem {
                    left_icon: rsx! { CogIcon {} },
                    right_icon: rsx! { ChevronIcon {} },
                    "Settings"
                }
            }
        }
    }
}
