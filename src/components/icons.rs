//! Inline SVG icons.
//!
//! Each icon accepts an optional `class` for sizing; SVGs don't inherit a
//! size, so callers in the navbar pass `nav__icon-svg`.

use dioxus::prelude::*;

const ARROW_PATH: &str = "M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z";
const BELL_PATH: &str = "M12 22c1.1 0 2-.9 2-2h-4c0 1.1.89 2 2 2zm6-6v-5c0-3.07-1.64-5.64-4.5-6.32V4c0-.83-.67-1.5-1.5-1.5s-1.5.67-1.5 1.5v.68C7.63 5.36 6 7.92 6 11v5l-2 2v1h16v-1l-2-2z";
const BOLT_PATH: &str = "M7 2v11h3v9l7-12h-4l4-8z";
const CARET_PATH: &str = "M7 10l5 5 5-5z";
const CHEVRON_PATH: &str = "M10 6 8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z";
const COG_PATH: &str = "M19.14 12.94c.04-.3.06-.61.06-.94 0-.32-.02-.64-.07-.94l2.03-1.58a.49.49 0 0 0 .12-.61l-1.92-3.32a.488.488 0 0 0-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54a.484.484 0 0 0-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.09.63-.09.94s.02.64.07.94l-2.03 1.58a.49.49 0 0 0-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z";
const MESSENGER_PATH: &str = "M12 2C6.36 2 2 6.13 2 11.7c0 2.91 1.19 5.44 3.14 7.17.16.13.26.35.27.57l.05 1.78c.04.57.61.94 1.13.71l1.98-.87c.17-.06.36-.09.54-.06.91.25 1.87.38 2.89.38 5.64 0 10-4.13 10-9.7C22 6.13 17.64 2 12 2zm6 7.46-2.93 4.67c-.47.73-1.47.92-2.17.37l-2.34-1.73a.6.6 0 0 0-.72 0l-3.16 2.4c-.42.33-.97-.18-.69-.63l2.93-4.67c.47-.73 1.47-.92 2.17-.4l2.34 1.76a.6.6 0 0 0 .72 0l3.16-2.4c.42-.33.97.18.69.63z";
const PLUS_PATH: &str = "M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z";

#[component]
fn SvgIcon(name: &'static str, shape: &'static str, class: String) -> Element {
    rsx! {
        svg {
            class: if !class.is_empty() { "{class}" },
            "data-icon": name,
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: shape }
        }
    }
}

#[component]
pub fn ArrowIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "arrow", shape: ARROW_PATH, class } }
}

#[component]
pub fn BellIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "bell", shape: BELL_PATH, class } }
}

#[component]
pub fn BoltIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "bolt", shape: BOLT_PATH, class } }
}

#[component]
pub fn CaretIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "caret", shape: CARET_PATH, class } }
}

#[component]
pub fn ChevronIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "chevron", shape: CHEVRON_PATH, class } }
}

#[component]
pub fn CogIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "cog", shape: COG_PATH, class } }
}

#[component]
pub fn MessengerIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "messenger", shape: MESSENGER_PATH, class } }
}

#[component]
pub fn PlusIcon(#[props(default, into)] class: String) -> Element {
    rsx! { SvgIcon { name: "plus", shape: PLUS_PATH, class } }
}
