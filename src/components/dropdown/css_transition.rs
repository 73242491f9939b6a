use dioxus::prelude::*;

use crate::config::TransitionConfig;
use crate::hooks::use_css_transition;

/// Wrapper element whose classes follow the enter/exit phase of `shown`.
///
/// The element carries `class` plus the phase classes prefixed with
/// `config.class_names`; the stylesheet does the actual animation. With
/// `unmount_on_exit` the element and its children leave the output once
/// the exit window closes.
#[component]
pub fn CssTransition(
    shown: ReadOnlySignal<bool>,
    #[props(default)] config: TransitionConfig,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let state = use_css_transition(shown, &config);
    let state = state.read();

    if !state.is_mounted(config.unmount_on_exit) {
        return rsx! {};
    }

    let phase = state.class_names(&config.class_names);
    let class = match (class.is_empty(), phase.is_empty()) {
        (_, true) => class,
        (true, false) => phase,
        (false, false) => format!("{class} {phase}"),
    };

    rsx! {
        div {
            class: "{class}",
            {children}
        }
    }
}
