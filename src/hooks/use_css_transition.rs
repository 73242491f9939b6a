use std::time::Duration;

use dioxus::prelude::*;

use crate::config::TransitionConfig;
use crate::timer::sleep;
use crate::transition::TransitionState;

/// Track the enter/exit phase of an element whose visibility follows `shown`.
///
/// Every boundary crossing of `shown` opens a window of `config.timeout()`,
/// after which a task spawned on the calling scope settles the phase. The
/// task dies with the scope, so an element unmounted mid-window never
/// settles.
///
/// `config.appear` and `config.timeout()` are captured at mount; a different
/// `config` passed on a later render has no effect on this element.
pub fn use_css_transition(
    shown: ReadOnlySignal<bool>,
    config: &TransitionConfig,
) -> Signal<TransitionState> {
    let appear = config.appear;
    let timeout = config.timeout();
    let mut state = use_signal(|| TransitionState::mount(*shown.peek(), appear));

    // An `appear` run starts at mount, before any change of `shown`
    use_hook(move || {
        if let Some(generation) = state.peek().pending() {
            spawn(settle_after(state, generation, timeout));
        }
    });

    use_effect(move || {
        let shown = shown();
        let mut next = state.peek().clone();
        if let Some(generation) = next.set_shown(shown) {
            tracing::debug!(shown, generation, "transition started");
            state.set(next);
            spawn(settle_after(state, generation, timeout));
        }
    });

    state
}

async fn settle_after(mut state: Signal<TransitionState>, generation: u64, timeout: Duration) {
    sleep(timeout).await;

    let mut next = state.peek().clone();
    if next.settle(generation) {
        tracing::debug!(generation, stage = ?next.stage(), "transition settled");
        state.set(next);
    } else {
        tracing::trace!(generation, "stale transition timer ignored");
    }
}
