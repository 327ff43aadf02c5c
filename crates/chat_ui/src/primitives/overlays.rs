use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;

#[component]
/// Hover/focus tooltip that opens after `delay_ms` and closes immediately on leave.
pub fn Tooltip(
    /// Tooltip text.
    #[prop(into)]
    content: MaybeSignal<String>,
    #[prop(default = TooltipSide::Top)] side: TooltipSide,
    /// Distance between trigger and tooltip, in pixels.
    #[prop(default = 0)]
    side_offset: i32,
    #[prop(default = 250)] delay_ms: u64,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let pending = store_value(None::<TimeoutHandle>);
    let text = Signal::derive(move || content.get());

    let cancel = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        pending.set_value(None);
    };
    let show = move || {
        cancel();
        match set_timeout_with_handle(move || open.set(true), Duration::from_millis(delay_ms)) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(_) => open.set(true),
        }
    };
    let hide = move || {
        cancel();
        open.set(false);
    };
    on_cleanup(cancel);

    view! {
        <span
            class=merge_layout_class("ui-tooltip-trigger", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip"
            data-state=move || if open.get() { "delayed-open" } else { "closed" }
            data-ui-open=move || bool_token(open.get())
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
            on:focusin=move |_| show()
            on:focusout=move |_| hide()
        >
            {children()}
            <Show when=move || open.get() fallback=|| ()>
                <span
                    class="ui-tooltip-content"
                    role="tooltip"
                    data-ui-side=side.token()
                    style=format!("--ui-tooltip-offset: {side_offset}px")
                >
                    {move || text.get()}
                </span>
            </Show>
        </span>
    }
}
