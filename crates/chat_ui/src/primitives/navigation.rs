use super::*;

#[component]
/// Sticky header region at the top of the side navigation.
pub fn NavHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-nav-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="nav-header"
        >
            {children()}
        </div>
    }
}

#[component]
/// Navigation row rendered as a real link so modified clicks keep native browser behavior.
pub fn NavItem(
    #[prop(into)] href: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] test_id: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-nav-item-frame" tabindex="0" style="transform: none">
            <a
                href=href
                class=merge_layout_class("ui-nav-item", layout_class)
                data-testid=test_id
                data-ui-primitive="true"
                data-ui-kind="nav-item"
                data-ui-selected=move || bool_token(selected.get())
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {children()}
            </a>
        </div>
    }
}
