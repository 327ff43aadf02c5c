use super::*;

#[component]
/// Round badge that frames an icon or logo.
pub fn IconBadge(
    #[prop(default = IconBadgeTone::Light)] tone: IconBadgeTone,
    #[prop(default = IconSize::Lg)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-icon-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="icon-badge"
            data-ui-variant=tone.token()
            data-ui-size=size.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Remote or bundled image rendered at icon size.
pub fn RemoteImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(default = IconSize::Lg)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <img
            class=merge_layout_class("ui-remote-image", layout_class)
            src=src
            alt=alt
            width=size_px.clone()
            height=size_px
            loading="lazy"
            data-ui-primitive="true"
            data-ui-kind="remote-image"
            data-ui-size=size.token()
        />
    }
}
