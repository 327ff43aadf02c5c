mod host_config;
mod web_app;

pub use host_config::load_host_config;
pub use web_app::{ChatApp, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
