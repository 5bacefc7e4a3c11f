use leptos::*;
use leptos_router::use_navigate;

/// Top bar of the workflow pages: back button and page title.
#[component]
pub fn PageHeader(
    /// Page title
    #[prop(into)]
    title: String,
    /// Icon shown before the title
    #[prop(default = "🛡️")]
    icon: &'static str,
) -> impl IntoView {
    let navigate = use_navigate();
    let go_home = move |_| {
        log::info!("🏠 Back to home");
        navigate("/", Default::default());
    };

    view! {
        <header>
            <div class="header-left">
                <button class="btn btn-ghost" on:click=go_home>
                    "← Back to Home"
                </button>
            </div>
            <div class="header-right">
                <span class="header-icon">{icon}</span>
                <h1 class="header-title">{title}</h1>
            </div>
        </header>
    }
}
