use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::models::article::Article;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gazette.css"/>
        <Title text="Gazette - Articles Manager"/>

        <Router>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// The single page: a form above the article list.
///
/// Shared state lives here: the article currently being edited (None
/// means create mode) and a counter that forces a full refetch of the
/// list after every mutation.
#[component]
fn HomePage() -> impl IntoView {
    let editing = RwSignal::new(None::<Article>);
    let refresh = RwSignal::new(0u32);

    let articles = LocalResource::new(move || {
        refresh.track();
        async move {
            crate::api::client::fetch_articles()
                .await
                .unwrap_or_else(|e| {
                    leptos::logging::error!("Error fetching articles: {e}");
                    Vec::new()
                })
        }
    });

    view! {
        <div class="page">
            <h1>"Articles Manager"</h1>
            <crate::components::article_form::ArticleForm editing=editing refresh=refresh />
            <crate::components::article_list::ArticleList articles=articles editing=editing refresh=refresh />
        </div>
    }
}
