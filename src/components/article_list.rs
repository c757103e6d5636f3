use leptos::prelude::*;

use crate::api::client;
use crate::models::article::Article;

/// The article list. Rendered wholesale from the last fetch; every
/// mutation bumps `refresh` and the page refetches instead of patching
/// local state.
#[component]
pub fn ArticleList(
    articles: LocalResource<Vec<Article>>,
    editing: RwSignal<Option<Article>>,
    refresh: RwSignal<u32>,
) -> impl IntoView {
    let on_delete = move |id: i32| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this article?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        leptos::task::spawn_local(async move {
            if let Err(e) = client::delete_article(id).await {
                leptos::logging::error!("Error deleting article: {e}");
            }
            refresh.update(|n| *n += 1);
        });
    };

    view! {
        <div class="article-list">
            <Suspense fallback=|| view! { <p>"Loading articles..."</p> }>
                {move || articles.get().map(|list| {
                    let list = list.clone();
                    view! {
                        <h2>"Articles (" {list.len()} ")"</h2>
                        {if list.is_empty() {
                            view! {
                                <p class="empty">"No articles yet. Add one above!"</p>
                            }.into_any()
                        } else {
                            view! {
                                <div>
                                    {list.into_iter().map(|article| {
                                        let for_edit = article.clone();
                                        let id = article.id;
                                        view! {
                                            <div class="article-card">
                                                <h3>{article.title.clone()}</h3>
                                                {(!article.content.is_empty()).then(|| view! {
                                                    <p class="content">{article.content.clone()}</p>
                                                })}
                                                <p class="created">
                                                    "Created: "
                                                    {article.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                                </p>
                                                <div class="actions">
                                                    <button on:click=move |_| editing.set(Some(for_edit.clone()))>
                                                        "Edit"
                                                    </button>
                                                    <button class="danger" on:click=move |_| on_delete(id)>
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }}
                    }
                })}
            </Suspense>
        </div>
    }
}
