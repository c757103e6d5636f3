use leptos::prelude::*;

use crate::api::client;
use crate::models::article::{title_is_blank, Article, ArticleDraft};

/// The create/edit form. Two modes, driven solely by whether `editing`
/// holds an article: create mode POSTs a new article, edit mode PUTs to
/// the editing id. Either way the fields are cleared and the list
/// refetched afterwards.
#[component]
pub fn ArticleForm(editing: RwSignal<Option<Article>>, refresh: RwSignal<u32>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Populate the fields from the selected row when entering edit mode.
    Effect::new(move |_| {
        if let Some(article) = editing.get() {
            set_title.set(article.title.clone());
            set_content.set(article.content.clone());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Blank titles never reach the network.
        if title_is_blank(&title.get_untracked()) {
            return;
        }
        if saving.get_untracked() {
            return;
        }

        set_saving.set(true);
        let draft = ArticleDraft {
            title: Some(title.get_untracked()),
            content: Some(content.get_untracked()),
        };
        let editing_id = editing.get_untracked().map(|a| a.id);

        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => client::update_article(id, draft).await.map(|_| ()),
                None => client::create_article(draft).await.map(|_| ()),
            };
            if let Err(e) = result {
                leptos::logging::error!("Error saving article: {e}");
            }

            // Clear the form regardless of outcome; the refetched list
            // is the source of truth.
            editing.set(None);
            set_title.set(String::new());
            set_content.set(String::new());
            set_saving.set(false);
            refresh.update(|n| *n += 1);
        });
    };

    let on_cancel = move |_| {
        editing.set(None);
        set_title.set(String::new());
        set_content.set(String::new());
    };

    view! {
        <form class="article-form" on:submit=on_submit>
            <h2>
                {move || if editing.get().is_some() { "Edit Article" } else { "Add New Article" }}
            </h2>
            <div class="field">
                <label>"Title:"</label>
                <input
                    type="text"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="field">
                <label>"Content:"</label>
                <textarea
                    prop:value=content
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="actions">
                <button type="submit" disabled=move || saving.get()>
                    {move || {
                        if saving.get() {
                            "Saving..."
                        } else if editing.get().is_some() {
                            "Update"
                        } else {
                            "Add"
                        }
                    }}
                </button>
                {move || editing.get().is_some().then(|| view! {
                    <button type="button" class="secondary" on:click=on_cancel>
                        "Cancel"
                    </button>
                })}
            </div>
        </form>
    }
}
