use std::{future::Future, ops::Deref};

use dioxus::prelude::*;

use muscle_atlas_domain::{PageController, PageError};

pub mod exercise;
pub mod member;
pub mod not_found;

/// Loads the page content for `identifier` and reloads it whenever the identifier changes.
///
/// An absent identifier keeps the page loading.
fn use_page<I, T, F, Fut>(identifier: Option<I>, fetch: F) -> Signal<PageController<T>>
where
    I: Deref<Target = String> + Clone + PartialEq + 'static,
    T: 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = Result<T, PageError>> + 'static,
{
    let mut page = use_signal(PageController::default);

    use_effect(use_reactive((&identifier,), move |(identifier,)| {
        let ticket = page
            .write()
            .start(identifier.as_deref().map(String::as_str));
        if let (Some(ticket), Some(identifier)) = (ticket, identifier) {
            let content = fetch(identifier);
            spawn(async move {
                let result = content.await;
                page.write().finish(ticket, result);
            });
        }
    }));

    page
}

#[cfg(test)]
fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
