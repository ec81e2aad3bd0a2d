use dioxus::prelude::*;

use crate::component::element::ErrorMessage;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        ErrorMessage { message: "페이지를 찾을 수 없습니다: /{path}" }
    }
}
