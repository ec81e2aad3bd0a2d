use dioxus::prelude::*;
use strum::Display;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "warning")]
    Warning,
}

#[component]
pub fn Block(children: Element) -> Element {
    rsx! {
        div {
            class: "block",
            {children}
        }
    }
}

#[component]
pub fn LoadingPage() -> Element {
    rsx! {
        div {
            class: "is-size-5 has-text-centered m-6",
            "로딩 중..."
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2 my-6",
            div {
                class: "message-body has-text-centered",
                div {
                    class: "is-size-5 has-text-danger",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn Header(title: String, back: Option<bool>) -> Element {
    rsx! {
        header {
            class: "page-header px-4 py-3 mb-5",
            if back.unwrap_or_default() {
                button {
                    class: "button is-ghost px-0 mr-4",
                    onclick: move |_| navigator().go_back(),
                    "← 뒤로"
                }
            }
            h1 { class: "title is-5 mb-0", "{title}" }
        }
    }
}

#[component]
pub fn SectionTitle(title: String) -> Element {
    rsx! {
        h3 {
            class: "section-title is-size-7 has-text-weight-bold has-text-grey mt-5 mb-3",
            "{title}"
        }
    }
}

#[component]
pub fn Placeholder(message: String) -> Element {
    rsx! {
        div {
            class: "block has-text-centered has-text-grey py-5",
            "{message}"
        }
    }
}

#[component]
pub fn Tag(text: String, class: String) -> Element {
    rsx! {
        span {
            class: "tag is-rounded is-medium is-light has-text-weight-bold {class}",
            "{text}"
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "has-text-centered has-text-grey is-size-7 py-6",
            "MuscleAtlas"
        }
    }
}
