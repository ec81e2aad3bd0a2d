use dioxus::prelude::*;

use muscle_atlas_domain::{self as domain, ExerciseService, PageState};
use muscle_atlas_web_app as web_app;

use crate::{
    DomainService,
    component::element::{
        Block, Color, ErrorMessage, Footer, Header, LoadingPage, Placeholder, SectionTitle, Tag,
    },
    page::use_page,
};

#[component]
pub fn Exercise(exercise_id: domain::ExerciseID) -> Element {
    let service = use_context::<DomainService>();
    let page = use_page(domain::ExerciseID::resolve(&exercise_id), move |id| {
        let service = service.clone();
        async move { service.get_exercise_page(&id).await }
    });

    match page.read().state() {
        PageState::Loading => rsx! { LoadingPage {} },
        PageState::Error(err) => rsx! { ErrorMessage { message: err.to_string() } },
        PageState::Content(exercise_page) => view_exercise_page(exercise_page),
    }
}

fn view_exercise_page(page: &domain::ExercisePage) -> Element {
    let name = &page.exercise.name;
    let technical_cards = page.technical_cards();
    let safety_cards = page.safety_cards();

    rsx! {
        Header { title: "운동 종목 상세", back: true }
        div {
            class: "container is-max-tablet px-4",
            section {
                class: "hero-image has-text-centered",
                span { class: "is-size-1", "{web_app::exercise_emoji(name)}" }
                span { class: "is-size-7 has-text-grey", "Exercise Image" }
            }
            h2 { class: "title is-3 mt-5", "{name}" }
            Block {
                Tag { text: "COMPOUND", class: "is-info" }
            }
            if let Some(mechanics) = page.mechanics() {
                SectionTitle { title: "MOVEMENT MECHANICS" }
                div {
                    class: "columns is-mobile",
                    div { class: "column", PhaseCard { mechanics: mechanics } }
                    div { class: "column", ContractionCard {} }
                }
            }
            if !technical_cards.is_empty() {
                SectionTitle { title: "TECHNICAL BREAKDOWN" }
                for card in &technical_cards {
                    {view_detail_card(card, Color::Info)}
                }
            }
            if !safety_cards.is_empty() {
                SectionTitle { title: "STABILIZATION & SAFETY" }
                for card in &safety_cards {
                    {view_detail_card(card, Color::Warning)}
                }
            }
            if !page.has_details() {
                div {
                    class: "box",
                    Placeholder { message: "아직 상세 정보가 등록되지 않았습니다." }
                }
            }
        }
        Footer {}
    }
}

#[component]
fn PhaseCard(mechanics: domain::MovementMechanics) -> Element {
    rsx! {
        div {
            class: "box",
            p { class: "is-size-7 has-text-weight-bold has-text-info mb-3", "⇅ PHASE" }
            Label { label: "DESCENDING", value: mechanics.descending.clone() }
            Label { label: "ASCENDING", value: mechanics.ascending.clone() }
        }
    }
}

#[component]
fn ContractionCard() -> Element {
    rsx! {
        div {
            class: "box",
            p { class: "is-size-7 has-text-weight-bold has-text-link mb-3", "⇅ CONTRACTION" }
            Label { label: "LOWERING", value: domain::ECCENTRIC.to_string() }
            Label { label: "LIFTING", value: domain::CONCENTRIC.to_string() }
        }
    }
}

#[component]
fn Label(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "mb-3",
            p { class: "is-size-7 has-text-grey", "{label}" }
            p { class: "has-text-weight-medium", "{value}" }
        }
    }
}

fn view_detail_card(card: &domain::DetailCard<'_>, color: Color) -> Element {
    rsx! {
        div {
            class: "box detail-card is-{color}",
            h4 {
                class: "title is-6",
                if color == Color::Warning {
                    span { class: "mr-2", "⚠️" }
                }
                "{card.title}"
            }
            for detail in card.details {
                div {
                    class: "is-flex mb-2",
                    if let Some(category) = &detail.detail_category {
                        span {
                            class: "detail-category has-text-{color} has-text-weight-medium is-size-7",
                            "{category}"
                        }
                    }
                    span {
                        class: "is-size-7",
                        {detail.description.clone().unwrap_or_default()}
                    }
                }
            }
        }
    }
}
