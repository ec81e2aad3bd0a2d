use chrono::Local;
use dioxus::prelude::*;

use muscle_atlas_domain::{self as domain, MemberService, PageState};
use muscle_atlas_web_app as web_app;

use crate::{
    DomainService, Route,
    component::element::{ErrorMessage, Footer, Header, LoadingPage, Placeholder, Tag},
    page::use_page,
};

#[component]
pub fn Member(invite_code: domain::InviteCode) -> Element {
    let service = use_context::<DomainService>();
    let page = use_page(domain::InviteCode::resolve(&invite_code), move |code| {
        let service = service.clone();
        async move { service.get_member_page(&code).await }
    });

    match page.read().state() {
        PageState::Loading => rsx! { LoadingPage {} },
        PageState::Error(err) => rsx! { ErrorMessage { message: err.to_string() } },
        PageState::Content(member_page) => view_member_page(member_page),
    }
}

fn view_member_page(page: &domain::MemberPage) -> Element {
    let member = &page.member;

    rsx! {
        Header { title: "{member.name} 님 운동 현황" }
        div {
            class: "container is-max-tablet px-4",
            {view_profile(member)}
            if !member.memo.is_empty() {
                {view_memo(member)}
            }
            section {
                h3 { class: "title is-5", "운동 종목" }
                for entry in &page.exercises {
                    {view_exercise(entry)}
                }
                if !page.has_exercises() {
                    Placeholder { message: "등록된 운동이 없습니다." }
                }
            }
        }
        Footer {}
    }
}

fn view_profile(member: &domain::Member) -> Element {
    rsx! {
        section {
            class: "has-text-centered mb-5",
            div { class: "avatar mb-4", "{member.initial()}" }
            h2 { class: "title is-4", "{member.name}" }
            if !member.tags.is_empty() {
                div {
                    class: "tags is-centered",
                    for tag in &member.tags {
                        Tag {
                            text: "{tag.icon} {tag.text}",
                            class: "{web_app::tag_class(&tag.color)}",
                        }
                    }
                }
            }
        }
    }
}

fn view_memo(member: &domain::Member) -> Element {
    let date = web_app::format_date(&member.memo_date().with_timezone(&Local));

    rsx! {
        section {
            class: "box",
            div {
                class: "is-flex is-justify-content-space-between is-size-7 has-text-grey mb-2",
                span { "최근 메모" }
                span { "{date}" }
            }
            p { "{member.memo}" }
        }
    }
}

fn view_exercise(entry: &domain::MemberExerciseEntry) -> Element {
    let exercise = &entry.exercise;

    rsx! {
        Link {
            class: "box is-flex is-align-items-center",
            to: Route::Exercise { exercise_id: exercise.id.clone() },
            div { class: "exercise-icon", "{web_app::exercise_emoji(&exercise.name)}" }
            div {
                class: "is-flex-grow-1 ml-4",
                p { class: "has-text-weight-semibold", "{exercise.name}" }
                p {
                    class: "is-size-7",
                    class: if entry.can_perform { "has-text-success" } else { "has-text-grey" },
                    if entry.can_perform { "수행 가능" } else { "수행 불가" }
                }
            }
            span {
                class: "status-dot",
                class: if entry.can_perform { "is-active" },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn member(name: &str, memo: &str) -> domain::Member {
        domain::Member {
            id: "m1".into(),
            name: name.to_string(),
            memo: memo.to_string(),
            tags: vec![domain::MemberTag {
                text: "초보".to_string(),
                icon: "🔰".to_string(),
                color: domain::TagColor::Primary,
            }],
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: None,
        }
    }

    #[test]
    fn test_view_member_page_without_exercises() {
        fn app() -> Element {
            view_member_page(&domain::MemberPage {
                member: member("김철수", "무릎 주의"),
                exercises: vec![],
            })
        }

        let html = crate::page::render(app);

        assert!(html.contains("김철수 님 운동 현황"));
        assert!(html.contains("초보"));
        assert!(html.contains("최근 메모"));
        assert!(html.contains("무릎 주의"));
        assert!(html.contains("등록된 운동이 없습니다."));
    }

    #[test]
    fn test_view_member_page_without_name_and_memo() {
        fn app() -> Element {
            view_member_page(&domain::MemberPage {
                member: member("", ""),
                exercises: vec![],
            })
        }

        let html = crate::page::render(app);

        assert!(html.contains(">?</div>"));
        assert!(!html.contains("최근 메모"));
    }
}
