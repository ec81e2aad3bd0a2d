#![warn(clippy::pedantic)]

use dioxus::prelude::*;
use log::{LevelFilter, error};

use muscle_atlas_domain as domain;
use muscle_atlas_storage as storage;
use muscle_atlas_web_app as web_app;

use component::element::ErrorMessage;
use page::{exercise::Exercise, member::Member, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/exercise/:exercise_id")]
    Exercise { exercise_id: domain::ExerciseID },
    #[route("/member/:invite_code")]
    Member { invite_code: domain::InviteCode },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

type DomainService = domain::Service<storage::rest::REST<storage::rest::GlooNetSendRequest>>;

const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
const MAIN_CSS: Asset = asset!("/assets/main.css");
const LOGO: Asset = asset!("/assets/app_logo_web.png");

fn main() {
    match web_app::Config::from_build_env() {
        Ok(config) => {
            init_logging(config.log_level);
            dioxus::LaunchBuilder::new().with_context(config).launch(App);
        }
        Err(err) => {
            init_logging(LevelFilter::Info);
            error!("invalid configuration: {err}");
            dioxus::LaunchBuilder::new()
                .with_context(err)
                .launch(ConfigurationError);
        }
    }
}

fn init_logging(level: LevelFilter) {
    let _ = web_app::log::init(level);
}

#[component]
fn App() -> Element {
    set_panic_hook();

    let config = use_context::<web_app::Config>();
    use_context_provider(|| {
        DomainService::new(storage::rest::REST::new((&config).into()))
            .with_invite_expiry(config.invite_expiry)
    });

    rsx! {
        Head {}
        Router::<Route> {}
    }
}

#[component]
fn ConfigurationError() -> Element {
    let err = use_context::<web_app::ConfigError>();

    rsx! {
        Head {}
        section {
            class: "section",
            ErrorMessage { message: "{err}" }
        }
    }
}

#[component]
fn Head() -> Element {
    rsx! {
        document::Title { "MuscleAtlas - 회원 운동 현황" }
        document::Meta { name: "description", content: "트레이너가 공유한 회원 운동 정보" }
        for (property, content) in open_graph() {
            document::Meta { property: "{property}", content: "{content}" }
        }
        document::Link { rel: "stylesheet", href: BULMA_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
    }
}

fn open_graph() -> [(&'static str, String); 3] {
    [
        ("og:title", "MuscleAtlas".to_string()),
        ("og:description", "회원 운동 현황을 확인하세요".to_string()),
        ("og:image", LOGO.to_string()),
    ]
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the application cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block has-text-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            Reload page
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));
}
