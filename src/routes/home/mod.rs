mod get;
mod post;

pub use get::home;
pub use post::sign_up;

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};
use askama::Template;

use crate::{
    domain::PlayerClass,
    form::{BannerKind, FormState, COPY_MESSAGE_TTL, FOLLOW_UP_COMMAND},
    utils::e500,
};

struct ClassOption {
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    name: &'a str,
    ip: &'a str,
    classes: Vec<ClassOption>,
    disabled: bool,
    banner_text: &'a str,
    banner_kind: &'static str,
    ip_error: &'a str,
    command_revealed: bool,
    command: &'static str,
    copy_message: &'static str,
    copy_message_ttl_ms: u128,
}

impl<'a> HomeTemplate<'a> {
    fn new(state: &'a FormState) -> Self {
        let classes = PlayerClass::ALL
            .into_iter()
            .map(|class| ClassOption {
                label: class.label(),
                selected: class.label() == state.fields.class,
            })
            .collect();
        let (banner_text, banner_kind) = match &state.banner {
            Some(banner) => (
                banner.text.as_str(),
                match banner.kind {
                    BannerKind::Info => "info",
                    BannerKind::Success => "success",
                    BannerKind::Error => "error",
                },
            ),
            None => ("", ""),
        };
        Self {
            name: &state.fields.name,
            ip: &state.fields.ip,
            classes,
            disabled: state.is_submitting(),
            banner_text,
            banner_kind,
            ip_error: state.ip_error.as_deref().unwrap_or_default(),
            command_revealed: state.command_revealed,
            command: FOLLOW_UP_COMMAND,
            copy_message: state.copy.message().unwrap_or_default(),
            copy_message_ttl_ms: COPY_MESSAGE_TTL.as_millis(),
        }
    }
}

fn render(state: &FormState, status: StatusCode) -> Result<HttpResponse, actix_web::Error> {
    let page = HomeTemplate::new(state).render().map_err(e500)?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(page))
}
