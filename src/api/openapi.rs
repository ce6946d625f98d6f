use super::handlers::{admin, health};
use utoipa::openapi::{Contact, InfoBuilder, License, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Endpoints registered here via `.routes(routes!(...))` are both served and
/// documented. `/` and `OPTIONS /health` are added outside and stay undocumented.
pub(crate) fn api_router() -> OpenApiRouter {
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(admin::login::login))
        .routes(routes!(admin::session::logout))
        .routes(routes!(admin::session::session))
        .routes(routes!(admin::users::list_users))
        .routes(routes!(admin::users::delete_user))
        .routes(routes!(admin::users::toggle_user))
        .routes(routes!(admin::reports::stats))
        .routes(routes!(admin::reports::resumes));

    let mut admin_tag = Tag::new("admin");
    admin_tag.description = Some("Admin session and privileged dashboard actions".to_string());

    let mut health_tag = Tag::new("health");
    health_tag.description = Some("Liveness and build information".to_string());

    router.get_openapi_mut().tags = Some(vec![admin_tag, health_tag]);

    router
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(optional_str(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    info.contact = cargo_contact();
    info.license = cargo_license();

    OpenApiBuilder::new().info(info).build()
}

fn cargo_contact() -> Option<Contact> {
    // Cargo authors are `;` separated and may include "Name <email>".
    let authors = env!("CARGO_PKG_AUTHORS");
    let primary = authors.split(';').next().map(str::trim)?;
    if primary.is_empty() {
        return None;
    }

    let (name, email) = parse_author(primary);
    if name.is_none() && email.is_none() {
        return None;
    }

    let mut contact = Contact::new();
    contact.name = name.map(str::to_string);
    contact.email = email.map(str::to_string);
    Some(contact)
}

fn cargo_license() -> Option<License> {
    let identifier = optional_str(env!("CARGO_PKG_LICENSE"))?;
    let mut license = License::new(identifier);
    license.identifier = Some(identifier.to_string());
    Some(license)
}

fn optional_str(value: &'static str) -> Option<&'static str> {
    Some(value.trim()).filter(|trimmed| !trimmed.is_empty())
}

fn parse_author(author: &str) -> (Option<&str>, Option<&str>) {
    match author.split_once('<') {
        Some((name, rest)) => (
            Some(name.trim()).filter(|name| !name.is_empty()),
            Some(rest.trim_end_matches('>').trim()).filter(|email| !email.is_empty()),
        ),
        None => (Some(author.trim()).filter(|name| !name.is_empty()), None),
    }
}
