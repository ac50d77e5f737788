use askama::Template;

use super::PageContext;

/// Fail-soft page for absent entities: the literal localized message,
/// nothing else.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
    pub message: String,
}
