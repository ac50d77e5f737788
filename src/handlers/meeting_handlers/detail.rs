//! Meeting detail reads: the view page and the edit form.

use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::provider::IdentityClient;
use crate::errors::{AppError, render, render_status};
use crate::models::meeting::MeetingEditor;
use crate::templates_structs::{
    MeetingDetailTemplate, NotFoundTemplate, PageContext, ShellConfig,
};

/// GET /meetings/{id} — meeting detail in the read view.
pub async fn detail(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    identity: web::Data<IdentityClient>,
    shell: web::Data<ShellConfig>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let ctx = PageContext::build(&req, &session, &api, &identity, &shell).await?;

    let Some(meeting) = api.meeting(id).await? else {
        return meeting_not_found(ctx);
    };

    render(MeetingDetailTemplate {
        ctx,
        editor: MeetingEditor::new(meeting),
    })
}

/// GET /meetings/{id}/edit — same page with the form bound to a fresh
/// draft of the meeting.
pub async fn edit_form(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    identity: web::Data<IdentityClient>,
    shell: web::Data<ShellConfig>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let ctx = PageContext::build(&req, &session, &api, &identity, &shell).await?;

    let Some(meeting) = api.meeting(id).await? else {
        return meeting_not_found(ctx);
    };

    render(MeetingDetailTemplate {
        ctx,
        editor: MeetingEditor::editing(meeting),
    })
}

/// The absent-meeting page: a literal message, HTTP 404, and no entity
/// rendering.
pub(super) fn meeting_not_found(ctx: PageContext) -> Result<HttpResponse, AppError> {
    let message = ctx.t("meeting-not-found");
    render_status(NotFoundTemplate { ctx, message }, StatusCode::NOT_FOUND)
}
