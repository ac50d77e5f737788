//! Meeting edit confirmation.
//!
//! The submitted draft is validated and, when valid, committed to the
//! page's local copy only. There is no persistence call behind this
//! route, so the committed state lives exactly as long as the response.

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::csrf;
use crate::auth::provider::IdentityClient;
use crate::errors::{AppError, render};
use crate::models::meeting::MeetingEditor;
use crate::templates_structs::{MeetingDetailTemplate, PageContext, ShellConfig};

use super::detail::meeting_not_found;
use super::forms::MeetingEditForm;

/// POST /meetings/{id} — bind the form to the draft and confirm the edit.
/// On validation failure the page re-renders in the edit state with
/// field-level errors; on success it returns to the read view showing the
/// committed draft.
pub async fn confirm(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    identity: web::Data<IdentityClient>,
    shell: web::Data<ShellConfig>,
    path: web::Path<i64>,
    form: web::Form<MeetingEditForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let ctx = PageContext::build(&req, &session, &api, &identity, &shell).await?;

    let Some(meeting) = api.meeting(id).await? else {
        return meeting_not_found(ctx);
    };

    let mut editor = MeetingEditor::editing(meeting);
    editor.set_title(&form.title);
    editor.set_description(&form.description);
    editor.set_start_time(&form.start_time);
    editor.confirm();

    render(MeetingDetailTemplate { ctx, editor })
}
