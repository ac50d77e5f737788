use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::provider::IdentityClient;
use crate::errors::{AppError, render};
use crate::templates_structs::{MeetingsListTemplate, PageContext, ShellConfig};

/// GET /meetings — all meetings known to the API.
pub async fn list(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    identity: web::Data<IdentityClient>,
    shell: web::Data<ShellConfig>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &api, &identity, &shell).await?;
    let meetings = api.meetings().await?;
    render(MeetingsListTemplate::new(ctx, meetings))
}
