use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::provider::IdentityClient;
use crate::errors::{AppError, render};
use crate::templates_structs::{AgendaTemplate, PageContext, ShellConfig};

/// GET / — the festival agenda: every room with its scheduled items.
pub async fn index(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    identity: web::Data<IdentityClient>,
    shell: web::Data<ShellConfig>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &api, &identity, &shell).await?;
    let rooms = api.agenda().await?;
    render(AgendaTemplate::from_rooms(ctx, rooms))
}
