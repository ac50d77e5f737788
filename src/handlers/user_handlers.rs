use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::provider::IdentityClient;
use crate::errors::{AppError, render, render_status};
use crate::templates_structs::{NotFoundTemplate, PageContext, ShellConfig, UserProfileTemplate};

/// GET /u/{slug} — public user profile.
pub async fn profile(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    identity: web::Data<IdentityClient>,
    shell: web::Data<ShellConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let ctx = PageContext::build(&req, &session, &api, &identity, &shell).await?;

    let Some(user) = api.user_by_slug(&slug).await? else {
        let message = ctx.t("user-not-found");
        return render_status(NotFoundTemplate { ctx, message }, StatusCode::NOT_FOUND);
    };

    render(UserProfileTemplate { ctx, user })
}
