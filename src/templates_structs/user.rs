use askama::Template;

use crate::models::user::User;

use super::PageContext;

#[derive(Template)]
#[template(path = "users/profile.html")]
pub struct UserProfileTemplate {
    pub ctx: PageContext,
    pub user: User,
}
