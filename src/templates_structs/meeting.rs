use askama::Template;

use crate::models::meeting::{Meeting, MeetingEditor};
use crate::ui::stack::{Spaced, space_between};

use super::PageContext;

const LIST_GAP_STEP: usize = 3;

#[derive(Template)]
#[template(path = "meetings/list.html")]
pub struct MeetingsListTemplate {
    pub ctx: PageContext,
    pub meetings: Vec<Spaced<Meeting>>,
}

impl MeetingsListTemplate {
    pub fn new(ctx: PageContext, meetings: Vec<Meeting>) -> Self {
        let gap = ctx.theme().space(LIST_GAP_STEP);
        Self {
            ctx,
            meetings: space_between(meetings, gap),
        }
    }
}

#[derive(Template)]
#[template(path = "meetings/detail.html")]
pub struct MeetingDetailTemplate {
    pub ctx: PageContext,
    pub editor: MeetingEditor,
}
