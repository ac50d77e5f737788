use askama::Template;

use crate::models::agenda::{AgendaItem, AgendaRoom};
use crate::ui::stack::{Spaced, space_between};

use super::PageContext;

/// Spacing steps on the theme scale: between rooms and between items
/// within a room.
const ROOM_GAP_STEP: usize = 4;
const ITEM_GAP_STEP: usize = 3;

pub struct AgendaRoomView {
    pub anchor: String,
    pub name: String,
    pub items: Vec<Spaced<AgendaItem>>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct AgendaTemplate {
    pub ctx: PageContext,
    pub rooms: Vec<Spaced<AgendaRoomView>>,
}

impl AgendaTemplate {
    pub fn from_rooms(ctx: PageContext, rooms: Vec<AgendaRoom>) -> Self {
        let room_gap = ctx.theme().space(ROOM_GAP_STEP);
        let item_gap = ctx.theme().space(ITEM_GAP_STEP);
        let views = rooms
            .into_iter()
            .map(|room| AgendaRoomView {
                anchor: room.anchor(),
                name: room.name,
                items: space_between(room.items, item_gap),
            })
            .collect::<Vec<_>>();
        Self {
            ctx,
            rooms: space_between(views, room_gap),
        }
    }
}
