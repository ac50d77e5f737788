mod detail;
mod edit;
mod forms;
mod list;

pub use detail::{detail, edit_form};
pub use edit::confirm;
pub use forms::MeetingEditForm;
pub use list::list;
