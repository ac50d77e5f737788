/// Form payload of the meeting edit form. Missing optional fields
/// deserialize to empty strings so the draft binding stays uniform.
#[derive(serde::Deserialize)]
pub struct MeetingEditForm {
    pub csrf_token: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_time: String,
}
