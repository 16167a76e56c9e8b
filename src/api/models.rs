use serde::Serialize;

use crate::domain::{Event, Tournament};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub tournament: Tournament,
    pub events: Vec<Event>,
}
