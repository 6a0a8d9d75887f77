mod alert;
mod button;
mod pagination;
mod record_card;
mod search_box;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use pagination::Pagination;
pub(crate) use record_card::RecordCard;
pub(crate) use search_box::SearchBox;
pub(crate) use spinner::Spinner;
