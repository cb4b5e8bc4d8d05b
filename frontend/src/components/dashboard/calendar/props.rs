use chrono::NaiveDate;
use common::calendar::DaySelection;
use common::Appointment;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalendarProps {
    /// Every appointment of the patient; the grid picks the ones in view.
    pub appointments: Vec<Appointment>,
    /// Local date used to mark today and disable past days.
    pub today: NaiveDate,
    /// Fired when a selectable day is clicked.
    pub on_select: Callback<DaySelection>,
}
