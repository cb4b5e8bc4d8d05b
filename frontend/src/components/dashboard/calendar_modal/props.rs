use common::calendar::DaySelection;
use common::User;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalendarModalProps {
    /// Day the modal was opened for, with the appointments booked on it.
    pub selection: DaySelection,
    /// Signed-in patient; their name, email and phone go into every booking.
    pub user: User,
    pub on_close: Callback<()>,
    /// Fired after a booking or cancellation succeeds so the dashboard re-fetches.
    pub on_changed: Callback<()>,
}
