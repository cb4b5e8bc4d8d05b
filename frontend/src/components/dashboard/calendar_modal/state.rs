use common::booking::ModalState;
use common::calendar::DaySelection;
use gloo_timers::callback::Timeout;

pub struct CalendarModal {
    pub modal: ModalState,
    /// Pending auto-close after a successful booking. Dropping it cancels it.
    pub _close_timer: Option<Timeout>,
}

impl CalendarModal {
    pub fn new(selection: DaySelection) -> Self {
        Self {
            modal: ModalState::open(selection),
            _close_timer: None,
        }
    }
}
