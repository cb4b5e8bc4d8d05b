use chrono::NaiveDate;
use common::calendar::MonthView;

pub struct CalendarComponent {
    /// Month currently on screen.
    pub month: MonthView,
    /// Last clicked day, highlighted while it stays in view.
    pub selected: Option<NaiveDate>,
}

impl CalendarComponent {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: MonthView::containing(today),
            selected: None,
        }
    }
}
