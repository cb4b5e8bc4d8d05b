pub enum Msg {
    PreviousMonth,
    NextMonth,
    /// Jump back to the month containing today.
    Today,
    /// Day number within the displayed month.
    SelectDay(u32),
}
