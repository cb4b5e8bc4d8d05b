pub enum Msg {
    SetService(String),
    SetTime(String),
    SetMessage(String),
    ShowCreate,
    ShowList,
    Submit,
    Booked,
    BookingFailed(String),
    /// Cancel request for the appointment with this id, pending confirmation.
    Cancel(i64),
    Cancelled,
    CancelFailed,
    Close,
}
