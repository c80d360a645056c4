/// Phase of the current credits page. Derived from the time spent on the
/// page, never stored.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PageState {
    FadingIn,  // Page text is appearing
    Steady,    // Page is fully visible
    FadingOut, // Page text is disappearing before the next page
}
