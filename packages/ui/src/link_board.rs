use dioxus::prelude::*;
use store::LinkBoard;

/// Consume the `Signal<LinkBoard>` from context.
///
/// Provided by `CustomizeView`, which owns the board for the logged-in user.
/// The list, the dialogs and the save indicator all read the same signal so a
/// reorder or delete in one place is reflected everywhere.
pub fn use_link_board() -> Signal<LinkBoard> {
    use_context::<Signal<LinkBoard>>()
}
