mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod customize;
pub use customize::CustomizeView;

mod theme_picker;
pub use theme_picker::ThemePickerView;

mod bio;
pub use bio::BioView;

mod login;
pub use login::LoginView;

mod claim;
pub use claim::ClaimView;

mod register;
pub use register::RegisterView;

mod activate;
pub use activate::ActivateView;
