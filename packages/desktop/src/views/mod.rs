mod login;
pub use login::Login;

mod claim;
pub use claim::Claim;

mod register;
pub use register::Register;

mod customize;
pub use customize::Customize;

mod theme_picker;
pub use theme_picker::ThemePicker;

mod bio;
pub use bio::Bio;
