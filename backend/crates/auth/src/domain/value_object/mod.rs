pub mod viewer_password;

pub use viewer_password::ViewerPassword;
