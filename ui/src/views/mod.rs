mod about;
mod elsewhere;
mod home;

pub use about::About;
pub use elsewhere::Elsewhere;
pub use home::Home;
