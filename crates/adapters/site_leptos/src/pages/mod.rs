mod contact;
mod home;
mod not_found;
mod path;
mod projects;
mod skills;

pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use path::Path;
pub use projects::Projects;
pub use skills::Skills;
