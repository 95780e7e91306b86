mod blog;
mod home;
mod not_found;
mod projects;

pub use blog::Blog;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
