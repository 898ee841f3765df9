mod body;
mod forbidden;
mod home;
mod landing;
mod status;
#[cfg(test)]
mod testing;

pub use body::Body;
pub use forbidden::Forbidden;
pub use home::Home;
pub use landing::Landing;
pub use status::StatusPage;
