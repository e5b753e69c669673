mod auth;
mod landing;

pub(crate) use auth::{LoginPage, RegisterPage};
pub(crate) use landing::LandingPage;
