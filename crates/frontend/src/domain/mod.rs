pub mod contact;
pub mod landing;
