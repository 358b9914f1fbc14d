/// Static asset resolution and serving
pub mod assets;
/// Contact form endpoints
pub mod contact;
