mod assets;
mod contact;
mod helpers;
