//! Images and the sprites cut from them.

pub mod animated;
pub mod image;
