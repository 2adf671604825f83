pub mod builtin_font;
pub mod font;
pub mod gradient;
pub mod icon_gen;
pub mod inspect;
pub mod manifest;
