pub mod avatar_style;
