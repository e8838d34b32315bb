pub mod segmind;
