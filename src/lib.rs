//! Overlap testing for circles, axis-aligned rectangles and vehicles composed of them.


pub mod domain;
