pub mod frame;
pub mod sequence;
pub mod offline;
