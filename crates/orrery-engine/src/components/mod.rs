pub mod attachment;
pub mod body;
