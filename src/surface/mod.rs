//! Host rendering surface capability.

pub mod layer;
