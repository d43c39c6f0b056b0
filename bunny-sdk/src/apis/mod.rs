//! API area clients, one module per Bunny product.

#[cfg(feature = "containers")]
pub mod containers;
#[cfg(feature = "scripting")]
pub mod scripting;
#[cfg(feature = "shield")]
pub mod shield;
#[cfg(feature = "storage")]
pub mod storage;
#[cfg(feature = "stream")]
pub mod stream;
