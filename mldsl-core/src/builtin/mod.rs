pub mod dispatch;
pub mod tables;

pub mod prelude {
    pub use super::{
        dispatch::*,
        tables::*
    };
}

#[cfg(test)]
mod tests;
