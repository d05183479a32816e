pub use self::description::Description;

use super::StateId;

pub(super) mod compiler;
pub(super) mod model;
pub(super) mod sim;

mod description;
mod dot;

#[cfg(test)]
mod tests {
    mod proptest;
}
