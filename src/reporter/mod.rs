pub mod json;
pub mod terminal;

use crate::brand::ClassifyResult;

pub trait Reporter {
    fn report(&self, result: &ClassifyResult) -> String;
}
