pub mod json;
pub mod sarif;
pub mod terminal;

use crate::scanner::ScanResult;

pub trait Reporter {
    fn report(&self, result: &ScanResult) -> String;
}
