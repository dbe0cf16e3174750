//! Fevga: the base rule set. No doubling boost.

use crate::rules::VariantRules;

/// Plain Fevga rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fevga;

impl VariantRules for Fevga {
    fn name(&self) -> &str {
        "Fevga"
    }
}
