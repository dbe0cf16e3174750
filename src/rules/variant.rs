//! Variant rule hooks.
//!
//! Variants implement `VariantRules` to add allowances on top of the
//! shared resolver and turn engine. The engine calls into the active
//! variant but never branches on which variant it is.

use crate::core::TurnStatistics;
use crate::dice::DiceSet;

/// Rule set of one game variant.
///
/// ## Implementation Notes
///
/// - Hooks are pure: they read statistics and dice, never change them
/// - Defaults describe the base Fevga rules
pub trait VariantRules {
    /// Display name of the variant.
    fn name(&self) -> &str;

    /// May the player go on with the next higher double after `dice`?
    ///
    /// Called on a finished dice set. The caller builds the escalated roll.
    fn has_doubling_boost(&self, _stats: &TurnStatistics, _dice: &DiceSet) -> bool {
        false
    }
}
