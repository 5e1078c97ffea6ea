//! # Menu Pricing Rules
//!
//! Decides, for one menu, what a product price change means for it.
//!
//! ## Floor
//! ```text
//! floor(menu) = Σ item.quantity × price(item)
//!
//! price(item) = changed.price         if item.product_id == changed.id
//!             = item.product_price    otherwise (denormalized, not re-resolved)
//! ```
//!
//! Arithmetic is checked: an overflowing floor saturates instead of wrapping.
//!
//! A displayed menu priced above its floor would sell below component cost and
//! has to be withdrawn. Only the changed product's price is known fresh; every
//! other line is taken as the store delivered it.

use crate::money::Money;
use crate::types::{Menu, Product};

/// Outcome of evaluating one menu against a changed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVerdict {
    /// No line uses the changed product; its floor did not move.
    Unaffected,
    /// Price is at or below the floor; nothing to do.
    WithinFloor { floor: Money },
    /// Price exceeds the floor but the menu is already hidden; nothing to do.
    AlreadyHidden { floor: Money },
    /// Price exceeds the floor and the menu is displayed: hide it.
    Withdraw { floor: Money },
}

impl MenuVerdict {
    pub fn requires_withdrawal(&self) -> bool {
        matches!(self, MenuVerdict::Withdraw { .. })
    }
}

/// Computes the menu floor using `changed` as the current price of its product.
///
/// A floor too large for `i64` saturates at [`Money::MAX`]; no menu price can
/// exceed it, so such a menu is never withdrawn.
pub fn menu_floor(menu: &Menu, changed: &Product) -> Money {
    menu.items
        .iter()
        .try_fold(Money::zero(), |floor, item| {
            let unit_price = if item.product_id == changed.id {
                changed.price
            } else {
                item.product_price
            };
            floor.checked_add(unit_price.checked_multiply_quantity(item.quantity)?)
        })
        .unwrap_or(Money::MAX)
}

/// Evaluates `menu` after `changed` took its new price.
///
/// Never suggests re-showing a hidden menu.
pub fn evaluate_menu(menu: &Menu, changed: &Product) -> MenuVerdict {
    if !menu.references(&changed.id) {
        return MenuVerdict::Unaffected;
    }

    let floor = menu_floor(menu, changed);
    if menu.price <= floor {
        MenuVerdict::WithinFloor { floor }
    } else if menu.displayed {
        MenuVerdict::Withdraw { floor }
    } else {
        MenuVerdict::AlreadyHidden { floor }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
