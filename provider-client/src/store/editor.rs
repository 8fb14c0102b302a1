//! Order editor state machine
//!
//! `Closed -> Editing -> Closed`, closing on successful submit or
//! explicit cancel. The draft is a clone of the listed order, so
//! in-progress edits never touch the list's copy.

use shared::models::{line_total, Order};

/// Edit state for the order edit dialog
#[derive(Debug, Clone, Default)]
pub enum OrderEditor {
    #[default]
    Closed,
    Editing {
        draft: Order,
    },
}

impl OrderEditor {
    /// Open the editor on a clone of the given order
    pub fn open(order: &Order) -> Self {
        Self::Editing {
            draft: order.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// The draft under edit, if the editor is open
    pub fn draft(&self) -> Option<&Order> {
        match self {
            Self::Closed => None,
            Self::Editing { draft } => Some(draft),
        }
    }

    /// Set a line's quantity on the draft and recompute its total
    ///
    /// Lines are kept even at quantity 0; the update payload is the full
    /// order object. Unknown product ids are ignored.
    pub fn set_line_quantity(&mut self, product_id: i64, quantity: u32) {
        if let Self::Editing { draft } = self
            && let Some(line) = draft.products.iter_mut().find(|l| l.id == product_id)
        {
            line.quantity = quantity;
            draft.total = line_total(&draft.products);
        }
    }

    /// Close the editor, returning the draft if one was open
    pub fn close(&mut self) -> Option<Order> {
        match std::mem::take(self) {
            Self::Closed => None,
            Self::Editing { draft } => Some(draft),
        }
    }
}
