//! Pre-computed expression metadata flags.
//!
//! `ExprFlags` are computed once when a node is built, so back-ends can ask
//! "does this tree contain a dereference?" without walking it.

use bitflags::bitflags;

use crate::{ExprKind, UnaryOp};

bitflags! {
    /// Pre-computed expression properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ExprFlags: u8 {
        // === Category Flags ===

        /// Constant literal whose members are all constant literals.
        const IS_CONSTANT = 1 << 0;

        // === Presence Flags ===

        /// Contains a `symbol`.
        const HAS_SYMBOL = 1 << 1;
        /// Contains a `dereference`.
        const HAS_DEREF = 1 << 2;
        /// Contains an `address_of`.
        const HAS_ADDRESS_OF = 1 << 3;
        /// Contains an `overflow` check.
        const HAS_OVERFLOW_CHECK = 1 << 4;
    }
}

impl ExprFlags {
    /// Flags inherited from every child by bitwise OR.
    pub const PROPAGATE_MASK: Self = Self::from_bits_truncate(
        Self::HAS_SYMBOL.bits()
            | Self::HAS_DEREF.bits()
            | Self::HAS_ADDRESS_OF.bits()
            | Self::HAS_OVERFLOW_CHECK.bits(),
    );

    /// Compute the flags of a node from its kind and its children's flags.
    ///
    /// Expressions nested in types (array sizes) do not contribute.
    pub(crate) fn compute(kind: &ExprKind) -> Self {
        let fields = kind.fields();
        let children = fields.iter().flat_map(|field| field.value.exprs());

        let mut flags = Self::empty();
        let mut all_constant = true;
        for child in children {
            flags |= child.flags() & Self::PROPAGATE_MASK;
            all_constant &= child.flags().contains(Self::IS_CONSTANT);
        }

        if kind.expr_id().is_constant() && all_constant {
            flags |= Self::IS_CONSTANT;
        }
        match kind {
            ExprKind::Symbol { .. } => flags |= Self::HAS_SYMBOL,
            ExprKind::Unary { op, .. } => match op {
                UnaryOp::Dereference => flags |= Self::HAS_DEREF,
                UnaryOp::AddressOf => flags |= Self::HAS_ADDRESS_OF,
                UnaryOp::Overflow => flags |= Self::HAS_OVERFLOW_CHECK,
                _ => {}
            },
            _ => {}
        }
        flags
    }

    #[inline]
    pub const fn is_constant(self) -> bool {
        self.contains(Self::IS_CONSTANT)
    }

    /// Check if the tree mentions a program variable.
    #[inline]
    pub const fn has_symbols(self) -> bool {
        self.contains(Self::HAS_SYMBOL)
    }

    /// Check if the tree reads or takes the address of memory.
    #[inline]
    pub const fn touches_memory(self) -> bool {
        self.intersects(Self::HAS_DEREF.union(Self::HAS_ADDRESS_OF))
    }
}

#[cfg(test)]
mod tests;
