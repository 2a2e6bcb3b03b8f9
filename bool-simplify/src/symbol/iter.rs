use super::Symbol;

/// An iterator that iteratively traverses the tree of symbols in left-to-right post-order (i.e.
/// depth-first). Every operand is yielded before the expression that contains it.
///
/// This iterator is created by [`Symbol::post_order_iter`].
pub struct SymbolIter<'a> {
    stack: Vec<&'a Symbol>,
    last_visited: Option<&'a Symbol>,
}

impl<'a> SymbolIter<'a> {
    /// Creates a new iterator rooted at the given symbol.
    pub fn new(symbol: &'a Symbol) -> Self {
        Self {
            stack: vec![symbol],
            last_visited: None,
        }
    }

    /// Pops the current symbol in the stack and marks it as the last visited symbol.
    fn visit(&mut self) -> Option<&'a Symbol> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given symbol is the last visited symbol.
    fn is_last_visited(&self, symbol: &'a Symbol) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, symbol),
            None => false,
        }
    }
}

impl<'a> Iterator for SymbolIter<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let symbol = *self.stack.last()?;
            let Symbol::Expr(expr) = symbol else {
                return self.visit();
            };

            // the operands have all been yielded once the last one was
            match expr.operands().last() {
                Some(last) if !self.is_last_visited(last) => {
                    self.stack.extend(expr.operands().iter().rev());
                },
                _ => return self.visit(),
            }
        }
    }
}
