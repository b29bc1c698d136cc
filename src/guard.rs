use crate::timer::BlockTimer;

/// A simple RAII guard for a timed block.
/// When created, its block has already begun.
/// When it goes out of scope (at the end of a block), it ends the block by
/// name, closing anything that was left open inside it.
#[must_use = "the block ends as soon as the guard is dropped"]
pub struct BlockGuard<'a> {
    timer: &'a BlockTimer,
    name: String,
}

impl<'a> BlockGuard<'a> {
    pub(crate) fn new(timer: &'a BlockTimer, name: &str) -> Self {
        BlockGuard {
            timer,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log(&self, text: &str) {
        self.timer.log(text);
    }

    /// Ends the block now rather than at the end of scope.
    pub fn finish(self) {}
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        self.timer.end_named(&self.name);
    }
}
