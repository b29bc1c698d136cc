// src/shared.rs
// A process-wide timer behind free functions, for quick drop-in use.
//
// The instance is created on first use. A first `log` that is not preceded by
// `begin` therefore reports the time since that lazy creation, which only shows
// how lazy it is and is not a meaningful measurement.

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::guard::BlockGuard;
use crate::timer::BlockTimer;

static SHARED: Lazy<BlockTimer> = Lazy::new(|| BlockTimer::from_config(Config::from_env()));

pub fn shared() -> &'static BlockTimer {
    &SHARED
}

/// See [`BlockTimer::log`].
pub fn log(text: &str) {
    SHARED.log(text);
}

/// See [`BlockTimer::begin`].
pub fn begin(name: &str) {
    SHARED.begin(name);
}

/// See [`BlockTimer::begin_with_message`].
pub fn begin_with_message(name: &str, message: &str) {
    SHARED.begin_with_message(name, message);
}

/// Ends any block. Use [`end_named`] when possible to avoid attribution errors.
pub fn end() {
    SHARED.end();
}

/// See [`BlockTimer::end_named`].
pub fn end_named(name: &str) {
    SHARED.end_named(name);
}

/// See [`BlockTimer::scoped`].
pub fn scoped(name: &str) -> BlockGuard<'static> {
    SHARED.scoped(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_open(name: &str) -> bool {
        shared().open_blocks().iter().any(|open| open == name)
    }

    // One test only: parallel tests sharing the instance would force-end each other's blocks.
    #[test]
    fn test_shared_facade() {
        crate::sink::capture::install();
        assert!(std::ptr::eq(shared(), shared()));

        begin("shared-delegate");
        log("inside");
        assert!(is_open("shared-delegate"));
        end_named("shared-delegate");
        assert!(!is_open("shared-delegate"));

        {
            let _guard = scoped("shared-scoped");
            begin_with_message("shared-scoped-inner", "nested");
            assert!(is_open("shared-scoped-inner"));
        }
        assert!(!is_open("shared-scoped"));
        assert!(!is_open("shared-scoped-inner"));

        begin("shared-bare");
        end();
        assert_eq!(shared().depth(), 0);
    }
}
