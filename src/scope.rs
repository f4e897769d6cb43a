//! The codec settings in force on the current thread
//!
//! A codec enters a scope around every payload it reads or writes. Nested
//! [`TaggedVec`](crate::containers::TaggedVec) and
//! [`TaggedValue`](crate::containers::TaggedValue) fields only see a generic
//! serde (de)serializer, so they look up the innermost scope to find the
//! keys and policy of the codec that reached them, and report their typed
//! failure back through it.

use std::cell::RefCell;

use crate::{config::CodecConfig, error::Error, registry::Family};

struct Frame {
    config: CodecConfig,
    failure: Option<Error>,
}

thread_local! {
    static FRAMES: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

/// Pops the frame it was created for, even when the scoped call unwinds
struct Exit;

impl Drop for Exit {
    fn drop(&mut self) {
        FRAMES.with(|frames| {
            frames.borrow_mut().pop();
        });
    }
}

/// Runs `f` with `config` in force, returning its result and any nested
/// failure recorded while it ran
pub(crate) fn enter<T>(config: &CodecConfig, f: impl FnOnce() -> T) -> (T, Option<Error>) {
    FRAMES.with(|frames| {
        frames.borrow_mut().push(Frame {
            config: config.clone(),
            failure: None,
        })
    });
    let exit = Exit;

    let output = f();
    let failure = FRAMES.with(|frames| {
        frames
            .borrow_mut()
            .last_mut()
            .and_then(|frame| frame.failure.take())
    });

    drop(exit);
    (output, failure)
}

/// The settings of the innermost scope, or the family's own outside any
pub(crate) fn config<E: Family>() -> CodecConfig {
    FRAMES
        .with(|frames| frames.borrow().last().map(|frame| frame.config.clone()))
        .unwrap_or_else(E::config)
}

/// Records a nested failure with the innermost scope, if there is one, and
/// returns its message
pub(crate) fn fail(error: Error) -> String {
    let msg = error.to_string();

    FRAMES.with(|frames| {
        if let Some(frame) = frames.borrow_mut().last_mut() {
            frame.failure = Some(error);
        }
    });

    msg
}
