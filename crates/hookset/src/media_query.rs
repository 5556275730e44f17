use std::rc::Rc;

use hookset_core::{Composer, Dispose, HookError};

/// Host capability backing [`use_media_query`].
pub trait MediaQueries {
    fn matches(&self, query: &str) -> bool;

    /// Calls `on_change` whenever `query` flips; the returned guard
    /// unsubscribes.
    fn subscribe(&self, query: &str, on_change: Rc<dyn Fn()>) -> Dispose;
}

pub type MediaEnvironment = Rc<dyn MediaQueries>;

/// Makes `env` available to `use_media_query` on this instance.
pub fn provide_media_queries(cx: &mut Composer, env: impl MediaQueries + 'static) {
    cx.provide_local::<MediaEnvironment>(Rc::new(env));
}

/// Whether `query` currently matches, re-rendering when it flips.
///
/// Fails with [`HookError::Unsupported`] when the host provides no
/// [`MediaQueries`] environment.
pub fn use_media_query(cx: &mut Composer, query: &str) -> Result<bool, HookError> {
    let env = cx.local::<MediaEnvironment>();

    // The effect claims its slots on every pass, with or without a host.
    let recompose = cx.recomposer();
    let subscriber = env.clone();
    let q = query.to_owned();
    cx.disposable_effect((query.to_owned(), env.is_some()), move || match subscriber {
        Some(subscriber) => {
            log::trace!("use_media_query: subscribing to {q:?}");
            subscriber.subscribe(&q, Rc::new(move || recompose.request()))
        }
        None => Dispose::noop(),
    });

    let env = env.ok_or(HookError::Unsupported {
        hook: "use_media_query",
        capability: "a media query environment",
    })?;
    Ok(env.matches(query))
}
