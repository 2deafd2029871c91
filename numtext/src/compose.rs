//! # Function Composition
//!
//! Chains unary callables into a single callable that applies them left to
//! right: `compose!(f1, f2, f3)(x) == f3(f2(f1(x)))`.
//!
//! Each callable is moved into the composed result, so closures that own
//! state (counters, buffers) keep working after composition. Composition is
//! a plain left fold over [`compose`] and has no runtime error path.
//!
//! ```
//! use numtext::codec::{decode, encode};
//! use numtext::compose;
//!
//! let mut increment_text = compose!(
//!     |text: &str| decode::<u32>(text).unwrap_or_default(),
//!     |value: u32| value.saturating_add(1),
//!     |value: u32| encode(value).to_string(),
//! );
//!
//! assert_eq!(increment_text("41"), "42");
//! ```

/// Composes two callables: the result applies `first`, then `second`.
pub fn compose<A, B, C, F, G>(mut first: F, mut second: G) -> impl FnMut(A) -> C
where
    F: FnMut(A) -> B,
    G: FnMut(B) -> C,
{
    move |x| second(first(x))
}

/// Composes a sequence of callables of the same input and output type.
///
/// The callables are applied in iteration order. An empty sequence yields
/// the identity function.
pub fn compose_all<T, F, I>(callables: I) -> impl FnMut(T) -> T
where
    I: IntoIterator<Item = F>,
    F: FnMut(T) -> T,
{
    let mut callables: Vec<F> = callables.into_iter().collect();
    move |x| callables.iter_mut().fold(x, |acc, f| f(acc))
}

/// Composes two or more callables, applied left to right.
///
/// `compose!(f1, f2, ..., fn)` expands to nested [`compose`] calls and
/// returns a callable `g` with `g(x) == fn(...f2(f1(x))...)`. Passing fewer
/// than two callables does not compile.
///
/// [`compose`]: crate::compose::compose
#[macro_export]
macro_rules! compose {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {{
        let composed = $crate::compose::compose($first, $second);
        $(
            let composed = $crate::compose::compose(composed, $rest);
        )*
        composed
    }};
}
