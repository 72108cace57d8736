//! Compilation control helpers shared by the `zeug` crates.
//!
//! [`define_alias!`] turns a `#[cfg(..)]` predicate into a macro that either
//! expands its input or drops it:
//!
//! ```
//! pub mod cfg {
//!     zeug_cfg::define_alias! {
//!         #[cfg(feature = "std")] => std,
//!         #[cfg(debug_assertions)] => debug,
//!     }
//! }
//!
//! cfg::std! {
//!     extern crate std;
//! }
//!
//! cfg::debug! {
//!     fn only_in_debug() {}
//! }
//! ```
#![no_std]

/// The expansion of an alias whose predicate holds: the input, unchanged.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    ($($p:tt)*) => { $($p)* };
}

/// The expansion of an alias whose predicate does not hold: nothing.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    ($($p:tt)*) => {};
}

/// Defines one alias macro per `#[cfg(..)] => name` pair.
///
/// See the [crate-level documentation](crate) for usage.
#[macro_export]
macro_rules! define_alias {
    (@one #[cfg($meta:meta)] => $p:ident) => {
        #[cfg($meta)]
        #[doc(inline)]
        pub use $crate::enabled as $p;

        #[cfg(not($meta))]
        #[doc(inline)]
        pub use $crate::disabled as $p;
    };
    (#[cfg($meta:meta)] => $p:ident $(,)?) => {
        $crate::define_alias! { @one #[cfg($meta)] => $p }
    };
    (#[cfg($meta:meta)] => $p:ident, $($rest:tt)+) => {
        $crate::define_alias! { @one #[cfg($meta)] => $p }
        $crate::define_alias! { $($rest)+ }
    };
}
