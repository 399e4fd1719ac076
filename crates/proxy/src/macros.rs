//! `contract!`: declare a capability contract and its forwarder
//!
//! The macro is the build-time stand-in for synthesizing a forwarding type:
//! it checks every member against the accessor shape, then emits the trait,
//! its [`Contract`](crate::Contract) implementation and the forwarding
//! implementation for [`Forwarder<dyn Trait>`](crate::Forwarder).
//!
//! Accepted members have exactly the form `fn name(&self) -> Type;`. Anything
//! else stops compilation with a message naming the member:
//!
//! ```compile_fail
//! swapcell_proxy::contract! {
//!     trait Counter {
//!         fn count(&self) -> u64;
//!         fn set_count(&mut self, count: u64);
//!     }
//! }
//! ```
//!
//! ```compile_fail
//! swapcell_proxy::contract! {
//!     trait Lookup {
//!         fn find(&self, key: &str) -> Option<String>;
//!     }
//! }
//! ```

/// Declare a capability contract of read-only accessors
///
/// ```
/// use std::sync::Arc;
/// use swapcell_proxy::{contract, ForwarderFactory};
///
/// contract! {
///     pub trait Person {
///         fn name(&self) -> String;
///         fn age(&self) -> u32;
///     }
/// }
///
/// struct Record(&'static str, u32);
///
/// impl Person for Record {
///     fn name(&self) -> String {
///         self.0.to_string()
///     }
///     fn age(&self) -> u32 {
///         self.1
///     }
/// }
///
/// let handle = ForwarderFactory::new()
///     .create::<dyn Person>(Arc::new(Record("Alice", 30)))
///     .unwrap();
/// let view = Arc::clone(handle.value());
///
/// handle.update_value(Arc::new(Record("Bob", 40))).unwrap();
/// assert_eq!(view.name(), "Bob");
/// assert_eq!(view.age(), 40);
/// ```
#[macro_export]
macro_rules! contract {
    // All members accepted: emit.
    (@munch [$($attr:tt)*] [$vis:vis] $name:ident
        [$({ [$($fattr:tt)*] $accessor:ident $ret:ty })*]
    ) => {
        $($attr)*
        $vis trait $name: ::core::marker::Send + ::core::marker::Sync {
            $(
                $($fattr)*
                fn $accessor(&self) -> $ret;
            )*
        }

        impl $crate::Contract for dyn $name {
            fn shape() -> &'static $crate::ContractShape {
                const MEMBERS: &[$crate::Member] = &[
                    $($crate::Member::accessor(
                        ::core::stringify!($accessor),
                        ::core::stringify!($ret),
                    ),)*
                ];
                static SHAPE: $crate::ContractShape =
                    $crate::ContractShape::new(::core::stringify!($name), MEMBERS);
                &SHAPE
            }

            fn expose(
                forwarder: ::std::sync::Arc<$crate::Forwarder<Self>>,
            ) -> ::std::sync::Arc<Self> {
                forwarder
            }
        }

        impl $name for $crate::Forwarder<dyn $name> {
            $(
                #[inline]
                fn $accessor(&self) -> $ret {
                    $crate::Forwarder::current(self).$accessor()
                }
            )*
        }
    };

    (@munch $attrs:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fattr:meta])*
        fn $accessor:ident(&self) -> $ret:ty;
        $($rest:tt)*
    ) => {
        $crate::contract!(@munch $attrs $vis $name
            [$($acc)* { [$(#[$fattr])*] $accessor $ret }]
            $($rest)*
        );
    };

    (@munch $attrs:tt $vis:tt $name:ident $acc:tt
        $(#[$fattr:meta])*
        fn $member:ident(&mut self $($args:tt)*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        ::core::compile_error!(::core::concat!(
            "contract member `", ::core::stringify!($member),
            "` takes `&mut self`; settable members cannot be forwarded"
        ));
    };

    (@munch $attrs:tt $vis:tt $name:ident $acc:tt
        $(#[$fattr:meta])*
        fn $member:ident(&self, $($args:tt)*) $(-> $ret:ty)?;
        $($rest:tt)*
    ) => {
        ::core::compile_error!(::core::concat!(
            "contract member `", ::core::stringify!($member),
            "` takes arguments; accessors take only `&self`"
        ));
    };

    (@munch $attrs:tt $vis:tt $name:ident $acc:tt
        $(#[$fattr:meta])*
        fn $member:ident(&self);
        $($rest:tt)*
    ) => {
        ::core::compile_error!(::core::concat!(
            "contract member `", ::core::stringify!($member),
            "` returns nothing; accessors must return a value"
        ));
    };

    (@munch $attrs:tt $vis:tt $name:ident $acc:tt $($rest:tt)+) => {
        ::core::compile_error!(::core::concat!(
            "unsupported member in contract `", ::core::stringify!($name),
            "`; only `fn name(&self) -> Type;` accessors are allowed"
        ));
    };

    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident { $($body:tt)* }
    ) => {
        $crate::contract!(@munch [$(#[$meta])*] [$vis] $name [] $($body)*);
    };
}
